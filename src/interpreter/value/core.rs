use crate::{
    interpreter::value::function::FunctionRef,
    util::num::float_to_string,
};

/// Represents a runtime value in the evaluator.
///
/// A value is always a concrete scalar. The absence of a value
/// ("undetermined") is not a variant: it is carried out of band as
/// `Option<Value>::None`, and never carries error state either.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A double precision floating-point value.
    Float(f64),
    /// A 64 bit signed integer.
    SignedInt(i64),
    /// A 64 bit unsigned integer. Comparison, division, modulus and text
    /// rendering all read the bits unsigned.
    UnsignedInt(u64),
    /// A piece of text.
    String(String),
    /// A handle to a callable, compared by identity.
    Function(FunctionRef),
}

/// The kind of a [`Value`], without its payload.
///
/// The coercion table is keyed by `Option<ValueKind>`, where `None` stands
/// for an undetermined operand.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Float`]
    Float,
    /// [`Value::SignedInt`]
    SignedInt,
    /// [`Value::UnsignedInt`]
    UnsignedInt,
    /// [`Value::String`]
    String,
    /// [`Value::Function`]
    Function,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::SignedInt(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::UnsignedInt(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::UnsignedInt(u64::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<FunctionRef> for Value {
    fn from(v: FunctionRef) -> Self {
        Self::Function(v)
    }
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Float(_) => ValueKind::Float,
            Self::SignedInt(_) => ValueKind::SignedInt,
            Self::UnsignedInt(_) => ValueKind::UnsignedInt,
            Self::String(_) => ValueKind::String,
            Self::Function(_) => ValueKind::Function,
        }
    }

    /// Returns the boolean reading of the value.
    ///
    /// Zero (of any numeric kind) and the empty string are false; everything
    /// else, functions included, is true.
    ///
    /// # Example
    /// ```
    /// use asmexpr::interpreter::value::core::Value;
    ///
    /// assert!(!Value::UnsignedInt(0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(Value::Float(0.5).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Float(f) => *f != 0.0,
            Self::SignedInt(i) => *i != 0,
            Self::UnsignedInt(u) => *u != 0,
            Self::String(s) => !s.is_empty(),
            Self::Function(_) => true,
        }
    }

    /// Returns `true` if the value is [`Value::Function`].
    #[must_use]
    pub const fn is_function(&self) -> bool {
        matches!(self, Self::Function(..))
    }

    /// Returns `true` if the value is [`Value::String`].
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }
}

/// Returns the boolean reading of a possibly undetermined value.
///
/// An undetermined value is false.
#[must_use]
pub fn is_truthy(value: Option<&Value>) -> bool {
    value.is_some_and(Value::is_truthy)
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Float(r) => write!(f, "{}", float_to_string(*r)),
            Self::SignedInt(n) => write!(f, "{n}"),
            Self::UnsignedInt(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Function(function) => write!(f, "<function {}>", function.name()),
        }
    }
}
