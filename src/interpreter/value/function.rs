use std::sync::Arc;

use crate::{ast::Expression, interpreter::evaluator::core::EvaluationContext};

/// A callable that a [`FunctionCall`](Expression::FunctionCall) node can
/// delegate to.
///
/// The callee receives its arguments unevaluated, together with the context
/// of the running evaluation, and answers with the expression the call
/// simplifies to. What it evaluates, and which diagnostics it raises on the
/// way, is entirely up to the callee.
pub trait Function: Send + Sync {
    /// The name used when the function is rendered as text.
    fn name(&self) -> &str;

    /// Invokes the function.
    fn call(&self, arguments: &[Arc<Expression>], context: &EvaluationContext<'_>) -> Arc<Expression>;
}

/// A shared, identity-compared handle to a [`Function`].
///
/// Two handles are equal only if they point at the same callable; cloning a
/// handle keeps that identity.
#[derive(Clone)]
pub struct FunctionRef(Arc<dyn Function>);

impl FunctionRef {
    /// Wraps a callable in a fresh handle with its own identity.
    pub fn new(function: impl Function + 'static) -> Self {
        Self(Arc::new(function))
    }

    /// Returns `true` if both handles refer to the same callable.
    ///
    /// Only the data addresses are compared; vtable pointers of the same type
    /// may differ between codegen units.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    ///
    /// use asmexpr::{
    ///     ast::Expression,
    ///     interpreter::{
    ///         evaluator::core::EvaluationContext,
    ///         value::function::{Function, FunctionRef},
    ///     },
    /// };
    ///
    /// struct Nothing;
    ///
    /// impl Function for Nothing {
    ///     fn name(&self) -> &str {
    ///         "nothing"
    ///     }
    ///
    ///     fn call(&self, _: &[Arc<Expression>], _: &EvaluationContext<'_>) -> Arc<Expression> {
    ///         Expression::undetermined()
    ///     }
    /// }
    ///
    /// let a = FunctionRef::new(Nothing);
    /// let b = FunctionRef::new(Nothing);
    ///
    /// assert!(a.ptr_eq(&a.clone()));
    /// assert!(!a.ptr_eq(&b));
    /// ```
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }

    /// The callable's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.0.name()
    }

    /// Invokes the callable.
    #[must_use]
    pub fn call(&self, arguments: &[Arc<Expression>], context: &EvaluationContext<'_>) -> Arc<Expression> {
        self.0.call(arguments, context)
    }
}

impl PartialEq for FunctionRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl std::fmt::Debug for FunctionRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FunctionRef").field(&self.name()).finish()
    }
}
