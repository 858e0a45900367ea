use std::sync::Arc;

use crate::interpreter::value::core::Value;

/// An immutable expression tree node.
///
/// Nodes come in two flavours. *Value-oriented* nodes ([`Value`],
/// [`ProgramCounter`], [`Identifier`], [`Unary`] and [`Binary`]) evaluate
/// directly to a value. *Expression-oriented* nodes ([`Grouping`],
/// [`Conditional`], [`Indexer`], [`Period`] and [`FunctionCall`]) first
/// simplify into a different node, which is then evaluated in turn.
///
/// Children are shared through [`Arc`], so a tree can be evaluated from many
/// threads at once and simplification can hand back a child without copying
/// it.
///
/// [`Value`]: Expression::Value
/// [`ProgramCounter`]: Expression::ProgramCounter
/// [`Identifier`]: Expression::Identifier
/// [`Unary`]: Expression::Unary
/// [`Binary`]: Expression::Binary
/// [`Grouping`]: Expression::Grouping
/// [`Conditional`]: Expression::Conditional
/// [`Indexer`]: Expression::Indexer
/// [`Period`]: Expression::Period
/// [`FunctionCall`]: Expression::FunctionCall
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A constant, or no value at all when undetermined.
    Value(Option<Value>),
    /// The current program counter, as an unsigned integer.
    ProgramCounter,
    /// A symbol reference resolved through the context's symbol lookup.
    Identifier(String),
    /// A unary operation.
    Unary {
        /// The operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Arc<Self>,
    },
    /// A binary operation.
    Binary {
        /// The operator to apply.
        op:    BinaryOperator,
        /// Left operand.
        left:  Arc<Self>,
        /// Right operand.
        right: Arc<Self>,
    },
    /// A parenthesised expression; simplifies to its child.
    Grouping(Arc<Self>),
    /// `condition ? when_true : when_false`.
    Conditional {
        /// The condition, read through boolean coercion.
        condition:  Arc<Self>,
        /// Selected when the condition is true.
        when_true:  Arc<Self>,
        /// Selected when the condition is false.
        when_false: Arc<Self>,
    },
    /// `subject[index]`; simplifies to the identifier `subject[index]`.
    Indexer {
        /// The indexed name.
        subject: Arc<Self>,
        /// The index, evaluated and rendered as text.
        index:   Arc<Self>,
    },
    /// `left.right`; simplifies to the identifier `left.right`.
    Period {
        /// The qualifying name.
        left:  Arc<Self>,
        /// The qualified member.
        right: Arc<Self>,
    },
    /// `function(arguments...)`; simplifies to whatever the callee returns.
    FunctionCall {
        /// Expression that must evaluate to a function value.
        function:  Arc<Self>,
        /// Unevaluated argument expressions handed to the callee.
        arguments: Vec<Arc<Self>>,
    },
}

impl Expression {
    /// Builds a constant node.
    #[must_use]
    pub fn value(value: impl Into<Value>) -> Arc<Self> {
        Arc::new(Self::Value(Some(value.into())))
    }

    /// Builds a node that evaluates to no value.
    #[must_use]
    pub fn undetermined() -> Arc<Self> {
        Arc::new(Self::Value(None))
    }

    /// Builds an identifier node.
    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::Identifier(name.into()))
    }

    /// Builds a unary operator node.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Arc<Self>) -> Arc<Self> {
        Arc::new(Self::Unary { op, operand })
    }

    /// Builds a binary operator node.
    ///
    /// ## Example
    /// ```
    /// use asmexpr::{
    ///     ast::{BinaryOperator, Expression},
    ///     interpreter::{evaluator::core::EvaluationContext, value::core::Value},
    /// };
    ///
    /// let sum = Expression::binary(BinaryOperator::Add,
    ///                              Expression::value(40u64),
    ///                              Expression::value(2u64));
    ///
    /// let context = EvaluationContext::dummy();
    /// assert_eq!(context.evaluate(&sum), Some(Value::UnsignedInt(42)));
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Arc<Self>, right: Arc<Self>) -> Arc<Self> {
        Arc::new(Self::Binary { op, left, right })
    }

    /// Builds a grouping node.
    #[must_use]
    pub fn grouping(child: Arc<Self>) -> Arc<Self> {
        Arc::new(Self::Grouping(child))
    }

    /// Builds a conditional node.
    #[must_use]
    pub fn conditional(condition: Arc<Self>, when_true: Arc<Self>, when_false: Arc<Self>) -> Arc<Self> {
        Arc::new(Self::Conditional { condition,
                                     when_true,
                                     when_false })
    }

    /// Builds an indexer node.
    #[must_use]
    pub fn indexer(subject: Arc<Self>, index: Arc<Self>) -> Arc<Self> {
        Arc::new(Self::Indexer { subject, index })
    }

    /// Builds a period node.
    #[must_use]
    pub fn period(left: Arc<Self>, right: Arc<Self>) -> Arc<Self> {
        Arc::new(Self::Period { left, right })
    }

    /// Builds a function call node.
    #[must_use]
    pub fn call(function: Arc<Self>, arguments: Vec<Arc<Self>>) -> Arc<Self> {
        Arc::new(Self::FunctionCall { function, arguments })
    }

    /// Returns `true` if the node must be simplified before it can produce a
    /// value.
    #[must_use]
    pub const fn is_expression_oriented(&self) -> bool {
        matches!(self,
                 Self::Grouping(_)
                 | Self::Conditional { .. }
                 | Self::Indexer { .. }
                 | Self::Period { .. }
                 | Self::FunctionCall { .. })
    }
}

/// Represents a top-level statement of the reference front-end.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Arc<Expression>,
        /// Line number in the source code.
        line: usize,
    },
    /// A symbol definition using `let`.
    Let {
        /// The name of the symbol.
        name:  String,
        /// The value bound to the symbol.
        value: Arc<Expression>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `assert <expr>`; fails unless the expression is true.
    Assert {
        /// The asserted condition.
        condition: Arc<Expression>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `org <expr>`; moves the program counter.
    Origin {
        /// The new program counter.
        value: Arc<Expression>,
        /// Line number in the source code.
        line:  usize,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulus (`%`)
    Mod,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Shift left (`<<`)
    ShiftLeft,
    /// Shift right (`>>`)
    ShiftRight,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Same kind and same value (`===`)
    StrictEqual,
    /// Different kind or different value (`!==`)
    StrictNotEqual,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Bitwise or (`|`)
    BitOr,
    /// Short-circuit logical and (`&&`)
    And,
    /// Short-circuit logical or (`||`)
    Or,
}

/// The groups of binary operators that share one coercion rule set.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OperatorFamily {
    /// `+`, the only numeric operator that concatenates strings.
    Additive,
    /// `*`, `/`, `%`, `-`.
    Arithmetic,
    /// `<<`, `>>`.
    Shift,
    /// `<`, `<=`, `>`, `>=`, `==`, `!=`.
    Comparison,
    /// `===`, `!==`.
    StrictEquality,
    /// `&`, `^`, `|`.
    Bitwise,
    /// `&&`, `||`.
    Logical,
}

impl BinaryOperator {
    /// Returns the family whose coercion rules apply to this operator.
    #[must_use]
    pub const fn family(self) -> OperatorFamily {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, Less, LessEqual,
            Mod, Mul, NotEqual, Or, ShiftLeft, ShiftRight, StrictEqual, StrictNotEqual, Sub,
        };

        match self {
            Add => OperatorFamily::Additive,
            Mul | Div | Mod | Sub => OperatorFamily::Arithmetic,
            ShiftLeft | ShiftRight => OperatorFamily::Shift,
            Less | LessEqual | Greater | GreaterEqual | Equal | NotEqual => {
                OperatorFamily::Comparison
            },
            StrictEqual | StrictNotEqual => OperatorFamily::StrictEquality,
            BitAnd | BitXor | BitOr => OperatorFamily::Bitwise,
            And | Or => OperatorFamily::Logical,
        }
    }

    /// Returns the operator as written in source; used in diagnostics.
    ///
    /// ## Example
    /// ```
    /// use asmexpr::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::ShiftLeft.name(), "<<");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, Less, LessEqual,
            Mod, Mul, NotEqual, Or, ShiftLeft, ShiftRight, StrictEqual, StrictNotEqual, Sub,
        };

        match self {
            Mul => "*",
            Div => "/",
            Mod => "%",
            Add => "+",
            Sub => "-",
            ShiftLeft => "<<",
            ShiftRight => ">>",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            StrictEqual => "===",
            StrictNotEqual => "!==",
            BitAnd => "&",
            BitXor => "^",
            BitOr => "|",
            And => "&&",
            Or => "||",
        }
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Unary plus (`+x`); forces a signed reading of unsigned values.
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
    /// Bitwise complement (`~x`).
    BitNot,
    /// Logical NOT (`!x`).
    Not,
}

impl UnaryOperator {
    /// Returns the operator as written in source; used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::BitNot => "~",
            Self::Not => "!",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
