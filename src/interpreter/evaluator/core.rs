use std::{cell::RefCell, cmp::Ordering, sync::Arc};

use crate::{
    ast::Expression,
    error::Diagnostic,
    interpreter::{
        evaluator::{
            ordering::{AssemblyToken, FunctionArena, FunctionOrdering},
            sink::{DiagnosticSink, NullSink},
            symbols::{Symbol, SymbolLookup},
        },
        value::{core::Value, float_parser::parse_float, function::FunctionRef},
    },
};

/// Result type used by the coercion engine.
///
/// Operator implementations return either a value or the one diagnostic that
/// explains why there is none. The context turns an `Err` into an emitted
/// diagnostic and an undetermined result.
pub type EvalResult<T> = Result<T, Diagnostic>;

/// The ambient inputs of one evaluation.
///
/// A context bundles the program counter, the diagnostic sink, an optional
/// symbol table and an optional assembly scope for ordering function values.
/// Contexts are cheap and short-lived: build one per evaluation (or per
/// statement) and drop it afterwards. Expression trees carry no state, so
/// several threads may evaluate the same tree at once, each with its own
/// context.
///
/// ## Usage
///
/// ```
/// use std::collections::HashMap;
///
/// use asmexpr::{
///     ast::{BinaryOperator, Expression},
///     interpreter::{
///         evaluator::{
///             core::EvaluationContext,
///             sink::DiagnosticBag,
///             symbols::Symbol,
///         },
///         value::core::Value,
///     },
/// };
///
/// let mut symbols = HashMap::new();
/// symbols.insert("width".to_string(), Symbol::Value(Value::UnsignedInt(40)));
///
/// let diagnostics = DiagnosticBag::default();
/// let context = EvaluationContext::new(&diagnostics).with_program_counter(0x8000)
///                                                    .with_symbols(&symbols);
///
/// let expr = Expression::binary(BinaryOperator::Add,
///                               Expression::identifier("width"),
///                               Expression::value(2u64));
///
/// assert_eq!(context.evaluate(&expr), Some(Value::UnsignedInt(42)));
/// assert!(diagnostics.is_empty());
/// ```
pub struct EvaluationContext<'a> {
    program_counter: u64,
    diagnostics:     &'a dyn DiagnosticSink,
    symbols:         Option<&'a dyn SymbolLookup>,
    assembly:        Option<(AssemblyToken, &'a FunctionOrdering)>,
    /// Orders functions when no assembly scope was supplied.
    local_functions: RefCell<FunctionArena>,
}

impl<'a> EvaluationContext<'a> {
    /// Creates a context that reports diagnostics to `diagnostics`, with the
    /// program counter at zero, no symbols and no assembly scope.
    #[must_use]
    pub fn new(diagnostics: &'a dyn DiagnosticSink) -> Self {
        Self { program_counter: 0,
               diagnostics,
               symbols: None,
               assembly: None,
               local_functions: RefCell::default() }
    }

    /// Sets the program counter.
    #[must_use]
    pub fn with_program_counter(mut self, program_counter: u64) -> Self {
        self.program_counter = program_counter;
        self
    }

    /// Sets the symbol table identifiers are resolved against.
    #[must_use]
    pub fn with_symbols(mut self, symbols: &'a dyn SymbolLookup) -> Self {
        self.symbols = Some(symbols);
        self
    }

    /// Orders function values through `registry`, scoped to `assembly`.
    #[must_use]
    pub fn with_assembly(mut self, assembly: AssemblyToken, registry: &'a FunctionOrdering) -> Self {
        self.assembly = Some((assembly, registry));
        self
    }

    /// The current program counter.
    #[must_use]
    pub const fn program_counter(&self) -> u64 {
        self.program_counter
    }

    /// The assembly this context is scoped to, if any.
    #[must_use]
    pub fn assembly(&self) -> Option<AssemblyToken> {
        self.assembly.map(|(token, _)| token)
    }
}

impl EvaluationContext<'static> {
    /// Creates a context with every input at its default: diagnostics are
    /// discarded, the program counter is zero and no symbol resolves.
    #[must_use]
    pub fn dummy() -> Self {
        Self::new(&NullSink)
    }
}

impl EvaluationContext<'_> {
    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// Value-oriented nodes are evaluated directly; expression-oriented nodes
    /// are simplified once and the result is evaluated in their place.
    ///
    /// # Parameters
    /// - `expression`: Expression to evaluate.
    ///
    /// # Returns
    /// `Some(Value)`, or `None` if the value is undetermined. Any problem met
    /// on the way has already been reported through the diagnostic sink.
    pub fn evaluate(&self, expression: &Expression) -> Option<Value> {
        match expression {
            Expression::Value(value) => value.clone(),
            Expression::ProgramCounter => Some(Value::UnsignedInt(self.program_counter)),
            Expression::Identifier(name) => self.eval_identifier(name),
            Expression::Unary { op, operand } => {
                let operand = self.evaluate(operand);
                self.eval_unary(*op, operand)
            },
            Expression::Binary { op, left, right } => self.eval_binary_expression(*op, left, right),
            Expression::Grouping(_)
            | Expression::Conditional { .. }
            | Expression::Indexer { .. }
            | Expression::Period { .. }
            | Expression::FunctionCall { .. } => {
                let simplified = self.simplify(expression);
                self.evaluate(&simplified)
            },
        }
    }

    /// Rewrites an expression into a different, fully formed expression.
    ///
    /// - A grouping becomes its child.
    /// - A conditional becomes the branch its condition selects, or an
    ///   undetermined value when the condition is undetermined.
    /// - An indexer `s[i]` becomes the identifier `s[i]`, and a period `a.b`
    ///   becomes the identifier `a.b`; see [`Self::name_of`].
    /// - A function call becomes whatever the called function returns.
    /// - Value-oriented nodes fold into a constant node holding their value.
    ///
    /// The result is never the node passed in, so repeated simplification
    /// always makes progress.
    ///
    /// # Example
    /// ```
    /// use asmexpr::{ast::Expression, interpreter::evaluator::core::EvaluationContext};
    ///
    /// let context = EvaluationContext::dummy();
    /// let conditional = Expression::conditional(Expression::undetermined(),
    ///                                           Expression::value(1u64),
    ///                                           Expression::value(2u64));
    ///
    /// assert_eq!(*context.simplify(&conditional), *Expression::undetermined());
    /// ```
    pub fn simplify(&self, expression: &Expression) -> Arc<Expression> {
        match expression {
            Expression::Grouping(child) => Arc::clone(child),
            Expression::Conditional { condition,
                                      when_true,
                                      when_false, } => match self.evaluate(condition) {
                Some(value) if value.is_truthy() => Arc::clone(when_true),
                Some(_) => Arc::clone(when_false),
                None => Expression::undetermined(),
            },
            Expression::Indexer { subject, index } => {
                let name = self.name_of(subject).zip(self.evaluate(index))
                               .map(|(subject, index)| format!("{subject}[{index}]"));
                Self::synthesized_identifier(name)
            },
            Expression::Period { left, right } => {
                let name = self.name_of(left).zip(self.name_of(right))
                               .map(|(left, right)| format!("{left}.{right}"));
                Self::synthesized_identifier(name)
            },
            Expression::FunctionCall { function, arguments } => {
                self.simplify_call(function, arguments)
            },
            Expression::Value(_)
            | Expression::ProgramCounter
            | Expression::Identifier(_)
            | Expression::Unary { .. }
            | Expression::Binary { .. } => Arc::new(Expression::Value(self.evaluate(expression))),
        }
    }

    /// Returns the textual name an expression contributes to an indexer or
    /// period.
    ///
    /// Identifiers contribute their own name without being looked up, groupings
    /// the name of their child, and nested indexers and periods the name they
    /// simplify to. Any other expression is evaluated and contributes the
    /// canonical text of its value.
    ///
    /// # Returns
    /// The name, or `None` if part of it is undetermined.
    pub fn name_of(&self, expression: &Expression) -> Option<String> {
        match expression {
            Expression::Identifier(name) => Some(name.clone()),
            Expression::Grouping(child) => self.name_of(child),
            Expression::Indexer { .. } | Expression::Period { .. } => {
                match &*self.simplify(expression) {
                    Expression::Identifier(name) => Some(name.clone()),
                    _ => None,
                }
            },
            _ => self.evaluate(expression).map(|value| value.to_string()),
        }
    }

    /// Looks a symbol up through the context's symbol table.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        self.symbols.and_then(|symbols| symbols.lookup(name))
    }

    /// Reports a diagnostic through the context's sink.
    pub fn emit(&self, diagnostic: Diagnostic) {
        tracing::debug!(%diagnostic, "diagnostic raised");
        self.diagnostics.emit(diagnostic);
    }

    /// Turns an operator result into a possibly undetermined value, emitting
    /// the diagnostic of a failed result.
    pub fn report(&self, result: EvalResult<Value>) -> Option<Value> {
        result.map_err(|diagnostic| self.emit(diagnostic)).ok()
    }

    /// Reads a string operand as a float.
    ///
    /// # Errors
    /// `CannotConvertStringToFloat` carrying the original text if it does not
    /// match the numeric grammar.
    pub fn string_to_float(text: &str) -> EvalResult<f64> {
        parse_float(text).ok_or_else(|| Diagnostic::CannotConvertStringToFloat(text.to_string()))
    }

    /// Orders two function values, deterministically for a given sequence of
    /// comparisons.
    ///
    /// Scoped contexts go through the shared registry of their assembly;
    /// unscoped contexts through an arena private to the context.
    pub fn compare_functions(&self, a: &FunctionRef, b: &FunctionRef) -> Ordering {
        match self.assembly {
            Some((token, registry)) => registry.compare(token, a, b),
            None => self.local_functions.borrow_mut().compare(a, b),
        }
    }

    fn eval_identifier(&self, name: &str) -> Option<Value> {
        match self.lookup(name) {
            Some(Symbol::Value(value)) => Some(value),
            Some(Symbol::Scope) => {
                tracing::trace!(name, "symbol has no value");
                None
            },
            None => {
                tracing::trace!(name, "symbol not found");
                None
            },
        }
    }

    fn synthesized_identifier(name: Option<String>) -> Arc<Expression> {
        name.map_or_else(Expression::undetermined, |name| {
                tracing::trace!(%name, "synthesized identifier");
                Expression::identifier(name)
            })
    }

    fn simplify_call(&self, function: &Expression, arguments: &[Arc<Expression>]) -> Arc<Expression> {
        match self.evaluate(function) {
            Some(Value::Function(callee)) => {
                tracing::trace!(function = callee.name(), arguments = arguments.len(), "calling function");
                callee.call(arguments, self)
            },
            Some(other) => {
                self.emit(Diagnostic::NotAFunction(other));
                Expression::undetermined()
            },
            None => Expression::undetermined(),
        }
    }
}
