use std::{collections::HashMap, sync::Arc};

use crate::{
    ast::{Expression, Statement},
    error::RuntimeError,
    interpreter::{
        builtins,
        evaluator::{
            core::EvaluationContext,
            ordering::{AssemblyToken, FunctionOrdering},
            sink::DiagnosticBag,
            symbols::Symbol,
        },
        value::core::Value,
    },
};

/// One assembly run: a symbol table, a program counter and a scope for
/// ordering function values.
///
/// Statements run one at a time. Any diagnostic a statement raises aborts the
/// statement with [`RuntimeError::Diagnostic`]; the session itself stays
/// usable.
///
/// Dropping the session releases its function arena in the shared registry.
///
/// # Example
/// ```
/// use asmexpr::interpreter::{
///     lexer::tokenize, parser::statement::parse_program, session::Session, value::core::Value,
/// };
///
/// let tokens = tokenize("org 0x100\nlet here = $ + 2\nhere * 2").unwrap();
/// let mut session = Session::new();
///
/// let mut last = None;
/// for statement in parse_program(&tokens).unwrap() {
///     last = session.eval_statement(&statement).unwrap();
/// }
///
/// assert_eq!(last, Some(Value::UnsignedInt(0x204)));
/// ```
pub struct Session {
    symbols:         HashMap<String, Symbol>,
    program_counter: u64,
    diagnostics:     DiagnosticBag,
    functions:       Arc<FunctionOrdering>,
    assembly:        AssemblyToken,
}

impl Session {
    /// Creates a session with its own function registry.
    #[allow(clippy::new_without_default)]
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(Arc::new(FunctionOrdering::new()))
    }

    /// Creates a session that orders function values through a registry
    /// shared with other sessions. The session gets a fresh assembly token,
    /// so its ordering never mixes with theirs.
    #[must_use]
    pub fn with_registry(functions: Arc<FunctionOrdering>) -> Self {
        let symbols = builtins::predefined().into_iter()
                                            .map(|f| (f.name().to_string(), Symbol::Value(Value::Function(f))))
                                            .collect();

        Self { symbols,
               program_counter: 0,
               diagnostics: DiagnosticBag::default(),
               functions,
               assembly: AssemblyToken::new() }
    }

    /// The current program counter.
    #[must_use]
    pub const fn program_counter(&self) -> u64 {
        self.program_counter
    }

    /// Moves the program counter.
    pub const fn set_program_counter(&mut self, program_counter: u64) {
        self.program_counter = program_counter;
    }

    /// The assembly token function values of this session are ordered under.
    #[must_use]
    pub const fn assembly(&self) -> AssemblyToken {
        self.assembly
    }

    /// Looks a symbol up by name.
    #[must_use]
    pub fn symbol(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Binds `name` to `value`, or marks it as defined without a value when
    /// `value` is `None`.
    ///
    /// # Errors
    /// `SymbolRedefinition` if the name is already bound.
    pub fn define(&mut self, name: &str, value: Option<Value>, line: usize) -> Result<(), RuntimeError> {
        if self.symbols.contains_key(name) {
            return Err(RuntimeError::SymbolRedefinition { name: name.to_string(),
                                                          line });
        }

        tracing::trace!(name, ?value, "defining symbol");
        self.symbols.insert(name.to_string(), value.map_or(Symbol::Scope, Symbol::Value));
        Ok(())
    }

    /// Evaluates one expression against the session.
    ///
    /// # Errors
    /// `RuntimeError::Diagnostic` carrying the first diagnostic if evaluation
    /// raised any.
    pub fn evaluate(&self, expression: &Expression, line: usize) -> Result<Option<Value>, RuntimeError> {
        let context = EvaluationContext::new(&self.diagnostics).with_program_counter(self.program_counter)
                                                                .with_symbols(&self.symbols)
                                                                .with_assembly(self.assembly, &self.functions);

        let value = context.evaluate(expression);

        match self.diagnostics.take().into_iter().next() {
            Some(diagnostic) => Err(RuntimeError::Diagnostic { diagnostic, line }),
            None => Ok(value),
        }
    }

    /// Runs one statement.
    ///
    /// - An expression statement returns its value.
    /// - `let` binds a new symbol; an undetermined value still defines it.
    /// - `assert` fails unless its condition is true.
    /// - `org` moves the program counter to a non-negative integer.
    ///
    /// # Returns
    /// The value of an expression statement, `None` for everything else.
    ///
    /// # Errors
    /// `Diagnostic`, `SymbolRedefinition`, `AssertionFailed` or
    /// `InvalidOrigin`, each carrying the statement's line.
    pub fn eval_statement(&mut self, statement: &Statement) -> Result<Option<Value>, RuntimeError> {
        match statement {
            Statement::Expression { expr, line } => self.evaluate(expr, *line),
            Statement::Let { name, value, line } => {
                let value = self.evaluate(value, *line)?;
                self.define(name, value, *line)?;
                Ok(None)
            },
            Statement::Assert { condition, line } => match self.evaluate(condition, *line)? {
                Some(value) if value.is_truthy() => Ok(None),
                _ => Err(RuntimeError::AssertionFailed { line: *line }),
            },
            Statement::Origin { value, line } => {
                self.program_counter = match self.evaluate(value, *line)? {
                    Some(Value::UnsignedInt(origin)) => origin,
                    Some(Value::SignedInt(origin)) => {
                        u64::try_from(origin).map_err(|_| RuntimeError::InvalidOrigin { line: *line })?
                    },
                    _ => return Err(RuntimeError::InvalidOrigin { line: *line }),
                };
                tracing::trace!(origin = self.program_counter, "program counter moved");
                Ok(None)
            },
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.functions.release(self.assembly);
    }
}
