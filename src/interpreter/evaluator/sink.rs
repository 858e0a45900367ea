use std::cell::RefCell;

use crate::error::Diagnostic;

/// Receives the diagnostics raised during evaluation.
pub trait DiagnosticSink {
    /// Records one diagnostic.
    fn emit(&self, diagnostic: Diagnostic);
}

/// A sink that discards everything; the default when no sink is supplied.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _diagnostic: Diagnostic) {}
}

/// A sink that keeps every diagnostic in emission order.
///
/// # Example
/// ```
/// use asmexpr::{
///     error::Diagnostic,
///     interpreter::evaluator::sink::{DiagnosticBag, DiagnosticSink},
/// };
///
/// let bag = DiagnosticBag::default();
/// bag.emit(Diagnostic::DivisionByZero);
///
/// assert_eq!(bag.len(), 1);
/// assert_eq!(bag.take(), vec![Diagnostic::DivisionByZero]);
/// assert!(bag.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct DiagnosticBag {
    entries: RefCell<Vec<Diagnostic>>,
}

impl DiagnosticBag {
    /// Removes and returns everything collected so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        self.entries.take()
    }

    /// Returns a copy of the first collected diagnostic.
    #[must_use]
    pub fn first(&self) -> Option<Diagnostic> {
        self.entries.borrow().first().cloned()
    }

    /// Number of collected diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` if nothing has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl DiagnosticSink for DiagnosticBag {
    fn emit(&self, diagnostic: Diagnostic) {
        self.entries.borrow_mut().push(diagnostic);
    }
}
