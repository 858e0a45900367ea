use std::{
    cmp::Ordering,
    sync::{
        Arc, Mutex, PoisonError,
        atomic::{self, AtomicU64},
    },
};

use dashmap::DashMap;

use crate::interpreter::value::function::FunctionRef;

/// Opaque identity of one assembly run.
///
/// Tokens are only ever compared and hashed; each call to
/// [`AssemblyToken::new`] yields a token distinct from every other token of
/// the process.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AssemblyToken(u64);

impl AssemblyToken {
    /// Creates a fresh token.
    #[allow(clippy::new_without_default)]
    #[must_use]
    pub fn new() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);

        Self(NEXT.fetch_add(1, atomic::Ordering::Relaxed))
    }
}

/// Insertion-ordered arena of function handles for one assembly.
///
/// A handle's position in the arena is its rank. Handles stay alive until the
/// arena itself is dropped.
#[derive(Default)]
pub struct FunctionArena {
    entries: Vec<FunctionRef>,
}

impl FunctionArena {
    /// Orders two functions.
    ///
    /// The same handle is equal to itself. Otherwise whichever of the two
    /// appears first in the arena is the lesser. If neither has been seen yet,
    /// `a` is registered and is the lesser; `b` stays unregistered and thereby
    /// ranks after everything registered so far.
    ///
    /// # Example
    /// ```
    /// use std::{cmp::Ordering, sync::Arc};
    ///
    /// use asmexpr::{
    ///     ast::Expression,
    ///     interpreter::{
    ///         evaluator::{core::EvaluationContext, ordering::FunctionArena},
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
    /// let (f, g) = (FunctionRef::new(Nothing), FunctionRef::new(Nothing));
    /// let mut arena = FunctionArena::default();
    ///
    /// assert_eq!(arena.compare(&g, &f), Ordering::Less);
    /// assert_eq!(arena.compare(&f, &g), Ordering::Greater);
    /// assert_eq!(arena.compare(&f, &f), Ordering::Equal);
    /// ```
    pub fn compare(&mut self, a: &FunctionRef, b: &FunctionRef) -> Ordering {
        if a.ptr_eq(b) {
            return Ordering::Equal;
        }

        for entry in &self.entries {
            if entry.ptr_eq(a) {
                return Ordering::Less;
            }
            if entry.ptr_eq(b) {
                return Ordering::Greater;
            }
        }

        tracing::trace!(function = a.name(), rank = self.entries.len(), "registering function");
        self.entries.push(a.clone());
        Ordering::Less
    }

    /// Number of registered functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no function has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Registry of per-assembly function arenas, shared between evaluations.
///
/// The map from assembly to arena and each arena are guarded separately, so
/// evaluations against different assemblies only meet briefly on the map
/// while evaluations against the same assembly serialise on its arena.
#[derive(Default)]
pub struct FunctionOrdering {
    assemblies: DashMap<AssemblyToken, Arc<Mutex<FunctionArena>>>,
}

impl FunctionOrdering {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Orders two functions within the arena of `assembly`, creating the
    /// arena on first use. See [`FunctionArena::compare`].
    pub fn compare(&self, assembly: AssemblyToken, a: &FunctionRef, b: &FunctionRef) -> Ordering {
        let arena = self.arena(assembly);
        let mut arena = arena.lock().unwrap_or_else(PoisonError::into_inner);
        arena.compare(a, b)
    }

    /// Number of functions registered for `assembly`.
    #[must_use]
    pub fn registered(&self, assembly: AssemblyToken) -> usize {
        self.assemblies
            .get(&assembly)
            .map_or(0, |arena| arena.lock().unwrap_or_else(PoisonError::into_inner).len())
    }

    /// Drops the arena of `assembly`, releasing every handle it held.
    ///
    /// Returns `true` if the assembly had an arena.
    pub fn release(&self, assembly: AssemblyToken) -> bool {
        self.assemblies.remove(&assembly).is_some()
    }

    fn arena(&self, assembly: AssemblyToken) -> Arc<Mutex<FunctionArena>> {
        Arc::clone(self.assemblies.entry(assembly).or_default().value())
    }
}
