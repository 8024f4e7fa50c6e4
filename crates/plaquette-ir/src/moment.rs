//! Moments: time slices of a circuit.

use crate::operation::Operation;
use crate::qubit::GridQubit;

/// A view of the operations that share one time slice.
///
/// Operations in a moment act on pairwise-disjoint qubits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Moment<'a> {
    operations: Vec<&'a Operation>,
}

impl<'a> Moment<'a> {
    pub(crate) fn push(&mut self, op: &'a Operation) {
        debug_assert!(!self.operates_on_any(&op.qubits));
        self.operations.push(op);
    }

    /// Operations in this moment, in append order.
    pub fn operations(&self) -> &[&'a Operation] {
        &self.operations
    }

    /// Number of operations in this moment.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if the moment holds no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Check whether any operation in this moment touches `qubit`.
    pub fn operates_on(&self, qubit: &GridQubit) -> bool {
        self.operations.iter().any(|op| op.acts_on(qubit))
    }

    /// Check whether any operation in this moment touches any of `qubits`.
    pub fn operates_on_any(&self, qubits: &[GridQubit]) -> bool {
        qubits.iter().any(|q| self.operates_on(q))
    }

    /// The operation touching `qubit`, if any.
    pub fn operation_at(&self, qubit: &GridQubit) -> Option<&'a Operation> {
        self.operations.iter().copied().find(|op| op.acts_on(qubit))
    }
}
