//! Circuit operations combining gates with operands.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::qubit::GridQubit;

/// The kind of operation in a circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationKind {
    /// A quantum gate operation.
    Gate(StandardGate),
    /// Reset qubit to |0⟩.
    Reset,
    /// Joint computational-basis measurement, results stored under `key`.
    Measure {
        /// Name the measurement results are recorded under.
        key: String,
    },
}

/// A complete operation with operands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// The kind of operation.
    pub kind: OperationKind,
    /// Qubits this operation acts on, in operand order.
    pub qubits: Vec<GridQubit>,
}

impl Operation {
    /// Create a gate operation.
    pub fn gate(gate: StandardGate, qubits: impl IntoIterator<Item = GridQubit>) -> Self {
        Self {
            kind: OperationKind::Gate(gate),
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create a single-qubit gate operation.
    pub fn single_qubit_gate(gate: StandardGate, qubit: GridQubit) -> Self {
        Self::gate(gate, [qubit])
    }

    /// Create a two-qubit gate operation.
    pub fn two_qubit_gate(gate: StandardGate, q1: GridQubit, q2: GridQubit) -> Self {
        Self::gate(gate, [q1, q2])
    }

    /// Create a reset operation.
    pub fn reset(qubit: GridQubit) -> Self {
        Self {
            kind: OperationKind::Reset,
            qubits: vec![qubit],
        }
    }

    /// Create a joint measurement over `qubits` keyed by `key`.
    pub fn measure(qubits: impl IntoIterator<Item = GridQubit>, key: impl Into<String>) -> Self {
        Self {
            kind: OperationKind::Measure { key: key.into() },
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Check the operation is well formed on its own.
    ///
    /// Gate arity must match the operand count, no qubit may appear twice and
    /// measurement keys must be non-empty.
    pub fn validate(&self) -> IrResult<()> {
        match &self.kind {
            OperationKind::Gate(gate) => {
                let expected = gate.num_qubits();
                let got = self.qubits.len();
                if expected as usize != got {
                    return Err(IrError::QubitCountMismatch {
                        gate_name: gate.name().to_string(),
                        expected,
                        got: u32::try_from(got).unwrap_or(u32::MAX),
                    });
                }
            }
            OperationKind::Measure { key } if key.is_empty() => {
                return Err(IrError::EmptyMeasurementKey);
            }
            _ => {}
        }

        let mut seen = FxHashSet::default();
        for &qubit in &self.qubits {
            if !seen.insert(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    op_name: self.name().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Check if this is a gate operation.
    pub fn is_gate(&self) -> bool {
        matches!(self.kind, OperationKind::Gate(_))
    }

    /// Check if this is a measurement.
    pub fn is_measure(&self) -> bool {
        matches!(self.kind, OperationKind::Measure { .. })
    }

    /// Check if this is a reset.
    pub fn is_reset(&self) -> bool {
        matches!(self.kind, OperationKind::Reset)
    }

    /// Get the gate if this is a gate operation.
    pub fn as_gate(&self) -> Option<StandardGate> {
        match self.kind {
            OperationKind::Gate(g) => Some(g),
            _ => None,
        }
    }

    /// Get the measurement key if this is a measurement.
    pub fn key(&self) -> Option<&str> {
        match &self.kind {
            OperationKind::Measure { key } => Some(key),
            _ => None,
        }
    }

    /// Check whether this operation touches `qubit`.
    pub fn acts_on(&self, qubit: &GridQubit) -> bool {
        self.qubits.contains(qubit)
    }

    /// Get the name of the operation.
    pub fn name(&self) -> &str {
        match &self.kind {
            OperationKind::Gate(g) => g.name(),
            OperationKind::Reset => "reset",
            OperationKind::Measure { .. } => "measure",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_operation() {
        let op = Operation::single_qubit_gate(StandardGate::H, GridQubit::grid(0, 0));
        assert!(op.is_gate());
        assert_eq!(op.qubits.len(), 1);
        assert_eq!(op.name(), "h");
        assert_eq!(op.as_gate(), Some(StandardGate::H));
        assert!(op.validate().is_ok());
    }

    #[test]
    fn test_measure_operation() {
        let op = Operation::measure([GridQubit::grid(0, 0), GridQubit::grid(0, 1)], "syndrome");
        assert!(op.is_measure());
        assert_eq!(op.key(), Some("syndrome"));
        assert_eq!(op.qubits.len(), 2);
        assert!(op.validate().is_ok());
    }

    #[test]
    fn test_reset_operation() {
        let op = Operation::reset(GridQubit::grid(1, 1));
        assert!(op.is_reset());
        assert_eq!(op.name(), "reset");
        assert!(op.acts_on(&GridQubit::grid(1, 1)));
        assert!(!op.acts_on(&GridQubit::grid(0, 0)));
    }

    #[test]
    fn test_arity_mismatch() {
        let op = Operation::gate(StandardGate::CX, [GridQubit::grid(0, 0)]);
        match op.validate() {
            Err(IrError::QubitCountMismatch {
                gate_name,
                expected,
                got,
            }) => {
                assert_eq!(gate_name, "cx");
                assert_eq!(expected, 2);
                assert_eq!(got, 1);
            }
            other => panic!("Expected QubitCountMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_qubit() {
        let q = GridQubit::grid(0, 0);
        let op = Operation::two_qubit_gate(StandardGate::CX, q, q);
        assert!(matches!(
            op.validate(),
            Err(IrError::DuplicateQubit { qubit, .. }) if qubit == q
        ));
    }

    #[test]
    fn test_empty_key_rejected() {
        let op = Operation::measure([GridQubit::grid(0, 0)], "");
        assert!(matches!(op.validate(), Err(IrError::EmptyMeasurementKey)));
    }
}
