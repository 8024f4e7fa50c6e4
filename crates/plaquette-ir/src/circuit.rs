//! High-level circuit builder API.

use std::collections::BTreeSet;
use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::diagram;
use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::interaction::InteractionGraph;
use crate::moment::Moment;
use crate::operation::Operation;
use crate::qubit::GridQubit;

/// A quantum circuit.
///
/// Operations are kept in the order they were appended. Each one is also
/// placed in a moment using the *earliest* strategy: the first moment after
/// the last moment that touches any of its qubits, so independent operations
/// share a time slice while the order on every wire is preserved.
///
/// ## Performance
///
/// A `wire_front` index maps each qubit to the first moment still free on
/// its wire, so placement is O(qubits per operation) rather than a scan over
/// all moments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CircuitRepr", into = "CircuitRepr")]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Operations in append order.
    operations: Vec<Operation>,
    /// Moment index of each operation.
    placement: Vec<usize>,
    /// First free moment per qubit wire.
    wire_front: FxHashMap<GridQubit, usize>,
    /// Number of moments.
    depth: usize,
}

/// Serialized form: the name and the operations in append order.
#[derive(Serialize, Deserialize)]
struct CircuitRepr {
    name: String,
    operations: Vec<Operation>,
}

impl From<Circuit> for CircuitRepr {
    fn from(circuit: Circuit) -> Self {
        Self {
            name: circuit.name,
            operations: circuit.operations,
        }
    }
}

impl TryFrom<CircuitRepr> for Circuit {
    type Error = IrError;

    fn try_from(repr: CircuitRepr) -> Result<Self, Self::Error> {
        let mut circuit = Circuit::new(repr.name);
        circuit.extend(repr.operations)?;
        Ok(circuit)
    }
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operations: vec![],
            placement: vec![],
            wire_front: FxHashMap::default(),
            depth: 0,
        }
    }

    /// Append a single operation.
    ///
    /// On error the circuit is left unchanged.
    pub fn append(&mut self, op: Operation) -> IrResult<&mut Self> {
        op.validate()?;

        if let Some(key) = op.key() {
            if self.operations.iter().any(|existing| existing.key() == Some(key)) {
                return Err(IrError::DuplicateMeasurementKey(key.to_string()));
            }
        }

        let slot = if op.qubits.is_empty() {
            self.depth
        } else {
            op.qubits
                .iter()
                .map(|q| self.wire_front.get(q).copied().unwrap_or(0))
                .max()
                .unwrap_or(0)
        };

        for &qubit in &op.qubits {
            self.wire_front.insert(qubit, slot + 1);
        }
        self.depth = self.depth.max(slot + 1);
        self.placement.push(slot);
        self.operations.push(op);
        Ok(self)
    }

    /// Append every operation from an iterator, stopping at the first error.
    pub fn extend(&mut self, ops: impl IntoIterator<Item = Operation>) -> IrResult<&mut Self> {
        for op in ops {
            self.append(op)?;
        }
        Ok(self)
    }

    // =========================================================================
    // Gates and non-unitary operations
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: GridQubit) -> IrResult<&mut Self> {
        self.append(Operation::single_qubit_gate(StandardGate::H, qubit))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: GridQubit) -> IrResult<&mut Self> {
        self.append(Operation::single_qubit_gate(StandardGate::X, qubit))
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: GridQubit) -> IrResult<&mut Self> {
        self.append(Operation::single_qubit_gate(StandardGate::Z, qubit))
    }

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: GridQubit, target: GridQubit) -> IrResult<&mut Self> {
        self.append(Operation::two_qubit_gate(StandardGate::CX, control, target))
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, q1: GridQubit, q2: GridQubit) -> IrResult<&mut Self> {
        self.append(Operation::two_qubit_gate(StandardGate::CZ, q1, q2))
    }

    /// Reset a qubit to |0⟩.
    pub fn reset(&mut self, qubit: GridQubit) -> IrResult<&mut Self> {
        self.append(Operation::reset(qubit))
    }

    /// Jointly measure `qubits` under `key`.
    pub fn measure(
        &mut self,
        qubits: impl IntoIterator<Item = GridQubit>,
        key: impl Into<String>,
    ) -> IrResult<&mut Self> {
        self.append(Operation::measure(qubits, key))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Group the operations into moments.
    pub fn moments(&self) -> Vec<Moment<'_>> {
        let mut moments = vec![Moment::default(); self.depth];
        for (op, &slot) in self.operations.iter().zip(&self.placement) {
            moments[slot].push(op);
        }
        moments
    }

    /// Moment index each operation was placed in, in append order.
    pub fn placement(&self) -> &[usize] {
        &self.placement
    }

    /// Iterate over operations in append order.
    pub fn operations(&self) -> impl Iterator<Item = &Operation> + '_ {
        self.operations.iter()
    }

    /// Total number of operations.
    pub fn num_operations(&self) -> usize {
        self.operations.len()
    }

    /// Get the circuit depth (number of moments).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Check if the circuit has no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Every qubit touched by the circuit, in row-major order.
    pub fn all_qubits(&self) -> Vec<GridQubit> {
        self.operations()
            .flat_map(|op| op.qubits.iter().copied())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of distinct qubits touched by the circuit.
    pub fn num_qubits(&self) -> usize {
        self.all_qubits().len()
    }

    /// Measurement keys in the order they appear.
    pub fn measurement_keys(&self) -> Vec<&str> {
        self.operations().filter_map(Operation::key).collect()
    }

    /// Count operations with the given name (e.g. `"h"`, `"cx"`, `"reset"`).
    pub fn count_ops(&self, name: &str) -> usize {
        self.operations().filter(|op| op.name() == name).count()
    }

    /// Build the two-qubit interaction graph of this circuit.
    pub fn interaction_graph(&self) -> InteractionGraph {
        InteractionGraph::from_circuit(self)
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    /// Serialize the circuit to pretty-printed JSON.
    pub fn to_json(&self) -> IrResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a circuit from JSON.
    ///
    /// Operations are re-appended one by one, so the result satisfies every
    /// invariant a built circuit does.
    pub fn from_json(json: &str) -> IrResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&diagram::render(self))
    }
}
