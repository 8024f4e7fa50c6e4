//! Logical-qubit preparation.
//!
//! The logical |0⟩ of the surface code is the state with every data qubit in
//! |0⟩: that state is already a +1 eigenstate of the X-type stabilizers, so
//! preparing it needs nothing beyond resetting the data qubits. The
//! entangling work happens later, in the stabilizer cycles.

use plaquette_ir::{Circuit, Operation};
use tracing::info;

use crate::error::SurfaceResult;
use crate::layout::PatchLayout;

/// Builds state-preparation circuits for a patch.
#[derive(Debug, Clone)]
pub struct PatchEncoder {
    layout: PatchLayout,
}

impl PatchEncoder {
    /// Create an encoder for `layout`.
    pub fn new(layout: PatchLayout) -> Self {
        info!(
            data_qubits = layout.data_qubits().len(),
            ancilla_qubits = layout.ancilla_qubits().len(),
            "encoder initialized"
        );
        Self { layout }
    }

    /// The layout this encoder prepares.
    pub fn layout(&self) -> &PatchLayout {
        &self.layout
    }

    /// Prepare the logical |0⟩ state.
    ///
    /// The circuit holds exactly one reset per data qubit, in layout order,
    /// and nothing else. A layout without data qubits yields an empty circuit.
    pub fn create_logical_zero_circuit(&self) -> SurfaceResult<Circuit> {
        let mut circuit = Circuit::new("logical_zero");
        circuit.extend(self.layout.data_qubits().iter().map(|&q| Operation::reset(q)))?;

        info!(
            resets = circuit.num_operations(),
            "created logical |0> preparation circuit"
        );
        Ok(circuit)
    }
}
