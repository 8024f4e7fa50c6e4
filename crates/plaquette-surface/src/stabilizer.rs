//! Stabilizer measurement cycles.
//!
//! One cycle checks both stabilizer types with the same ancillas, one after
//! the other:
//!
//! 1. `H` on every ancilla, moving it to the |+⟩ basis.
//! 2. `CX(ancilla → neighbor)` for every ancilla and neighbor: the X-type
//!    check, sensitive to phase flips.
//! 3. `H` on every ancilla again to return to the computational basis.
//! 4. `CX(neighbor → ancilla)` for every ancilla and neighbor: the Z-type
//!    check, accumulating bit-flip parity on the ancilla.
//! 5. One joint measurement of all ancillas under [`SYNDROME_KEY`].
//!
//! A large patch would give each stabilizer type its own ancilla sublattice
//! and measure them in parallel. Sharing the ancillas keeps the patch small
//! at the cost of sequential checks.

use plaquette_ir::{Circuit, GridQubit, Operation, StandardGate};
use serde::Serialize;
use tracing::{debug, info};

use crate::encoder::PatchEncoder;
use crate::error::{SurfaceError, SurfaceResult};
use crate::layout::PatchLayout;

/// Measurement key of a single stabilizer cycle.
pub const SYNDROME_KEY: &str = "syndrome";

/// An ancilla together with the qubits its parity check covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stabilizer {
    /// The measure qubit.
    pub ancilla: GridQubit,
    /// Resolved diagonal neighbors, in resolution order.
    pub support: Vec<GridQubit>,
}

impl Stabilizer {
    /// Number of qubits the check covers.
    pub fn weight(&self) -> usize {
        self.support.len()
    }
}

/// Builds stabilizer measurement circuits for a patch.
#[derive(Debug, Clone)]
pub struct StabilizerGenerator {
    layout: PatchLayout,
}

impl StabilizerGenerator {
    /// Create a generator for `layout`.
    pub fn new(layout: PatchLayout) -> Self {
        info!(
            data_qubits = layout.data_qubits().len(),
            "stabilizer generator initialized"
        );
        Self { layout }
    }

    /// The layout this generator measures.
    pub fn layout(&self) -> &PatchLayout {
        &self.layout
    }

    /// Resolve the support of every ancilla, in layout order.
    pub fn stabilizers(&self) -> SurfaceResult<Vec<Stabilizer>> {
        self.layout
            .ancilla_qubits()
            .iter()
            .map(|&ancilla| -> SurfaceResult<Stabilizer> {
                let support = self.layout.neighbors(&ancilla)?;
                debug!(%ancilla, weight = support.len(), "resolved stabilizer support");
                Ok(Stabilizer { ancilla, support })
            })
            .collect()
    }

    /// Build one full detection round.
    ///
    /// Returns [`SurfaceError::NoAncillas`] for a layout without ancillas.
    pub fn create_stabilizer_cycle(&self) -> SurfaceResult<Circuit> {
        let stabilizers = self.checked_stabilizers()?;

        let mut circuit = Circuit::new("stabilizer_cycle");
        self.append_cycle(&mut circuit, &stabilizers, SYNDROME_KEY)?;

        info!(
            operations = circuit.num_operations(),
            depth = circuit.depth(),
            "created stabilizer measurement cycle"
        );
        Ok(circuit)
    }

    /// Prepare logical |0⟩ and run `rounds` stabilizer cycles.
    ///
    /// Round `r` is measured under `syndrome_<r>`. Ancillas are reset before
    /// every round after the first, so each round starts from |0⟩.
    pub fn create_memory_circuit(&self, rounds: usize) -> SurfaceResult<Circuit> {
        if rounds == 0 {
            return Err(SurfaceError::InvalidRounds(rounds));
        }
        let stabilizers = self.checked_stabilizers()?;

        let prep = PatchEncoder::new(self.layout.clone()).create_logical_zero_circuit()?;
        let mut circuit = Circuit::new("memory");
        circuit.extend(prep.operations().cloned())?;

        for round in 0..rounds {
            if round > 0 {
                circuit.extend(
                    self.layout
                        .ancilla_qubits()
                        .iter()
                        .map(|&a| Operation::reset(a)),
                )?;
            }
            let key = format!("{SYNDROME_KEY}_{round}");
            self.append_cycle(&mut circuit, &stabilizers, &key)?;
        }

        info!(
            rounds,
            operations = circuit.num_operations(),
            depth = circuit.depth(),
            "created memory experiment circuit"
        );
        Ok(circuit)
    }

    fn checked_stabilizers(&self) -> SurfaceResult<Vec<Stabilizer>> {
        if self.layout.ancilla_qubits().is_empty() {
            return Err(SurfaceError::NoAncillas);
        }
        self.stabilizers()
    }

    fn append_cycle(
        &self,
        circuit: &mut Circuit,
        stabilizers: &[Stabilizer],
        key: &str,
    ) -> SurfaceResult<()> {
        let ancillas = self.layout.ancilla_qubits();
        let basis_change = || {
            ancillas
                .iter()
                .map(|&a| Operation::single_qubit_gate(StandardGate::H, a))
        };

        // X-type: parity of the neighbors read out in the |+> basis.
        circuit.extend(basis_change())?;
        for stab in stabilizers {
            circuit.extend(
                stab.support
                    .iter()
                    .map(|&d| Operation::two_qubit_gate(StandardGate::CX, stab.ancilla, d)),
            )?;
        }
        circuit.extend(basis_change())?;

        // Z-type: parity accumulated directly onto the ancilla.
        for stab in stabilizers {
            circuit.extend(
                stab.support
                    .iter()
                    .map(|&d| Operation::two_qubit_gate(StandardGate::CX, d, stab.ancilla)),
            )?;
        }

        circuit.measure(ancillas.iter().copied(), key)?;
        Ok(())
    }
}
