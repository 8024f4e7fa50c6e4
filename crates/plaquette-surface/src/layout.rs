//! Patch layouts and diagonal neighbor resolution.
//!
//! Data qubits sit on integer lattice points and ancillas on the
//! half-integer points between them, so the qubits an ancilla checks are the
//! ones at `(row ± 0.5, col ± 0.5)`.

use plaquette_ir::GridQubit;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SurfaceError, SurfaceResult};

/// Diagonal offsets probed around an ancilla, in resolution order.
pub const DIAGONAL_OFFSETS: [(f64, f64); 4] =
    [(-0.5, -0.5), (-0.5, 0.5), (0.5, -0.5), (0.5, 0.5)];

/// What a qubit is used for within a patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QubitRole {
    /// Holds part of the logical state.
    Data,
    /// Extracts parity information by measurement.
    Ancilla,
}

/// A fixed surface-code patch: ordered data qubits, ordered ancillas and a
/// coordinate index over both.
///
/// The layout is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchLayout {
    data_qubits: Vec<GridQubit>,
    ancilla_qubits: Vec<GridQubit>,
    index: FxHashMap<GridQubit, QubitRole>,
}

impl PatchLayout {
    /// Build a layout from data and ancilla qubits, keeping both orders.
    ///
    /// Returns [`SurfaceError::DuplicateCoordinate`] if any coordinate is
    /// used twice across the combined set.
    pub fn new(
        data_qubits: impl IntoIterator<Item = GridQubit>,
        ancilla_qubits: impl IntoIterator<Item = GridQubit>,
    ) -> SurfaceResult<Self> {
        let data_qubits: Vec<_> = data_qubits.into_iter().collect();
        let ancilla_qubits: Vec<_> = ancilla_qubits.into_iter().collect();

        let mut index = FxHashMap::default();
        let tagged = data_qubits
            .iter()
            .map(|q| (q, QubitRole::Data))
            .chain(ancilla_qubits.iter().map(|q| (q, QubitRole::Ancilla)));
        for (&qubit, role) in tagged {
            if index.insert(qubit, role).is_some() {
                return Err(SurfaceError::DuplicateCoordinate(qubit));
            }
        }

        debug!(
            data_qubits = data_qubits.len(),
            ancilla_qubits = ancilla_qubits.len(),
            "built patch layout"
        );

        Ok(Self {
            data_qubits,
            ancilla_qubits,
            index,
        })
    }

    /// The distance-2 example patch.
    ///
    /// ```text
    ///   A   D---A---D
    ///       |   |   |
    ///   D---A---D---A
    ///   |   |   |
    ///   A---D---A
    /// ```
    ///
    /// Data qubits at (0,0), (0,1), (1,0), (1,1); ancillas at (0.5,0.5),
    /// (0.5,1.5) and (1.5,0.5).
    pub fn distance_two() -> SurfaceResult<Self> {
        let data = [(0, 0), (0, 1), (1, 0), (1, 1)].map(|(r, c)| GridQubit::grid(r, c));
        let ancillas = [
            GridQubit::new(0.5, 0.5)?,
            GridQubit::new(0.5, 1.5)?,
            GridQubit::new(1.5, 0.5)?,
        ];
        Self::new(data, ancillas)
    }

    /// Data qubits in construction order.
    pub fn data_qubits(&self) -> &[GridQubit] {
        &self.data_qubits
    }

    /// Ancilla qubits in construction order.
    pub fn ancilla_qubits(&self) -> &[GridQubit] {
        &self.ancilla_qubits
    }

    /// Total number of qubits in the patch.
    pub fn num_qubits(&self) -> usize {
        self.index.len()
    }

    /// Role of `qubit`, or `None` if it is not in the layout.
    pub fn role(&self, qubit: &GridQubit) -> Option<QubitRole> {
        self.index.get(qubit).copied()
    }

    /// Check whether `qubit` is part of the layout.
    pub fn contains(&self, qubit: &GridQubit) -> bool {
        self.index.contains_key(qubit)
    }

    /// Resolve the qubits diagonally adjacent to `ancilla`.
    ///
    /// Candidates are probed in [`DIAGONAL_OFFSETS`] order and matched by
    /// exact coordinate against every qubit in the layout. Boundary ancillas
    /// simply yield fewer than four neighbors.
    ///
    /// Returns [`SurfaceError::UnknownQubit`] if `ancilla` itself was never
    /// registered.
    pub fn neighbors(&self, ancilla: &GridQubit) -> SurfaceResult<Vec<GridQubit>> {
        if !self.contains(ancilla) {
            return Err(SurfaceError::UnknownQubit(*ancilla));
        }

        Ok(DIAGONAL_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| ancilla.offset(dr, dc))
            .filter(|candidate| self.contains(candidate))
            .collect())
    }
}
