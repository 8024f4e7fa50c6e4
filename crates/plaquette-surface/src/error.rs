//! Error types for the surface crate.

use plaquette_ir::GridQubit;
use thiserror::Error;

/// Errors produced while building surface-code layouts and circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SurfaceError {
    /// Two qubits in a layout share a coordinate.
    #[error("Qubit coordinate {0} appears more than once in the layout")]
    DuplicateCoordinate(GridQubit),

    /// A qubit was queried that the layout never registered.
    #[error("Qubit {0} is not part of the layout")]
    UnknownQubit(GridQubit),

    /// The stabilizer cycle needs at least one ancilla to measure.
    #[error("Layout has no ancilla qubits, nothing to measure")]
    NoAncillas,

    /// A memory experiment needs at least one round.
    #[error("rounds must be at least 1, got {0}")]
    InvalidRounds(usize),

    /// A layout file could not be parsed.
    #[error("Invalid layout file: {0}")]
    Config(String),

    /// Circuit builder returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] plaquette_ir::IrError),
}

/// Result type for surface-code operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;
