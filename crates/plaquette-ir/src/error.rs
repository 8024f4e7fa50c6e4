//! Error types for the IR crate.

use crate::qubit::GridQubit;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A qubit coordinate is NaN or infinite.
    #[error("Invalid qubit coordinate ({row}, {col}): coordinates must be finite")]
    InvalidCoordinate {
        /// Row value that was supplied.
        row: f64,
        /// Column value that was supplied.
        col: f64,
    },

    /// Gate requires different number of qubits.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },

    /// Duplicate qubit in operation.
    #[error("Duplicate qubit {qubit} in operation '{op_name}'")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: GridQubit,
        /// Name of the offending operation.
        op_name: String,
    },

    /// Measurement key is already in use by this circuit.
    #[error("Measurement key '{0}' is already used in this circuit")]
    DuplicateMeasurementKey(String),

    /// Measurement key is empty.
    #[error("Measurement key must not be empty")]
    EmptyMeasurementKey,

    /// JSON encoding or decoding failed.
    #[error("Circuit serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
