//! Quantum gate types.

use serde::{Deserialize, Serialize};

/// Standard gates with known semantics.
///
/// Only the Clifford gates that surface-code circuits are built from are
/// represented; all of them are parameter-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardGate {
    // Single-qubit Pauli gates
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,

    // Single-qubit Clifford gates
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,

    // Two-qubit gates
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Z gate.
    CZ,
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "id",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::CX => "cx",
            StandardGate::CZ => "cz",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::I
            | StandardGate::X
            | StandardGate::Y
            | StandardGate::Z
            | StandardGate::H
            | StandardGate::S
            | StandardGate::Sdg => 1,

            StandardGate::CX | StandardGate::CZ => 2,
        }
    }

    /// Diagram symbols drawn on each qubit wire the gate touches, in
    /// operand order.
    pub fn wire_symbols(&self) -> &'static [&'static str] {
        match self {
            StandardGate::I => &["I"],
            StandardGate::X => &["X"],
            StandardGate::Y => &["Y"],
            StandardGate::Z => &["Z"],
            StandardGate::H => &["H"],
            StandardGate::S => &["S"],
            StandardGate::Sdg => &["S^-1"],
            StandardGate::CX => &["@", "X"],
            StandardGate::CZ => &["@", "@"],
        }
    }
}
