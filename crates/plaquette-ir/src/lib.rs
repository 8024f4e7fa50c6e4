//! Plaquette Circuit Model
//!
//! This crate provides the circuit data structures the surface-code
//! generators in `plaquette-surface` build on.
//!
//! # Overview
//!
//! Qubits are addressed by their position on a lattice ([`GridQubit`]), so
//! data qubits at integer coordinates and measure qubits at half-integer
//! coordinates can be mixed freely. A [`Circuit`] is an append-only sequence
//! of [`Moment`]s; each append places the operation in the earliest moment
//! after the last one touching its qubits.
//!
//! # Core Components
//!
//! - **Qubits**: [`GridQubit`] with exact coordinate equality
//! - **Gates**: [`StandardGate`] for the Clifford gates used by stabilizer circuits
//! - **Operations**: [`Operation`] combining a gate, reset or keyed measurement with its qubits
//! - **Circuit**: [`Circuit`] builder with text rendering and JSON export
//! - **Interaction graph**: [`InteractionGraph`] of two-qubit couplings
//!
//! # Example: Measuring a Parity
//!
//! ```rust
//! use plaquette_ir::{Circuit, GridQubit};
//!
//! let data = [GridQubit::grid(0, 0), GridQubit::grid(0, 1)];
//! let ancilla = GridQubit::new(0.5, 0.5).unwrap();
//!
//! let mut circuit = Circuit::new("parity");
//! for &d in &data {
//!     circuit.cx(d, ancilla).unwrap();
//! }
//! circuit.measure([ancilla], "parity").unwrap();
//!
//! assert_eq!(circuit.num_operations(), 3);
//! assert_eq!(circuit.depth(), 3);
//! println!("{circuit}");
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `I` | 1 | Identity |
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `H` | 1 | Hadamard gate |
//! | `S`, `Sdg` | 1 | S and S-dagger gates |
//! | `CX` | 2 | Controlled-NOT (CNOT) |
//! | `CZ` | 2 | Controlled-Z |

pub mod circuit;
mod diagram;
pub mod error;
pub mod gate;
pub mod interaction;
pub mod moment;
pub mod operation;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use interaction::InteractionGraph;
pub use moment::Moment;
pub use operation::{Operation, OperationKind};
pub use qubit::GridQubit;
