//! Surface-code patch circuits.
//!
//! Builds `plaquette_ir::Circuit`s for a small surface-code patch:
//!
//! - **Encoding**: logical |0⟩ by resetting every data qubit
//! - **Stabilizer cycles**: X-type then Z-type parity checks through shared
//!   ancillas, finished by one joint `"syndrome"` measurement
//! - **Memory experiments**: encoding followed by repeated cycles
//!
//! Ancillas find the qubits they check by probing the four diagonal
//! half-lattice offsets around their own coordinate.
//!
//! # Quick start
//!
//! ```rust
//! use plaquette_surface::{PatchEncoder, PatchLayout, StabilizerGenerator};
//!
//! let layout = PatchLayout::distance_two().unwrap();
//!
//! let prep = PatchEncoder::new(layout.clone())
//!     .create_logical_zero_circuit()
//!     .unwrap();
//! assert_eq!(prep.num_operations(), 4);
//!
//! let cycle = StabilizerGenerator::new(layout)
//!     .create_stabilizer_cycle()
//!     .unwrap();
//! assert_eq!(cycle.measurement_keys(), vec!["syndrome"]);
//! println!("{cycle}");
//! ```

pub mod config;
pub mod encoder;
pub mod error;
pub mod layout;
pub mod stabilizer;

pub use config::LayoutConfig;
pub use encoder::PatchEncoder;
pub use error::{SurfaceError, SurfaceResult};
pub use layout::{DIAGONAL_OFFSETS, PatchLayout, QubitRole};
pub use stabilizer::{SYNDROME_KEY, Stabilizer, StabilizerGenerator};
