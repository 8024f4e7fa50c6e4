//! Grid qubit type.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{IrError, IrResult};

/// A qubit identified by its (row, column) position on a lattice.
///
/// Coordinates are real numbers so that measure qubits can sit between
/// data qubits at half-integer positions. Two qubits are the same qubit
/// exactly when their coordinates are equal.
///
/// Coordinates are always finite and `-0.0` is stored as `0.0`, which makes
/// equality, hashing and ordering total. Ordering is row-major.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawGridQubit")]
pub struct GridQubit {
    row: f64,
    col: f64,
}

#[derive(Deserialize)]
struct RawGridQubit {
    row: f64,
    col: f64,
}

impl TryFrom<RawGridQubit> for GridQubit {
    type Error = IrError;

    fn try_from(raw: RawGridQubit) -> Result<Self, Self::Error> {
        GridQubit::new(raw.row, raw.col)
    }
}

/// Map `-0.0` to `0.0` so bit patterns agree with `==`.
#[inline]
fn normalize(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

impl GridQubit {
    /// Create a qubit at `(row, col)`.
    ///
    /// Returns [`IrError::InvalidCoordinate`] if either value is NaN or infinite.
    pub fn new(row: f64, col: f64) -> IrResult<Self> {
        if !row.is_finite() || !col.is_finite() {
            return Err(IrError::InvalidCoordinate { row, col });
        }
        Ok(Self {
            row: normalize(row),
            col: normalize(col),
        })
    }

    /// Create a qubit at integer lattice coordinates.
    pub fn grid(row: i32, col: i32) -> Self {
        Self {
            row: normalize(f64::from(row)),
            col: normalize(f64::from(col)),
        }
    }

    /// Row coordinate.
    #[inline]
    pub fn row(&self) -> f64 {
        self.row
    }

    /// Column coordinate.
    #[inline]
    pub fn col(&self) -> f64 {
        self.col
    }

    /// Coordinates as a `(row, col)` pair.
    #[inline]
    pub fn coords(&self) -> (f64, f64) {
        (self.row, self.col)
    }

    /// The qubit position shifted by `(dr, dc)`.
    ///
    /// Returns `None` when the shifted position is not finite.
    pub fn offset(&self, dr: f64, dc: f64) -> Option<Self> {
        Self::new(self.row + dr, self.col + dc).ok()
    }
}

impl PartialEq for GridQubit {
    fn eq(&self, other: &Self) -> bool {
        self.row.to_bits() == other.row.to_bits() && self.col.to_bits() == other.col.to_bits()
    }
}

impl Eq for GridQubit {}

impl Hash for GridQubit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.to_bits().hash(state);
        self.col.to_bits().hash(state);
    }
}

impl PartialOrd for GridQubit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GridQubit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.row
            .total_cmp(&other.row)
            .then_with(|| self.col.total_cmp(&other.col))
    }
}

impl fmt::Display for GridQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_qubit_display() {
        assert_eq!(format!("{}", GridQubit::grid(0, 1)), "q(0, 1)");
        assert_eq!(
            format!("{}", GridQubit::new(0.5, 1.5).unwrap()),
            "q(0.5, 1.5)"
        );
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(matches!(
            GridQubit::new(f64::NAN, 0.0),
            Err(IrError::InvalidCoordinate { .. })
        ));
        assert!(GridQubit::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let a = GridQubit::new(-0.0, 0.0).unwrap();
        let b = GridQubit::grid(0, 0);
        assert_eq!(a, b);

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert_eq!(format!("{a}"), "q(0, 0)");
    }

    #[test]
    fn test_row_major_ordering() {
        let mut qubits = vec![
            GridQubit::new(1.5, 0.5).unwrap(),
            GridQubit::grid(1, 0),
            GridQubit::new(0.5, 1.5).unwrap(),
            GridQubit::grid(0, 1),
            GridQubit::grid(0, 0),
        ];
        qubits.sort();
        let coords: Vec<_> = qubits.iter().map(GridQubit::coords).collect();
        assert_eq!(
            coords,
            vec![(0.0, 0.0), (0.0, 1.0), (0.5, 1.5), (1.0, 0.0), (1.5, 0.5)]
        );
    }

    #[test]
    fn test_offset() {
        let ancilla = GridQubit::new(0.5, 0.5).unwrap();
        assert_eq!(ancilla.offset(-0.5, -0.5), Some(GridQubit::grid(0, 0)));
        assert_eq!(ancilla.offset(0.5, 0.5), Some(GridQubit::grid(1, 1)));
        assert_eq!(GridQubit::new(f64::MAX, 0.0).unwrap().offset(f64::MAX, 0.0), None);
    }

    #[test]
    fn test_serde_validates() {
        let q: GridQubit = serde_json::from_str(r#"{"row":0.5,"col":1.5}"#).unwrap();
        assert_eq!(q, GridQubit::new(0.5, 1.5).unwrap());

        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"{"row":0.5,"col":1.5}"#);
    }
}
