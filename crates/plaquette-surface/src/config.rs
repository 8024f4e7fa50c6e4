//! Layout files.
//!
//! A patch can be described in YAML or JSON as two lists of `[row, col]`
//! pairs:
//!
//! ```yaml
//! data: [[0, 0], [0, 1], [1, 0], [1, 1]]
//! ancillas: [[0.5, 0.5], [0.5, 1.5], [1.5, 0.5]]
//! ```

use std::path::Path;

use plaquette_ir::GridQubit;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SurfaceError, SurfaceResult};
use crate::layout::PatchLayout;

/// Serialized description of a [`PatchLayout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Data qubit coordinates, in order.
    pub data: Vec<[f64; 2]>,
    /// Ancilla qubit coordinates, in order.
    #[serde(default)]
    pub ancillas: Vec<[f64; 2]>,
}

impl LayoutConfig {
    /// Parse a YAML layout.
    pub fn from_yaml(source: &str) -> SurfaceResult<Self> {
        serde_yaml_ng::from_str(source).map_err(|e| SurfaceError::Config(e.to_string()))
    }

    /// Parse a JSON layout.
    pub fn from_json(source: &str) -> SurfaceResult<Self> {
        serde_json::from_str(source).map_err(|e| SurfaceError::Config(e.to_string()))
    }

    /// Load a layout file, choosing the parser by extension.
    ///
    /// `.json` files are read as JSON; everything else as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> SurfaceResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| SurfaceError::Config(format!("{}: {e}", path.display())))?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        debug!(path = %path.display(), json = is_json, "loading layout file");
        if is_json {
            Self::from_json(&source)
        } else {
            Self::from_yaml(&source)
        }
    }

    /// Describe an existing layout.
    pub fn from_layout(layout: &PatchLayout) -> Self {
        let coords = |qubits: &[GridQubit]| qubits.iter().map(|q| [q.row(), q.col()]).collect();
        Self {
            data: coords(layout.data_qubits()),
            ancillas: coords(layout.ancilla_qubits()),
        }
    }

    /// Validate the coordinates and build the layout.
    pub fn into_layout(self) -> SurfaceResult<PatchLayout> {
        let to_qubits = |pairs: Vec<[f64; 2]>| -> SurfaceResult<Vec<GridQubit>> {
            pairs
                .into_iter()
                .map(|[row, col]| GridQubit::new(row, col).map_err(SurfaceError::from))
                .collect()
        };
        PatchLayout::new(to_qubits(self.data)?, to_qubits(self.ancillas)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_YAML: &str = "
data: [[0, 0], [0, 1], [1, 0], [1, 1]]
ancillas: [[0.5, 0.5], [0.5, 1.5], [1.5, 0.5]]
";

    #[test]
    fn test_yaml_matches_distance_two() {
        let layout = LayoutConfig::from_yaml(EXAMPLE_YAML)
            .unwrap()
            .into_layout()
            .unwrap();
        assert_eq!(layout, PatchLayout::distance_two().unwrap());
    }

    #[test]
    fn test_json_layout() {
        let json = r#"{"data": [[0, 0]], "ancillas": [[0.5, 0.5]]}"#;
        let layout = LayoutConfig::from_json(json).unwrap().into_layout().unwrap();
        assert_eq!(layout.data_qubits(), &[GridQubit::grid(0, 0)]);
        assert_eq!(layout.ancilla_qubits().len(), 1);
    }

    #[test]
    fn test_ancillas_default_to_empty() {
        let config = LayoutConfig::from_yaml("data: [[0, 0]]").unwrap();
        assert!(config.ancillas.is_empty());
    }

    #[test]
    fn test_from_layout_roundtrip() {
        let layout = PatchLayout::distance_two().unwrap();
        let config = LayoutConfig::from_layout(&layout);
        assert_eq!(config.ancillas[1], [0.5, 1.5]);
        assert_eq!(config.into_layout().unwrap(), layout);
    }

    #[test]
    fn test_malformed_file() {
        assert!(matches!(
            LayoutConfig::from_yaml("data: [[0]]"),
            Err(SurfaceError::Config(_))
        ));
        assert!(matches!(
            LayoutConfig::from_yaml("qubits: []"),
            Err(SurfaceError::Config(_))
        ));
    }

    #[test]
    fn test_duplicate_coordinate_in_file() {
        let config = LayoutConfig::from_yaml("data: [[0, 0], [0.0, 0]]").unwrap();
        assert!(matches!(
            config.into_layout(),
            Err(SurfaceError::DuplicateCoordinate(_))
        ));
    }
}
