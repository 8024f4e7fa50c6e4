//! Shared helpers for CLI commands.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use tracing::info;

use plaquette_ir::Circuit;
use plaquette_surface::{LayoutConfig, PatchLayout};

use crate::OutputFormat;

/// Load a layout file, or the distance-2 patch when no path is given.
pub fn load_layout(path: Option<&Path>) -> Result<PatchLayout> {
    let Some(path) = path else {
        return Ok(PatchLayout::distance_two()?);
    };

    info!(path = %path.display(), "loading layout file");
    let layout = LayoutConfig::from_path(path)
        .and_then(LayoutConfig::into_layout)
        .with_context(|| format!("Failed to load layout: {}", path.display()))?;
    Ok(layout)
}

/// Print a one-line summary of the patch.
pub fn print_layout(layout: &PatchLayout, format: OutputFormat) {
    if format == OutputFormat::Text {
        println!(
            "  Patch: {} data qubits, {} ancilla qubits",
            layout.data_qubits().len(),
            layout.ancilla_qubits().len()
        );
    }
}

/// Print a generated circuit in the requested format.
///
/// Text output frames the diagram between a titled header and a rule of
/// matching width. JSON output writes the circuit alone.
pub fn print_circuit(circuit: &Circuit, title: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let header = format!("--- {title} ---");
            println!(
                "{} Created {}: {} operations, depth {}",
                style("✓").green().bold(),
                style(circuit.name()).cyan(),
                circuit.num_operations(),
                circuit.depth()
            );
            println!();
            println!("{}", style(&header).bold());
            println!("{circuit}");
            println!("{}", "-".repeat(header.chars().count()));
        }
        OutputFormat::Json => {
            println!("{}", circuit.to_json()?);
        }
    }
    Ok(())
}
