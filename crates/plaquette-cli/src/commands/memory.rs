//! Memory command implementation.

use std::path::Path;

use anyhow::Result;
use console::style;

use plaquette_surface::StabilizerGenerator;

use super::common::{load_layout, print_circuit, print_layout};
use crate::OutputFormat;

/// Execute the memory command.
pub fn execute(rounds: usize, layout: Option<&Path>, format: OutputFormat) -> Result<()> {
    let layout = load_layout(layout)?;
    if format == OutputFormat::Text {
        println!(
            "{} Building memory experiment with {} rounds",
            style("→").cyan().bold(),
            style(rounds).yellow()
        );
    }
    print_layout(&layout, format);

    let circuit = StabilizerGenerator::new(layout).create_memory_circuit(rounds)?;
    if format == OutputFormat::Text {
        println!("  Syndrome keys: {}", circuit.measurement_keys().join(", "));
    }
    print_circuit(&circuit, "Memory Experiment", format)
}
