//! Encode command implementation.

use std::path::Path;

use anyhow::Result;
use console::style;

use plaquette_surface::PatchEncoder;

use super::common::{load_layout, print_circuit, print_layout};
use crate::OutputFormat;

/// Execute the encode command.
pub fn execute(layout: Option<&Path>, format: OutputFormat) -> Result<()> {
    let layout = load_layout(layout)?;
    if format == OutputFormat::Text {
        println!("{} Preparing logical |0>", style("→").cyan().bold());
    }
    print_layout(&layout, format);

    let circuit = PatchEncoder::new(layout).create_logical_zero_circuit()?;
    print_circuit(&circuit, "Logical |0> Preparation Circuit", format)?;

    if format == OutputFormat::Text {
        println!("{}", style("Note: logical |0> needs only resets.").dim());
        println!(
            "{}",
            style("The entangling work happens in the stabilizer cycles.").dim()
        );
    }
    Ok(())
}
