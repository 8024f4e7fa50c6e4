//! Cycle command implementation.

use std::path::Path;

use anyhow::Result;
use console::style;

use plaquette_surface::StabilizerGenerator;

use super::common::{load_layout, print_circuit, print_layout};
use crate::OutputFormat;

/// Execute the cycle command.
pub fn execute(layout: Option<&Path>, format: OutputFormat) -> Result<()> {
    let layout = load_layout(layout)?;
    let text = format == OutputFormat::Text;
    if text {
        println!(
            "{} Building one stabilizer measurement cycle",
            style("→").cyan().bold()
        );
    }
    print_layout(&layout, format);

    let generator = StabilizerGenerator::new(layout);
    if text {
        for stab in generator.stabilizers()? {
            let support: Vec<_> = stab.support.iter().map(ToString::to_string).collect();
            println!(
                "  Stabilizer {} (weight {}): {}",
                style(stab.ancilla).yellow(),
                stab.weight(),
                support.join(", ")
            );
        }
    }

    let circuit = generator.create_stabilizer_cycle()?;
    print_circuit(&circuit, "One Cycle of Stabilizer Measurements", format)
}
