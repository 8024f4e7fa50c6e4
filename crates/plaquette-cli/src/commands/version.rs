//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - surface-code patch circuits",
        style("Plaquette").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  plaquette-ir       Grid-qubit circuit model");
    println!("  plaquette-surface  Patch encoding and stabilizer cycles");
    println!("  plaquette-cli      Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
