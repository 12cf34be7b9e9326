//! Shaper listing command.

#![allow(clippy::print_literal)] // Table headers use literal strings intentionally

use clap::Args;
use clipscope_core::ShaperCatalog;

#[derive(Args)]
pub struct ShapersArgs {
    /// Show details for a specific shaper
    #[arg(value_name = "SHAPER")]
    shaper: Option<String>,
}

pub fn run(args: ShapersArgs) -> anyhow::Result<()> {
    let catalog = ShaperCatalog::new();

    if let Some(key) = &args.shaper {
        let descriptor = catalog
            .get(key)
            .ok_or_else(|| anyhow::anyhow!("Unknown shaper: {}", key))?;

        println!("{}", descriptor.name);
        println!("{}", "=".repeat(descriptor.name.len()));
        println!();
        println!("{}", descriptor.description);
        println!();
        println!("  key        {}", descriptor.key);
        println!(
            "  monotonic  {}",
            if descriptor.kind.is_monotonic() { "yes" } else { "no" }
        );
        return Ok(());
    }

    println!("  {:10}  {:10}  {}", "Key", "Name", "Description");
    println!("  {:10}  {:10}  {}", "---", "----", "-----------");
    for info in catalog.list() {
        println!("  {:10}  {:10}  {}", info.key, info.name, info.description);
    }

    Ok(())
}
