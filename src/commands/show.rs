//! The `show` command: print the brief's current fields.

use crate::brief::{Brief, Stage};
use crate::cli::ShowArgs;
use crate::error::Result;
use crate::prompt::PLACEHOLDER;

pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let brief = Brief::load(&args.file)?;

    println!("Brief: {}", args.file.display());
    println!();
    println!("Context:");
    print_field("industry", &brief.industry);
    print_field("target_market", &brief.target_market);
    print_field("geography", &brief.geography);
    print_field(
        "stage",
        if brief.stage == Stage::Unset {
            ""
        } else {
            brief.stage.label()
        },
    );
    print_field("products_services", &brief.products_services);
    print_field("competitive_advantage", &brief.competitive_advantage);
    println!();
    println!("Objective:");
    print_field("objective", &brief.objective);
    print_field("budget", &brief.budget);
    print_field("timeframe", &brief.timeframe);
    println!();
    println!("Data and constraints:");
    print_field("available_data", &brief.available_data);
    print_field("constraints", &brief.constraints);
    print_field("methodologies", &brief.methodologies);
    println!();
    println!("Presentation:");
    print_field("tone", brief.tone.label());
    print_field("detail", brief.detail.label());
    print_field("format", brief.format.label());
    print_field("languages", &brief.languages);
    println!();

    let focus: Vec<String> = brief.focus.clone().into();
    println!("Focus: {}", focus.join(", "));

    if let Some(updated) = brief.updated {
        println!();
        println!("Updated: {}", updated.format("%Y-%m-%d %H:%M:%S UTC"));
    }

    Ok(())
}

fn print_field(name: &str, value: &str) {
    let shown = if value.trim().is_empty() {
        PLACEHOLDER
    } else {
        value
    };
    println!("  {:<24}{}", name, shown);
}
