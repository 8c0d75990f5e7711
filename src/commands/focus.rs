//! The `focus` commands: list the catalog and toggle selections.

use crate::brief::Brief;
use crate::cli::{FocusListArgs, FocusToggleArgs};
use crate::error::Result;
use crate::focus::{Focus, FocusToken};

pub fn cmd_focus_list(args: FocusListArgs) -> Result<()> {
    let brief = Brief::load(&args.file)?;

    if brief.focus.is_all() {
        println!("Focus: all (full catalog)");
    } else {
        println!("Focus: explicit selection");
    }
    println!();

    for focus in Focus::ALL {
        let marker = if brief.focus.contains(focus) { "x" } else { " " };
        println!("  [{}] {:<14}{}", marker, focus.slug(), focus.instruction());
    }

    println!();
    println!("Toggle with: mercato focus toggle <id>  (or `all`)");

    Ok(())
}

pub fn cmd_focus_toggle(args: FocusToggleArgs) -> Result<()> {
    let token: FocusToken = args.id.parse()?;

    let mut brief = Brief::load(&args.file)?;
    brief.toggle_focus(token);
    brief.save(&args.file)?;

    let selection: Vec<String> = brief.focus.clone().into();
    println!("Focus: {}", selection.join(", "));

    Ok(())
}
