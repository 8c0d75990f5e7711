//! The `init` command: create a default brief file.

use crate::brief::Brief;
use crate::cli::InitArgs;
use crate::error::{MercatoError, Result};
use chrono::Utc;

pub fn cmd_init(args: InitArgs) -> Result<()> {
    if args.file.exists() && !args.force {
        return Err(MercatoError::UserError(format!(
            "brief file '{}' already exists.\n\n\
             To overwrite it with defaults, run:\n  mercato init --file {} --force",
            args.file.display(),
            args.file.display()
        )));
    }

    let mut brief = Brief::default();
    brief.created = Some(Utc::now());
    brief.save(&args.file)?;

    println!("Created brief: {}", args.file.display());
    println!();
    println!("Next steps:");
    println!("  mercato set industry \"SaaS HR\"    # fill in the context");
    println!("  mercato focus list                 # review analysis focuses");
    println!("  mercato build                      # render the prompt");

    Ok(())
}
