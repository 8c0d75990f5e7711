//! The `build` command: assemble the prompt from the brief.

use crate::brief::Brief;
use crate::cli::BuildArgs;
use crate::error::{MercatoError, Result};
use crate::prompt;
use serde_json::json;

pub fn cmd_build(args: BuildArgs) -> Result<()> {
    let brief = Brief::load(&args.file)?;
    let text = prompt::assemble(&brief);

    let rendered = if args.json {
        let focus: Vec<String> = brief.focus.clone().into();
        let value = json!({
            "prompt": text,
            "focus": focus,
            "format": brief.format.label(),
            "tone": brief.tone.label(),
            "detail": brief.detail.label(),
        });
        serde_json::to_string_pretty(&value)
            .map_err(|e| MercatoError::UserError(format!("failed to encode JSON: {}", e)))?
    } else {
        text
    };

    match args.output {
        Some(path) => {
            crate::fs::atomic_write_file(&path, &rendered)?;
            println!("Wrote prompt: {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
