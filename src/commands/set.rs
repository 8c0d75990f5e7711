//! The `set` command: set one brief field by name.

use crate::brief::Brief;
use crate::cli::SetArgs;
use crate::error::Result;

pub fn cmd_set(args: SetArgs) -> Result<()> {
    let mut brief = Brief::load(&args.file)?;
    brief.set_field(&args.field, &args.value)?;
    brief.save(&args.file)?;

    if args.value.trim().is_empty() {
        println!("Cleared {}.", args.field);
    } else {
        println!("Set {} = {}", args.field, args.value);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::Tone;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn set_args(file: PathBuf, field: &str, value: &str) -> SetArgs {
        SetArgs {
            field: field.to_string(),
            value: value.to_string(),
            file,
        }
    }

    #[test]
    fn sets_and_persists_a_field() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("brief.yaml");
        Brief::default().save(&path).unwrap();

        cmd_set(set_args(path.clone(), "tone", "formale")).unwrap();

        let brief = Brief::load(&path).unwrap();
        assert_eq!(brief.tone, Tone::Formale);
        assert!(brief.updated.is_some());
    }

    #[test]
    fn invalid_value_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("brief.yaml");
        Brief::default().save(&path).unwrap();

        let err = cmd_set(set_args(path.clone(), "tone", "urlato")).unwrap_err();
        assert_eq!(err.exit_code(), crate::exit_codes::CONFIG_FAILURE);

        let brief = Brief::load(&path).unwrap();
        assert_eq!(brief.tone, Tone::Consulenziale);
        assert!(brief.updated.is_none());
    }

    #[test]
    fn fails_on_missing_brief() {
        let dir = tempdir().unwrap();
        let result = cmd_set(set_args(dir.path().join("absent.yaml"), "industry", "x"));
        assert!(result.is_err());
    }
}
