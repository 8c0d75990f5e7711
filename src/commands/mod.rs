//! Command implementations for mercato.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command except `init` loads the brief file, and
//! every mutating command saves it back atomically.

mod build;
mod focus;
mod init;
mod set;
mod show;

use crate::cli::{Command, FocusAction, FocusCommand};
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Init(args) => init::cmd_init(args),
        Command::Show(args) => show::cmd_show(args),
        Command::Set(args) => set::cmd_set(args),
        Command::Focus(focus_cmd) => dispatch_focus(focus_cmd),
        Command::Build(args) => build::cmd_build(args),
    }
}

/// Dispatch focus subcommands.
fn dispatch_focus(focus_cmd: FocusCommand) -> Result<()> {
    match focus_cmd.action {
        FocusAction::List(args) => focus::cmd_focus_list(args),
        FocusAction::Toggle(args) => focus::cmd_focus_toggle(args),
    }
}
