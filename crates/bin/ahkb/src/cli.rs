use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use ahkb_domain::action::{ActionKind, RunMode};

/// Build AutoHotkey macro scripts from action lists, and load them back.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value = "ahkb.toml")]
    pub config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty project document
    New {
        /// Where to write the `.json` project
        output: PathBuf,
        /// Application name (defaults to the configured name)
        #[arg(long)]
        name: Option<String>,
        /// Hotkey in AHK syntax, e.g. `^!z` (defaults to the configured hotkey)
        #[arg(long)]
        hotkey: Option<String>,
    },
    /// Export a project (or a previously exported script) as an `.ahk` script
    Export {
        /// `.json` project or `.ahk` script to read
        input: PathBuf,
        /// Output script path (defaults to `<application name>.ahk`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Recover a project document from the ACTION comments of a script
    Import {
        /// `.ahk` script to read
        script: PathBuf,
        /// Output project path (defaults to the script path with `.json`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Add an action to a project or script
    Add {
        /// `.json` project or `.ahk` script to change
        file: PathBuf,
        /// Action kind: Click, Sleep, Run, KeyPress or WaitWindow
        kind: ActionKind,
        #[command(flatten)]
        fields: ActionFields,
        /// One-based position to insert at (defaults to the end)
        #[arg(long)]
        at: Option<NonZeroUsize>,
    },
    /// Change fields of an existing action
    Edit {
        /// `.json` project or `.ahk` script to change
        file: PathBuf,
        /// One-based position, as printed by `show`
        position: NonZeroUsize,
        /// Change the action kind
        #[arg(long)]
        kind: Option<ActionKind>,
        #[command(flatten)]
        fields: ActionFields,
    },
    /// Remove an action
    Remove {
        /// `.json` project or `.ahk` script to change
        file: PathBuf,
        /// One-based position, as printed by `show`
        position: NonZeroUsize,
    },
    /// Move an action one step up or down
    Move {
        /// `.json` project or `.ahk` script to change
        file: PathBuf,
        /// One-based position, as printed by `show`
        position: NonZeroUsize,
        direction: Step,
    },
    /// List the actions of a project or script
    Show {
        /// `.json` project or `.ahk` script
        file: PathBuf,
    },
    /// List programs installed in the Start Menu
    Programs,
}

/// Action fields settable from the command line. Unset flags keep the
/// current value (or the default for a new action).
#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct ActionFields {
    /// Display name
    #[arg(long)]
    pub name: Option<String>,
    /// Screen X coordinate (Click)
    #[arg(long)]
    pub x: Option<u32>,
    /// Screen Y coordinate (Click)
    #[arg(long)]
    pub y: Option<u32>,
    /// Pause in milliseconds (Sleep)
    #[arg(long)]
    pub ms: Option<u64>,
    /// Program (Run), keys (KeyPress) or window title (WaitWindow)
    #[arg(long)]
    pub command: Option<String>,
    /// Command-line arguments (Run)
    #[arg(long)]
    pub params: Option<String>,
    /// Window state: Normal, Minimized, Maximized or Hidden (Run)
    #[arg(long)]
    pub mode: Option<RunMode>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
}
