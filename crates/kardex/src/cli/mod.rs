//! # CLI Behavior
//!
//! This is one possible UI client for the catalog — not the application
//! itself. It is the only place that knows about terminal I/O and prompts.
//!
//! The UI is an interactive session: the collection is in-memory only, so a
//! one-shot command would always operate on an empty catalog. Each prompt
//! line is one user event; the loop is prompt → dispatch → re-render, and
//! the prompt itself shows the current mode (`kardex >` in create mode,
//! `kardex [edit #N] >` while an edit target is active).
//!
//! ## Session commands
//!
//! - `add` — prompt for each field, then submit (create)
//! - `edit <id>` — set the edit target, prompt with current values
//!   pre-filled (empty reply keeps a value), then submit (update)
//! - `cancel` — drop the edit target, back to create mode
//! - `delete <id>` / `toggle <id>` — per-card affordances
//! - `list` / `show <id>` — render cards
//! - `dump` — print the collection as JSON
//! - `help`, `quit`
//!
//! ## Module structure
//!
//! - `setup`: invocation flags via clap
//! - `session`: the loop, input parsing, form prompts, API dispatch
//! - `render`: cards, lists, leveled messages
//! - `styles`: terminal styling constants

mod render;
mod session;
pub mod setup;
mod styles;

use anyhow::Result;
use clap::Parser;

pub fn run() -> Result<()> {
    let cli = setup::Cli::parse();
    if cli.plain {
        console::set_colors_enabled(false);
    }
    session::Session::new(cli.quiet).run()
}
