//! # Kardex CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, and this
//! file only initializes logging, invokes `cli::run()`, and handles process
//! termination.
//!
//! ## Layering
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │  CLI layer (crates/kardex/src/cli/)                    │
//! │  - clap argument parsing (setup.rs)                    │
//! │  - interactive session loop + form prompts (session.rs)│
//! │  - card/list/message rendering (render.rs, styles.rs)  │
//! └────────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌────────────────────────────────────────────────────────┐
//! │  API facade (crates/kardexapp/src/api.rs)              │
//! │  - dispatches to command modules                       │
//! │  - returns structured CmdResult values                 │
//! └────────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌────────────────────────────────────────────────────────┐
//! │  Commands + store (crates/kardexapp)                   │
//! │  - pure business logic over the record store           │
//! │  - no knowledge of stdout/stderr or process exits      │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from the API facade inward is UI agnostic. The CLI layer owns
//! all user-facing concerns: prompting, parsing session input, rendering,
//! and exit codes. The catalog lives only in process memory; a session ends,
//! the collection is gone.

mod cli;

fn main() {
    env_logger::init();
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
