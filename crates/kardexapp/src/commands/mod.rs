//! # Command Layer
//!
//! The business logic of the catalog, one operation per submodule. Commands
//! are pure functions over a [`RecordStore`](crate::store::RecordStore)
//! reference; they never touch stdout, stderr, or process exits, and they
//! return a structured [`CmdResult`] the UI decides how to render.
//!
//! ## Structured returns
//!
//! A [`CmdResult`] carries:
//! - `affected`: records a mutation touched (post-operation state)
//! - `listed`: records to display (snapshots, not mutations)
//! - `messages`: leveled [`CmdMessage`]s (info, success, warning, error)
//! - `payload`: pre-rendered text for commands whose output is not a record
//!   list (currently only `dump`'s JSON)
//!
//! ## Store vs. command contracts
//!
//! The store keeps its operations total: updating or deleting an absent id
//! is a silent no-op at that layer. Commands are where "nothing matched"
//! becomes a user-visible warning — still not an error, the collection is
//! simply unchanged. The only hard error in the system is validation on
//! submission, and that lives in [`submit`].
//!
//! ## Testing strategy
//!
//! This is where the lion's share of testing lives. Command tests build a
//! store in memory, run the operation, and assert on both the `CmdResult`
//! and the resulting store state.

use serde::Serialize;

use crate::model::Record;

pub mod create;
pub mod delete;
pub mod dump;
pub mod edit;
pub mod list;
pub mod submit;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug)]
pub struct CmdResult<R: Record> {
    pub affected: Vec<R>,
    pub listed: Vec<R>,
    pub messages: Vec<CmdMessage>,
    pub payload: Option<String>,
}

impl<R: Record> Default for CmdResult<R> {
    fn default() -> Self {
        Self {
            affected: Vec::new(),
            listed: Vec::new(),
            messages: Vec::new(),
            payload: None,
        }
    }
}

impl<R: Record> CmdResult<R> {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, records: Vec<R>) -> Self {
        self.listed = records;
        self
    }
}
