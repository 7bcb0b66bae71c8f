//! Form submission: the one place in the system with validation.
//!
//! The flow mirrors a classic add/edit form. Required fields are checked
//! for presence (after trimming); a failure is surfaced as
//! [`KardexError::Validation`] without touching the store. A valid draft
//! either patches the current edit target and clears the cursor, or is
//! added as a new record when no target is active. Whether a target is
//! active is decided by the derived query, so a stale cursor (target
//! deleted since the cursor was set) silently takes the create path.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{KardexError, Result};
use crate::model::Record;
use crate::store::RecordStore;

/// The outcome of a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Created,
    Updated,
}

pub fn run<R: Record>(
    store: &mut RecordStore<R>,
    draft: R::Draft,
) -> Result<(Submission, CmdResult<R>)> {
    let missing = R::missing_required(&draft);
    if !missing.is_empty() {
        return Err(KardexError::missing(missing));
    }

    let mut result = CmdResult::default();
    match store.edit_target().map(|r| r.id()) {
        Some(id) => {
            store.update(id, draft.into());
            store.clear_edit_target();
            if let Some(record) = store.get(id) {
                result.add_message(CmdMessage::success(format!("Updated: {}", record.label())));
                result.affected.push(record.clone());
            }
            Ok((Submission::Updated, result))
        }
        None => {
            let id = store.add(draft);
            if let Some(record) = store.get(id) {
                result.add_message(CmdMessage::success(format!("Added: {}", record.label())));
                result.affected.push(record.clone());
            }
            Ok((Submission::Created, result))
        }
    }
}
