//! # API Facade
//!
//! A thin facade over the command layer: the single entry point for any UI
//! client. It owns the session's [`RecordStore`] and dispatches each call to
//! the matching command module — no business logic, no I/O, no presentation.
//!
//! Generic over the record shape, so a UI for another domain instantiates
//! `KardexApi<TheirRecord>` and gets the same surface.

use serde::Serialize;

use crate::commands::{self, CmdResult};
use crate::commands::submit::Submission;
use crate::error::Result;
use crate::model::{Record, RecordId};
use crate::store::RecordStore;

pub struct KardexApi<R: Record> {
    store: RecordStore<R>,
}

impl<R: Record> Default for KardexApi<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> KardexApi<R> {
    pub fn new() -> Self {
        Self {
            store: RecordStore::new(),
        }
    }

    /// Raw add, no validation. The validated path is [`submit`](Self::submit).
    pub fn add_record(&mut self, draft: R::Draft) -> CmdResult<R> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn update_record(&mut self, id: RecordId, patch: R::Patch) -> CmdResult<R> {
        commands::update::run(&mut self.store, id, patch)
    }

    pub fn delete_record(&mut self, id: RecordId) -> CmdResult<R> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn begin_edit(&mut self, id: RecordId) -> CmdResult<R> {
        commands::edit::begin(&mut self.store, id)
    }

    pub fn cancel_edit(&mut self) -> CmdResult<R> {
        commands::edit::cancel(&mut self.store)
    }

    /// The derived edit-target query, as a listed snapshot.
    pub fn current_edit(&self) -> CmdResult<R> {
        commands::edit::current(&self.store)
    }

    /// The edit target's fields as a draft, for pre-filling a form.
    /// `None` means create mode (cursor unset or stale).
    pub fn edit_draft(&self) -> Option<R::Draft> {
        self.store.edit_target().map(Record::to_draft)
    }

    /// Validated form submission: update-and-clear-cursor when an edit
    /// target is active, add otherwise.
    pub fn submit(&mut self, draft: R::Draft) -> Result<(Submission, CmdResult<R>)> {
        commands::submit::run(&mut self.store, draft)
    }

    pub fn list(&self) -> CmdResult<R> {
        commands::list::run(&self.store)
    }

    pub fn dump(&self) -> Result<CmdResult<R>>
    where
        R: Serialize,
    {
        commands::dump::run(&self.store)
    }

    /// Read-only access to the store snapshot, for UIs that render
    /// individual records.
    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Book, BookDraft, BookPatch};

    fn dune() -> BookDraft {
        BookDraft {
            title: "Dune".into(),
            author: "Herbert".into(),
            isbn: "123".into(),
            ..BookDraft::default()
        }
    }

    #[test]
    fn facade_dispatches_to_commands() {
        let mut api = KardexApi::<Book>::new();
        api.add_record(dune());
        assert_eq!(api.list().listed.len(), 1);

        api.update_record(1, BookPatch::availability(false));
        assert!(!api.store().get(1).unwrap().available);

        api.delete_record(1);
        assert!(api.store().is_empty());
    }

    #[test]
    fn edit_draft_prefills_from_target() {
        let mut api = KardexApi::<Book>::new();
        api.add_record(dune());

        assert!(api.edit_draft().is_none());
        api.begin_edit(1);
        assert_eq!(api.edit_draft().unwrap().title, "Dune");

        api.cancel_edit();
        assert!(api.edit_draft().is_none());
    }
}
