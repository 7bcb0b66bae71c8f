//! Cursor control and the derived edit-target query.
//!
//! `begin` sets the cursor unconditionally, matching the store contract:
//! existence is only decided by the derived query, so a cursor pointed at
//! nothing just means the form stays in create mode.

use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Record, RecordId};
use crate::store::RecordStore;

pub fn begin<R: Record>(store: &mut RecordStore<R>, id: RecordId) -> CmdResult<R> {
    store.set_edit_target(id);

    let mut result = CmdResult::default();
    match store.edit_target() {
        Some(record) => {
            result.add_message(CmdMessage::info(format!("Editing: {}", record.label())));
            result.listed.push(record.clone());
        }
        None => {
            result.add_message(CmdMessage::warning(format!(
                "No record with id {id}; the form stays in create mode"
            )));
        }
    }
    result
}

pub fn cancel<R: Record>(store: &mut RecordStore<R>) -> CmdResult<R> {
    store.clear_edit_target();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("Edit cancelled; back to create mode"));
    result
}

/// Snapshot of the current edit target, if the cursor resolves to one.
pub fn current<R: Record>(store: &RecordStore<R>) -> CmdResult<R> {
    let mut result = CmdResult::default();
    if let Some(record) = store.edit_target() {
        result.listed.push(record.clone());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, delete, MessageLevel};
    use crate::model::{Book, BookDraft};

    fn seeded() -> RecordStore<Book> {
        let mut store = RecordStore::new();
        create::run(
            &mut store,
            BookDraft {
                title: "Dune".into(),
                author: "Herbert".into(),
                isbn: "123".into(),
                ..BookDraft::default()
            },
        );
        store
    }

    #[test]
    fn begin_lists_the_target() {
        let mut store = seeded();
        let result = begin(&mut store, 1);

        assert_eq!(result.listed[0].title, "Dune");
        assert_eq!(current(&store).listed[0].id, 1);
    }

    #[test]
    fn begin_with_absent_id_warns_but_sets_cursor() {
        let mut store = seeded();
        let result = begin(&mut store, 42);

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(store.editing_id(), Some(42));
        assert!(current(&store).listed.is_empty());
    }

    #[test]
    fn cancel_clears_the_cursor() {
        let mut store = seeded();
        begin(&mut store, 1);
        cancel(&mut store);

        assert_eq!(store.editing_id(), None);
        assert!(current(&store).listed.is_empty());
    }

    #[test]
    fn current_goes_empty_after_target_deleted() {
        let mut store = seeded();
        begin(&mut store, 1);
        delete::run(&mut store, 1);

        assert!(current(&store).listed.is_empty());
    }
}
