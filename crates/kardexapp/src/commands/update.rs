use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Record, RecordId};
use crate::store::RecordStore;

/// Raw in-place merge. An absent id is a warning, never an error: the
/// collection is unchanged and the caller keeps going.
pub fn run<R: Record>(store: &mut RecordStore<R>, id: RecordId, patch: R::Patch) -> CmdResult<R> {
    let mut result = CmdResult::default();
    if store.update(id, patch) {
        if let Some(record) = store.get(id) {
            result.add_message(CmdMessage::success(format!("Updated: {}", record.label())));
            result.affected.push(record.clone());
        }
    } else {
        result.add_message(CmdMessage::warning(format!(
            "No record with id {id}; nothing updated"
        )));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, MessageLevel};
    use crate::model::{Book, BookDraft, BookPatch};

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
    fn update_patches_matching_record() {
        let mut store = seeded();
        let result = run(&mut store, 1, BookPatch::availability(false));

        assert_eq!(result.affected.len(), 1);
        assert!(!result.affected[0].available);
        assert_eq!(store.get(1).unwrap().title, "Dune");
        assert!(!store.get(1).unwrap().available);
    }

    #[test]
    fn update_absent_id_warns_and_leaves_store() {
        let mut store = seeded();
        let snapshot = store.records().to_vec();

        let result = run(&mut store, 9, BookPatch::availability(false));

        assert!(result.affected.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(store.records(), snapshot.as_slice());
    }
}
