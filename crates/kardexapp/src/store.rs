//! # The Record Store
//!
//! The only stateful component in the system. [`RecordStore`] owns three
//! things: the insertion-ordered collection, the edit cursor, and the id
//! counter. Every state mutation goes through its operations; everything
//! else in the crate is a pure function over a store reference.
//!
//! ## Contracts
//!
//! - **Total operations**: add/update/delete/cursor ops are synchronous
//!   in-memory transformations that always succeed. Updating or deleting an
//!   absent id is a no-op, not an error.
//! - **Ids**: assigned from a monotonic counter at creation, immutable and
//!   unique for the store's lifetime, never reused after a delete.
//! - **Order**: the collection keeps insertion order; `add` appends, `update`
//!   merges in place, `delete` preserves the relative order of survivors.
//! - **Cursor independence**: `set_edit_target` performs no existence check
//!   and `delete` never touches the cursor. Only the derived query
//!   [`edit_target`](RecordStore::edit_target) decides whether the cursor
//!   currently points at anything; a stale cursor simply resolves to `None`
//!   (create mode). It is recomputed on every read, never cached.
//!
//! The store is single-threaded by design: one instance per session, mutated
//! only from the UI event loop, so there is no locking discipline to uphold.

use crate::model::{Record, RecordId};

/// Owns the collection and the edit cursor; generic over the record shape.
#[derive(Debug, Clone)]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
    editing: Option<RecordId>,
    next_id: RecordId,
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            editing: None,
            next_id: 1,
        }
    }

    /// Appends a new record built from `draft` and returns its id.
    ///
    /// No validation happens here; presence checks belong to the submission
    /// path. The cursor is unchanged.
    pub fn add(&mut self, draft: R::Draft) -> RecordId {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(R::from_draft(id, draft));
        id
    }

    /// Shallow-merges `patch` into the record with `id`, in place.
    /// Returns whether a record matched.
    pub fn update(&mut self, id: RecordId, patch: R::Patch) -> bool {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                record.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Removes the record with `id`, keeping the relative order of the rest.
    /// Returns whether a record matched; calling it again is a no-op.
    ///
    /// The cursor is deliberately left alone: a cursor pointing at a deleted
    /// record degrades to create mode through [`edit_target`](Self::edit_target).
    pub fn delete(&mut self, id: RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        self.records.len() < before
    }

    /// Sets the cursor unconditionally. Existence is only ever checked by
    /// the derived query.
    pub fn set_edit_target(&mut self, id: RecordId) {
        self.editing = Some(id);
    }

    pub fn clear_edit_target(&mut self) {
        self.editing = None;
    }

    /// The record the cursor points at, recomputed from the current
    /// collection and cursor on every call. `None` means create mode,
    /// whether the cursor is unset or stale.
    pub fn edit_target(&self) -> Option<&R> {
        self.editing.and_then(|id| self.get(id))
    }

    /// The raw cursor value, stale or not.
    pub fn editing_id(&self) -> Option<RecordId> {
        self.editing
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Snapshot of the collection in insertion order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Book, BookDraft, BookPatch, Category};

    fn draft(title: &str) -> BookDraft {
        BookDraft {
            title: title.to_string(),
            author: "Author".to_string(),
            isbn: "000".to_string(),
            ..BookDraft::default()
        }
    }

    fn store_with(titles: &[&str]) -> RecordStore<Book> {
        let mut store = RecordStore::new();
        for title in titles {
            store.add(draft(title));
        }
        store
    }

    #[test]
    fn test_add_appends_with_fresh_id() {
        let mut store = RecordStore::<Book>::new();
        let id = store.add(BookDraft {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            isbn: "123".to_string(),
            available: true,
            category: Some(Category::Science),
        });

        assert_eq!(store.len(), 1);
        let book = store.get(id).unwrap();
        assert_eq!(book.id, id);
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Herbert");
        assert_eq!(book.isbn, "123");
        assert!(book.available);
        assert_eq!(book.category, Some(Category::Science));
    }

    #[test]
    fn test_add_preserves_order_new_record_last() {
        let mut store = store_with(&["A", "B"]);
        store.add(draft("C"));

        let titles: Vec<&str> = store.records().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_ids_are_unique_and_never_reused() {
        let mut store = store_with(&["A", "B"]);
        let first_ids: Vec<_> = store.records().iter().map(|b| b.id).collect();
        assert_eq!(first_ids, vec![1, 2]);

        store.delete(2);
        let id = store.add(draft("C"));
        assert_eq!(id, 3);
    }

    #[test]
    fn test_update_merges_in_place_same_position() {
        let mut store = store_with(&["A", "B", "C"]);
        let matched = store.update(2, BookPatch::availability(false));

        assert!(matched);
        assert_eq!(store.len(), 3);
        let titles: Vec<&str> = store.records().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);

        let b = &store.records()[1];
        assert_eq!(b.id, 2);
        assert_eq!(b.title, "B");
        assert!(!b.available);
    }

    #[test]
    fn test_update_absent_id_is_noop() {
        let mut store = store_with(&["A"]);
        let snapshot = store.records().to_vec();

        let matched = store.update(99, BookPatch::availability(false));

        assert!(!matched);
        assert_eq!(store.records(), snapshot.as_slice());
    }

    #[test]
    fn test_delete_preserves_remaining_order() {
        let mut store = store_with(&["A", "B", "C"]);
        assert!(store.delete(2));

        let titles: Vec<&str> = store.records().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = store_with(&["A", "B"]);
        assert!(store.delete(1));
        let snapshot = store.records().to_vec();

        assert!(!store.delete(1));
        assert_eq!(store.records(), snapshot.as_slice());
    }

    #[test]
    fn test_delete_absent_id_is_noop() {
        let mut store = store_with(&["A"]);
        let snapshot = store.records().to_vec();

        assert!(!store.delete(42));
        assert_eq!(store.records(), snapshot.as_slice());
    }

    #[test]
    fn test_cursor_set_without_existence_check() {
        let mut store = store_with(&["A"]);
        store.set_edit_target(99);

        assert_eq!(store.editing_id(), Some(99));
        // Stale cursor resolves to create mode through the derived query.
        assert!(store.edit_target().is_none());
    }

    #[test]
    fn test_edit_target_resolves_cursor() {
        let mut store = store_with(&["A", "B"]);
        store.set_edit_target(2);

        assert_eq!(store.edit_target().unwrap().title, "B");

        store.clear_edit_target();
        assert!(store.edit_target().is_none());
    }

    #[test]
    fn test_delete_leaves_cursor_and_query_goes_stale() {
        let mut store = store_with(&["A"]);
        store.set_edit_target(1);
        store.delete(1);

        // Cursor untouched, derived query recomputes to None.
        assert_eq!(store.editing_id(), Some(1));
        assert!(store.edit_target().is_none());
    }

    #[test]
    fn test_add_leaves_cursor_unchanged() {
        let mut store = store_with(&["A"]);
        store.set_edit_target(1);
        store.add(draft("B"));

        assert_eq!(store.editing_id(), Some(1));
        assert_eq!(store.edit_target().unwrap().title, "A");
    }

    // --- Genericity: the "Item variant" collapsed into one store ---

    #[derive(Debug, Clone, PartialEq)]
    struct Part {
        id: RecordId,
        name: String,
        qty: u32,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct PartDraft {
        name: String,
        qty: u32,
    }

    #[derive(Debug, Clone, Default)]
    struct PartPatch {
        name: Option<String>,
        qty: Option<u32>,
    }

    impl From<PartDraft> for PartPatch {
        fn from(draft: PartDraft) -> Self {
            Self {
                name: Some(draft.name),
                qty: Some(draft.qty),
            }
        }
    }

    impl Record for Part {
        type Draft = PartDraft;
        type Patch = PartPatch;

        fn id(&self) -> RecordId {
            self.id
        }

        fn from_draft(id: RecordId, draft: PartDraft) -> Self {
            Self {
                id,
                name: draft.name,
                qty: draft.qty,
            }
        }

        fn apply(&mut self, patch: PartPatch) {
            if let Some(name) = patch.name {
                self.name = name;
            }
            if let Some(qty) = patch.qty {
                self.qty = qty;
            }
        }

        fn to_draft(&self) -> PartDraft {
            PartDraft {
                name: self.name.clone(),
                qty: self.qty,
            }
        }

        fn label(&self) -> String {
            self.name.clone()
        }

        fn missing_required(draft: &PartDraft) -> Vec<&'static str> {
            if draft.name.trim().is_empty() {
                vec!["name"]
            } else {
                Vec::new()
            }
        }
    }

    #[test]
    fn test_store_works_for_any_record_shape() {
        let mut store = RecordStore::<Part>::new();
        let id = store.add(PartDraft {
            name: "bolt".to_string(),
            qty: 40,
        });

        store.set_edit_target(id);
        assert_eq!(store.edit_target().unwrap().name, "bolt");

        store.update(
            id,
            PartPatch {
                qty: Some(12),
                ..PartPatch::default()
            },
        );
        assert_eq!(store.get(id).unwrap().qty, 12);
        assert_eq!(store.get(id).unwrap().name, "bolt");

        store.delete(id);
        assert!(store.is_empty());
        assert!(store.edit_target().is_none());
    }
}
