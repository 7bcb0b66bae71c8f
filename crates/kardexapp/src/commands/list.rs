use crate::commands::{CmdMessage, CmdResult};
use crate::model::Record;
use crate::store::RecordStore;

/// Collection snapshot in insertion order, with an empty-state hint.
pub fn run<R: Record>(store: &RecordStore<R>) -> CmdResult<R> {
    let mut result = CmdResult::default().with_listed(store.records().to_vec());
    if result.listed.is_empty() {
        result.add_message(CmdMessage::info("Nothing in the catalog yet"));
        result.add_message(CmdMessage::info("Add the first record with `add`"));
    }
    result
}
