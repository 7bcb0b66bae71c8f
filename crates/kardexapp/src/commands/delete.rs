use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Record, RecordId};
use crate::store::RecordStore;

/// Removes the matching record. The cursor is not touched here: if it
/// pointed at the deleted record, the derived query degrades the form to
/// create mode on its next read.
pub fn run<R: Record>(store: &mut RecordStore<R>, id: RecordId) -> CmdResult<R> {
    let mut result = CmdResult::default();
    match store.get(id).cloned() {
        Some(record) => {
            store.delete(id);
            result.add_message(CmdMessage::success(format!("Deleted: {}", record.label())));
            result.affected.push(record);
        }
        None => {
            result.add_message(CmdMessage::warning(format!(
                "No record with id {id}; nothing deleted"
            )));
        }
    }
    result
}
