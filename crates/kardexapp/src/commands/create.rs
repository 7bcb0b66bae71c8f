use crate::commands::{CmdMessage, CmdResult};
use crate::model::Record;
use crate::store::RecordStore;

/// Raw add: assigns a fresh id and appends. No validation happens here;
/// the validated path is [`submit`](crate::commands::submit).
pub fn run<R: Record>(store: &mut RecordStore<R>, draft: R::Draft) -> CmdResult<R> {
    let id = store.add(draft);

    let mut result = CmdResult::default();
    if let Some(record) = store.get(id) {
        result.add_message(CmdMessage::success(format!("Added: {}", record.label())));
        result.affected.push(record.clone());
    }
    result
}
