use serde::Serialize;

use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

/// Serializes the collection snapshot to pretty JSON for copy/paste.
/// Stdout-only by design; the catalog itself never persists.
pub fn run<R: Record + Serialize>(store: &RecordStore<R>) -> Result<CmdResult<R>> {
    let mut result = CmdResult::default();
    result.payload = Some(serde_json::to_string_pretty(store.records())?);
    Ok(result)
}
