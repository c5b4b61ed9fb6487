//! Small acknowledgement bodies shared by handlers.

use boxlog_core::types::DbId;
use serde::Serialize;

/// `{ "ok": true }`, returned by deletes whether or not a row existed.
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// `{ "id": N, "ok": true }`, returned when a child record is created.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DbId,
    pub ok: bool,
}

impl CreatedResponse {
    pub fn new(id: DbId) -> Self {
        Self { id, ok: true }
    }
}
