//! Two-step deletes: a request records what is about to be removed and hands
//! back a token plus the question to show the user; only confirming that
//! token releases the target to the caller, which then issues the delete.

use crate::error::{Result, TariqError};
use crate::types::Table;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTarget {
    pub table: Table,
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingDelete {
    pub token: String,
    pub target: DeleteTarget,
    /// Text of the record at request time, for the confirmation dialog.
    pub label: String,
    pub prompt: String,
    pub requested_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct DeleteRequests {
    pending: HashMap<String, PendingDelete>,
}

impl DeleteRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step one. A second request for the same record replaces the first.
    pub fn request(&mut self, table: Table, id: &str, label: &str) -> PendingDelete {
        self.pending
            .retain(|_, p| !(p.target.table == table && p.target.id == id));

        let pending = PendingDelete {
            token: uuid::Uuid::new_v4().to_string(),
            target: DeleteTarget {
                table,
                id: id.to_string(),
            },
            label: label.to_string(),
            prompt: table.delete_prompt().to_string(),
            requested_at: Utc::now(),
        };
        self.pending.insert(pending.token.clone(), pending.clone());
        pending
    }

    /// Step two. Consumes the request; the caller performs the delete.
    pub fn confirm(&mut self, token: &str) -> Result<DeleteTarget> {
        self.pending
            .remove(token)
            .map(|p| p.target)
            .ok_or_else(|| TariqError::DeleteRequestNotFound(token.to_string()))
    }

    pub fn cancel(&mut self, token: &str) -> Result<()> {
        self.pending
            .remove(token)
            .map(|_| ())
            .ok_or_else(|| TariqError::DeleteRequestNotFound(token.to_string()))
    }

    pub fn get(&self, token: &str) -> Option<&PendingDelete> {
        self.pending.get(token)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
