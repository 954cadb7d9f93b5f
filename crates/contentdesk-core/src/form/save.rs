//! Save boundary
//!
//! Forms hand their drafts to a [`SaveBoundary`]. No content API exists in
//! this application, so [`LoggingSave`] stands in for one.

use super::draft::{Entity, EntityDraft};
use super::kinds::EntityKind;
use crate::error::ContentResult;

/// Persists a submitted draft
pub trait SaveBoundary {
    fn save(&mut self, kind: EntityKind, draft: &EntityDraft) -> ContentResult<Entity>;
}

/// Logs each submission and echoes the draft back as the saved entity
#[derive(Debug, Clone, Default)]
pub struct LoggingSave {
    submissions: usize,
}

impl LoggingSave {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of drafts received so far
    pub fn submissions(&self) -> usize {
        self.submissions
    }
}

impl SaveBoundary for LoggingSave {
    fn save(&mut self, kind: EntityKind, draft: &EntityDraft) -> ContentResult<Entity> {
        let entity = draft.to_entity();
        self.submissions += 1;
        tracing::info!(kind = %kind, draft = %entity, "{} form submitted", kind);
        Ok(entity)
    }
}
