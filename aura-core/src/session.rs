//! The editor session: one document, one history ledger, one gateway.
//!
//! The session is the command pipeline's single entry point. Each dispatched
//! command runs to completion - history bookkeeping, document transition,
//! then gateway notification - before the next is accepted. All state is
//! owned here, so multiple independent sessions can coexist in one process.

use crate::command::Command;
use crate::document::EditorDocument;
use crate::history::History;
use crate::persist::PersistenceGateway;

/// An editing session over a single document.
pub struct EditorSession {
    document: EditorDocument,
    history: History,
    gateway: Option<Box<dyn PersistenceGateway>>,
}

impl EditorSession {
    /// Create a session with an empty document and no persistence.
    #[must_use]
    pub fn new() -> Self {
        Self {
            document: EditorDocument::new(),
            history: History::new(),
            gateway: None,
        }
    }

    /// Create a session restored from a persistence gateway.
    ///
    /// Absent or malformed stored bytes fall back to the empty document; the
    /// failure is logged, never surfaced. History always starts empty.
    #[must_use]
    pub fn with_gateway(gateway: Box<dyn PersistenceGateway>) -> Self {
        let document = match gateway.load() {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(document) => document,
                Err(e) => {
                    tracing::warn!("Discarding malformed persisted document: {e}");
                    EditorDocument::new()
                }
            },
            Ok(None) => EditorDocument::new(),
            Err(e) => {
                tracing::warn!("Failed to load persisted document: {e}");
                EditorDocument::new()
            }
        };
        Self {
            document,
            history: History::new(),
            gateway: Some(gateway),
        }
    }

    /// Dispatch a command through the pipeline.
    ///
    /// Undo and redo replay stored snapshots; trackable commands snapshot
    /// the pre-command document first; everything else passes straight
    /// through to the document. Every committed command notifies the
    /// gateway with the post-command document.
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::Undo => {
                if let Some(snapshot) = self.history.undo(&self.document) {
                    self.document.apply(Command::LoadState(snapshot));
                }
            }
            Command::Redo => {
                if let Some(snapshot) = self.history.redo(&self.document) {
                    self.document.apply(Command::LoadState(snapshot));
                }
            }
            command => {
                if command.is_trackable() {
                    self.history.record(self.document.clone());
                }
                self.document.apply(command);
            }
        }
        self.persist();
    }

    /// The current document.
    #[must_use]
    pub fn document(&self) -> &EditorDocument {
        &self.document
    }

    /// The undo/redo ledger.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Save the current document through the gateway, best effort.
    ///
    /// No-op without a gateway. Failures are logged and swallowed; the
    /// in-memory state is already committed and editing continues.
    fn persist(&self) {
        let Some(ref gateway) = self.gateway else {
            return;
        };
        let bytes = match serde_json::to_vec(&self.document) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Failed to serialize document for save: {e}");
                return;
            }
        };
        if let Err(e) = gateway.save(&bytes) {
            tracing::warn!("Failed to save document: {e}");
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
