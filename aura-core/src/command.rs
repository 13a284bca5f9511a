//! The command set accepted by the editor core.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::component::{Component, ComponentId, Position, PropertyValue};
use crate::document::{EditorDocument, PreviewMode};

/// A single request to transition the document or the history ledger.
///
/// Commands arrive from the UI layer as tagged values; the serde shape
/// (`type` tag, `payload` content, `UPPER_SNAKE` tags) is the wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    /// Append a component and select it.
    AddComponent(Component),
    /// Merge property changes into a component; no-op on an unknown id.
    UpdateComponent {
        /// Target component.
        id: ComponentId,
        /// Properties to merge; unspecified keys are left untouched.
        properties: BTreeMap<String, PropertyValue>,
    },
    /// Remove a component, clearing the selection if it was selected.
    DeleteComponent(ComponentId),
    /// Replace a component's position; no-op on an unknown id.
    MoveComponent {
        /// Target component.
        id: ComponentId,
        /// New canvas position.
        position: Position,
    },
    /// Set the selection. Existence is not checked; the UI guarantees it.
    SelectComponent(ComponentId),
    /// Clear the selection.
    ClearSelection,
    /// Restore the previous document snapshot, if any.
    Undo,
    /// Reapply the most recently undone snapshot, if any.
    Redo,
    /// Set the preview device mode.
    SetPreviewMode(PreviewMode),
    /// Show or hide the preview overlay.
    TogglePreview(bool),
    /// Replace the whole document.
    LoadState(EditorDocument),
    /// Replace the document with the empty initial state.
    ResetState,
}

impl Command {
    /// Whether this command creates an undo checkpoint.
    ///
    /// Exactly the structural edits: add, update, delete, move. Selection,
    /// preview, load, reset, and the history commands themselves never
    /// snapshot.
    #[must_use]
    pub fn is_trackable(&self) -> bool {
        matches!(
            self,
            Self::AddComponent(_)
                | Self::UpdateComponent { .. }
                | Self::DeleteComponent(_)
                | Self::MoveComponent { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentType;

    #[test]
    fn test_trackable_set() {
        let id = ComponentId::new();
        assert!(Command::AddComponent(Component::new(ComponentType::Text)).is_trackable());
        assert!(Command::UpdateComponent {
            id,
            properties: BTreeMap::new()
        }
        .is_trackable());
        assert!(Command::DeleteComponent(id).is_trackable());
        assert!(Command::MoveComponent {
            id,
            position: Position::new(1.0, 2.0)
        }
        .is_trackable());

        assert!(!Command::SelectComponent(id).is_trackable());
        assert!(!Command::ClearSelection.is_trackable());
        assert!(!Command::Undo.is_trackable());
        assert!(!Command::Redo.is_trackable());
        assert!(!Command::SetPreviewMode(PreviewMode::Mobile).is_trackable());
        assert!(!Command::TogglePreview(true).is_trackable());
        assert!(!Command::LoadState(EditorDocument::default()).is_trackable());
        assert!(!Command::ResetState.is_trackable());
    }

    #[test]
    fn test_wire_tags() {
        let json = serde_json::to_value(Command::ClearSelection).expect("serialize");
        assert_eq!(json["type"], "CLEAR_SELECTION");

        let json = serde_json::to_value(Command::Undo).expect("serialize");
        assert_eq!(json["type"], "UNDO");

        let id = ComponentId::new();
        let json = serde_json::to_value(Command::MoveComponent {
            id,
            position: Position::new(30.0, 40.0),
        })
        .expect("serialize");
        assert_eq!(json["type"], "MOVE_COMPONENT");
        assert_eq!(json["payload"]["position"]["x"], 30.0);
    }

    #[test]
    fn test_command_round_trip() {
        let command = Command::SetPreviewMode(PreviewMode::Mobile);
        let json = serde_json::to_string(&command).expect("serialize");
        let back: Command = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, command);
    }
}
