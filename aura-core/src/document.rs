//! The editable canvas state and its transition functions.

use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::component::{Component, ComponentId, Position, PropertyValue};
use crate::error::EditorResult;

/// Preview device mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PreviewMode {
    /// Full-width desktop layout.
    #[default]
    Desktop,
    /// Narrow 350px mobile layout.
    Mobile,
}

/// The canvas document: ordered components, selection, and preview flags.
///
/// Component order is insertion order and paint order (later is on top).
/// Every transition is total: unknown ids are no-ops, never errors, so the
/// UI may race a delete against an in-flight edit without harm.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorDocument {
    /// Placed components in insertion/paint order.
    pub components: Vec<Component>,
    /// Currently selected component, if any. Always names an existing
    /// component; deleting the selected component clears it atomically.
    pub selected_component_id: Option<ComponentId>,
    /// Preview device mode.
    pub preview_mode: PreviewMode,
    /// Whether the preview overlay is shown. Does not affect export content.
    pub is_preview_visible: bool,
}

impl EditorDocument {
    /// Create the empty initial document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a component and select it.
    pub fn add_component(&mut self, component: Component) {
        self.selected_component_id = Some(component.id());
        self.components.push(component);
    }

    /// Merge property changes into the named component, leaving unspecified
    /// properties untouched. No-op if the id is unknown.
    pub fn update_component(
        &mut self,
        id: ComponentId,
        properties: impl IntoIterator<Item = (String, PropertyValue)>,
    ) {
        if let Some(component) = self.components.iter_mut().find(|c| c.id() == id) {
            component.properties.extend(properties);
        }
    }

    /// Replace the named component's position. No-op if the id is unknown.
    pub fn move_component(&mut self, id: ComponentId, position: Position) {
        if let Some(component) = self.components.iter_mut().find(|c| c.id() == id) {
            component.position = position;
        }
    }

    /// Remove the named component. If it was selected, the selection is
    /// cleared in the same transition.
    pub fn delete_component(&mut self, id: ComponentId) {
        self.components.retain(|c| c.id() != id);
        if self.selected_component_id == Some(id) {
            self.selected_component_id = None;
        }
    }

    /// Set the selection.
    pub fn select_component(&mut self, id: ComponentId) {
        self.selected_component_id = Some(id);
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected_component_id = None;
    }

    /// Set the preview device mode.
    pub fn set_preview_mode(&mut self, mode: PreviewMode) {
        self.preview_mode = mode;
    }

    /// Show or hide the preview overlay.
    pub fn set_preview_visible(&mut self, visible: bool) {
        self.is_preview_visible = visible;
    }

    /// Apply a command to this document.
    ///
    /// `Undo` and `Redo` pass through untouched here; they are interpreted by
    /// the session, which turns them into a `LoadState` of a stored snapshot.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::AddComponent(component) => self.add_component(component),
            Command::UpdateComponent { id, properties } => self.update_component(id, properties),
            Command::DeleteComponent(id) => self.delete_component(id),
            Command::MoveComponent { id, position } => self.move_component(id, position),
            Command::SelectComponent(id) => self.select_component(id),
            Command::ClearSelection => self.clear_selection(),
            Command::SetPreviewMode(mode) => self.set_preview_mode(mode),
            Command::TogglePreview(visible) => self.set_preview_visible(visible),
            Command::LoadState(document) => *self = document,
            Command::ResetState => *self = Self::default(),
            Command::Undo | Command::Redo => {}
        }
    }

    /// Get a component by id.
    #[must_use]
    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| c.id() == id)
    }

    /// The currently selected component, if any.
    #[must_use]
    pub fn selected_component(&self) -> Option<&Component> {
        self.selected_component_id.and_then(|id| self.component(id))
    }

    /// The number of placed components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Whether the document has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Serialize the document to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> EditorResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize a document from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> EditorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
