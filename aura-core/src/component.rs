//! Canvas components - the building blocks of a page.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema;

/// Unique identifier for a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentId(Uuid);

impl ComponentId {
    /// Create a new unique component ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ComponentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of placeable component types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComponentType {
    /// A single line of styled text.
    Text,
    /// A multi-line text block.
    TextArea,
    /// An image referenced by URL.
    Image,
    /// A link styled as a button.
    Button,
}

impl ComponentType {
    /// All component types, in palette order.
    pub const ALL: [Self; 4] = [Self::Text, Self::TextArea, Self::Image, Self::Button];
}

/// Canvas-relative position in pixels, origin top-left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Pixels from the left edge.
    pub x: f32,
    /// Pixels from the top edge.
    pub y: f32,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A single property value: a number, or a string (text, color, URL, choice).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Numeric value (sizes, padding, radii).
    Number(f64),
    /// String value (content, colors, URLs, choices).
    Text(String),
}

impl PropertyValue {
    /// The numeric value, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// The string value, if this is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A placed component: immutable identity and type, mutable position and
/// properties.
///
/// Properties are always complete: [`Component::new`] seeds the full default
/// set for the type from the schema registry, so consumers never observe a
/// missing key on a well-formed component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    id: ComponentId,
    #[serde(rename = "type")]
    kind: ComponentType,
    /// Canvas position.
    pub position: Position,
    /// Named property values, keys fixed by the component type.
    pub properties: BTreeMap<String, PropertyValue>,
}

impl Component {
    /// Create a component of the given type with a fresh id, default
    /// position, and the full schema defaults for its properties.
    #[must_use]
    pub fn new(kind: ComponentType) -> Self {
        Self {
            id: ComponentId::new(),
            kind,
            position: Position::default(),
            properties: schema::default_properties(kind),
        }
    }

    /// The component's identifier.
    #[must_use]
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// The component's type.
    #[must_use]
    pub fn kind(&self) -> ComponentType {
        self.kind
    }

    /// Set the position.
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Override a single property on top of the defaults.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Look up a numeric property.
    #[must_use]
    pub fn number(&self, name: &str) -> Option<f64> {
        self.properties.get(name).and_then(PropertyValue::as_number)
    }

    /// Look up a string property.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.properties.get(name).and_then(PropertyValue::as_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_seeds_full_defaults() {
        let component = Component::new(ComponentType::Text);
        assert_eq!(component.number("fontSize"), Some(16.0));
        assert_eq!(component.text("fontWeight"), Some("400"));
        assert_eq!(component.text("color"), Some("#000000"));
        assert_eq!(component.text("content"), Some("Text Component"));
    }

    #[test]
    fn test_with_property_overrides_default() {
        let component =
            Component::new(ComponentType::Button).with_property("buttonText", "Buy now");
        assert_eq!(component.text("buttonText"), Some("Buy now"));
        // Untouched defaults survive the override.
        assert_eq!(component.text("url"), Some("#"));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Component::new(ComponentType::Image);
        let b = Component::new(ComponentType::Image);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_property_value_accessors() {
        assert_eq!(PropertyValue::Number(4.0).as_number(), Some(4.0));
        assert_eq!(PropertyValue::Number(4.0).as_text(), None);
        let text = PropertyValue::from("left");
        assert_eq!(text.as_text(), Some("left"));
        assert_eq!(text.as_number(), None);
    }

    #[test]
    fn test_component_json_shape() {
        let component = Component::new(ComponentType::TextArea);
        let json = serde_json::to_value(&component).expect("serialize");
        assert_eq!(json["type"], "TEXTAREA");
        assert_eq!(json["properties"]["fontSize"], 14.0);
        let back: Component = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, component);
    }
}
