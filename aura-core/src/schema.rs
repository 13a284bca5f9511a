//! Static per-type property definitions: allowed keys, value kinds, defaults,
//! and editing metadata.
//!
//! The registry is pure data. It is consulted once at component creation time
//! to seed the full default property set, and by property editors for field
//! metadata. It is not mutable at runtime; adding a component type is a
//! compile-checked change to the exhaustive matches below.

use std::collections::BTreeMap;

use crate::component::{ComponentType, PropertyValue};

/// The kind of value a property holds, with editing constraints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyKind {
    /// Free-form text.
    Text,
    /// A number constrained to a range.
    Number {
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
        /// Editing increment.
        step: f64,
    },
    /// A CSS color string.
    Color,
    /// One of a fixed set of string options.
    Choice(&'static [&'static str]),
}

/// Default value for a property, held as static data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyDefault {
    /// Numeric default.
    Number(f64),
    /// String default.
    Text(&'static str),
}

impl PropertyDefault {
    /// Materialize the default as a runtime value.
    #[must_use]
    pub fn to_value(self) -> PropertyValue {
        match self {
            Self::Number(n) => PropertyValue::Number(n),
            Self::Text(s) => PropertyValue::Text(s.to_string()),
        }
    }
}

/// One property definition: key, display label, kind, and default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyDef {
    /// Property key as stored on the component.
    pub name: &'static str,
    /// Human-readable label for property editors.
    pub label: &'static str,
    /// Value kind and constraints.
    pub kind: PropertyKind,
    /// Default value seeded at creation.
    pub default: PropertyDefault,
}

const FONT_SIZE: PropertyKind = PropertyKind::Number {
    min: 8.0,
    max: 72.0,
    step: 1.0,
};

const BORDER_RADIUS: PropertyKind = PropertyKind::Number {
    min: 0.0,
    max: 100.0,
    step: 1.0,
};

const TEXT_DEFS: &[PropertyDef] = &[
    PropertyDef {
        name: "fontSize",
        label: "Font Size",
        kind: FONT_SIZE,
        default: PropertyDefault::Number(16.0),
    },
    PropertyDef {
        name: "fontWeight",
        label: "Font Weight",
        kind: PropertyKind::Choice(&["400", "700"]),
        default: PropertyDefault::Text("400"),
    },
    PropertyDef {
        name: "color",
        label: "Color",
        kind: PropertyKind::Color,
        default: PropertyDefault::Text("#000000"),
    },
    PropertyDef {
        name: "content",
        label: "Content",
        kind: PropertyKind::Text,
        default: PropertyDefault::Text("Text Component"),
    },
];

const TEXTAREA_DEFS: &[PropertyDef] = &[
    PropertyDef {
        name: "fontSize",
        label: "Font Size",
        kind: FONT_SIZE,
        default: PropertyDefault::Number(14.0),
    },
    PropertyDef {
        name: "color",
        label: "Color",
        kind: PropertyKind::Color,
        default: PropertyDefault::Text("#000000"),
    },
    PropertyDef {
        name: "textAlign",
        label: "Text Align",
        kind: PropertyKind::Choice(&["left", "center", "right"]),
        default: PropertyDefault::Text("left"),
    },
    PropertyDef {
        name: "content",
        label: "Content",
        kind: PropertyKind::Text,
        default: PropertyDefault::Text("TextArea Component"),
    },
];

const IMAGE_DEFS: &[PropertyDef] = &[
    PropertyDef {
        name: "imageUrl",
        label: "Image URL",
        kind: PropertyKind::Text,
        default: PropertyDefault::Text("https://via.placeholder.com/150"),
    },
    PropertyDef {
        name: "altText",
        label: "Alt Text",
        kind: PropertyKind::Text,
        default: PropertyDefault::Text("Image"),
    },
    PropertyDef {
        name: "objectFit",
        label: "Object Fit",
        kind: PropertyKind::Choice(&["cover", "contain", "fill"]),
        default: PropertyDefault::Text("cover"),
    },
    PropertyDef {
        name: "borderRadius",
        label: "Border Radius",
        kind: BORDER_RADIUS,
        default: PropertyDefault::Number(0.0),
    },
    PropertyDef {
        name: "height",
        label: "Height",
        kind: PropertyKind::Number {
            min: 10.0,
            max: 1000.0,
            step: 1.0,
        },
        default: PropertyDefault::Number(150.0),
    },
    PropertyDef {
        name: "width",
        label: "Width",
        kind: PropertyKind::Number {
            min: 10.0,
            max: 1000.0,
            step: 1.0,
        },
        default: PropertyDefault::Number(150.0),
    },
];

const BUTTON_DEFS: &[PropertyDef] = &[
    PropertyDef {
        name: "url",
        label: "URL",
        kind: PropertyKind::Text,
        default: PropertyDefault::Text("#"),
    },
    PropertyDef {
        name: "buttonText",
        label: "Button Text",
        kind: PropertyKind::Text,
        default: PropertyDefault::Text("Button"),
    },
    PropertyDef {
        name: "fontSize",
        label: "Font Size",
        kind: FONT_SIZE,
        default: PropertyDefault::Number(16.0),
    },
    PropertyDef {
        name: "padding",
        label: "Padding",
        kind: PropertyKind::Number {
            min: 0.0,
            max: 50.0,
            step: 1.0,
        },
        default: PropertyDefault::Number(10.0),
    },
    PropertyDef {
        name: "backgroundColor",
        label: "Background Color",
        kind: PropertyKind::Color,
        default: PropertyDefault::Text("#3498db"),
    },
    PropertyDef {
        name: "textColor",
        label: "Text Color",
        kind: PropertyKind::Color,
        default: PropertyDefault::Text("#ffffff"),
    },
    PropertyDef {
        name: "borderRadius",
        label: "Border Radius",
        kind: BORDER_RADIUS,
        default: PropertyDefault::Number(4.0),
    },
];

/// Property definitions for a component type.
#[must_use]
pub fn definitions(kind: ComponentType) -> &'static [PropertyDef] {
    match kind {
        ComponentType::Text => TEXT_DEFS,
        ComponentType::TextArea => TEXTAREA_DEFS,
        ComponentType::Image => IMAGE_DEFS,
        ComponentType::Button => BUTTON_DEFS,
    }
}

/// The full default property map for a component type.
#[must_use]
pub fn default_properties(kind: ComponentType) -> BTreeMap<String, PropertyValue> {
    definitions(kind)
        .iter()
        .map(|def| (def.name.to_string(), def.default.to_value()))
        .collect()
}
