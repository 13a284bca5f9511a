//! Error types for export operations.

use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Why a single component could not be rendered.
///
/// These never abort an export; the serializer emits a placeholder for the
/// failing component and continues with the rest.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A property the component type requires is absent.
    #[error("Component {component}: missing property '{name}'")]
    MissingProperty {
        /// Id of the failing component.
        component: String,
        /// Name of the absent property.
        name: String,
    },

    /// A required property holds the wrong kind of value.
    #[error("Component {component}: property '{name}' has the wrong kind")]
    InvalidProperty {
        /// Id of the failing component.
        component: String,
        /// Name of the mistyped property.
        name: String,
    },
}
