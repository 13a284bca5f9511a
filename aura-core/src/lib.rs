//! # Aura Core
//!
//! Document and history engine for the Aura page builder. The UI layer is a
//! thin collaborator: it issues [`Command`]s into an [`EditorSession`] and
//! renders the resulting [`EditorDocument`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               EditorSession                 │
//! ├─────────────────────────────────────────────┤
//! │  History Engine   │  Document Model         │
//! │  - past/future    │  - components           │
//! │  - snapshot policy│  - selection            │
//! │  - 50-step bound  │  - preview flags        │
//! ├─────────────────────────────────────────────┤
//! │  Schema Registry  │  Persistence Gateway    │
//! │  - per-type defs  │  - best-effort save     │
//! │  - defaults       │  - load-or-empty        │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod command;
pub mod component;
pub mod document;
pub mod error;
pub mod history;
pub mod persist;
pub mod schema;
pub mod session;

pub use command::Command;
pub use component::{Component, ComponentId, ComponentType, Position, PropertyValue};
pub use document::{EditorDocument, PreviewMode};
pub use error::{EditorError, EditorResult};
pub use history::{History, MAX_HISTORY};
pub use persist::{FileGateway, MemoryGateway, PersistenceGateway};
pub use schema::{PropertyDef, PropertyDefault, PropertyKind};
pub use session::EditorSession;

/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
