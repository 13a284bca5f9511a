//! # Aura Export
//!
//! Deterministic static HTML export for Aura documents. Takes the ordered
//! component list from `aura-core` and produces a self-contained HTML
//! document - inline styles per element, one shared style block, no external
//! references - in the requested layout variant.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod html;

pub use error::{ExportError, ExportResult};
pub use html::{export_html, ExportVariant};
