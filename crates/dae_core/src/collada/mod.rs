//! COLLADA 1.4.1 (`.dae`) import.
//!
//! Opening a document validates its namespace and version and indexes the
//! entity libraries. Everything else is imported on request through
//! [`ColladaDocument`].

pub mod document;
mod effect;
pub mod error;
mod mesh_builder;
pub mod parse;
pub mod query;
pub mod registry;
mod sampler;
mod scene_graph;
pub mod xml;

#[cfg(test)]
mod fixtures;

pub use document::{
    open_dae, open_dae_from_string, ColladaDocument, DocumentSummary, COLLADA_NAMESPACE,
    COLLADA_VERSION,
};
pub use error::{ImportError, ImportResult};
pub use mesh_builder::parse_source;
pub use parse::{FromComponents, ValueError};
pub use query::{DocumentQuery, ElementPath, Query};
pub use registry::NameRegistry;
pub use xml::XmlDocument;
