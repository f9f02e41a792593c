// crates/mapgraph/src/lib.rs

//! Parses DeadStrip dependency-map XML dumps and renders them as Graphviz
//! DOT graphs.
//!
//! A dependency map describes, per object file, the sections the linker saw
//! and which other sections each one references. Section names carry a kind
//! tag ([`TEXT_TAG`] for code, [`DATA_TAG`] for data); stripping the tag
//! yields the symbol used for graph nodes.
//!
//! It supports:
//! - [`parse_map`] / [`load_map`]: parsing a map document into a
//!   [`DependencyMap`].
//! - [`write_dot`]: rendering the map as a DOT digraph, optionally with
//!   per-kind node shapes (see [`DotOptions`]).

// --- Crate Modules ---

mod dot;
mod error;
mod model;
mod parser;
mod types;

// --- Public API Re-exports ---

pub use dot::{DotOptions, write_dot};
pub use error::MapError;
pub use parser::{load_map, parse_map};
pub use types::{
    DATA_TAG, DependencyMap, ObjectFile, Section, SectionKind, TEXT_TAG, TaggedName,
};
