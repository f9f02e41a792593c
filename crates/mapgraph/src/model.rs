// crates/mapgraph/src/model.rs

//! Internal `serde` data structures that map directly to the dependency-map
//! XML schema. These are used for raw deserialization only.

use serde::Deserialize;

/// The root `<MAP>` element of a dependency-map dump.
#[derive(Debug, Deserialize)]
#[serde(rename = "MAP")]
pub struct Map {
    #[serde(rename = "FILE", default)]
    pub file: Vec<File>,
}

/// Represents one `<FILE>` element (an object file).
#[derive(Debug, Deserialize)]
pub struct File {
    /// `@name` (e.g., "main.o"). The producer always writes it, but nothing
    /// in the conversion reads it, so absence is tolerated.
    #[serde(rename = "@name", default)]
    pub name: Option<String>,

    #[serde(rename = "SECTION", default)]
    pub section: Vec<Section>,
}

/// Represents one `<SECTION>` element (a code or data section).
#[derive(Debug, Deserialize)]
pub struct Section {
    /// `@name`, a tagged section name (e.g., "foo.text$"). Required; modeled
    /// as `Option` so the parser can reject its absence with a `MapError`
    /// instead of a deserializer error.
    #[serde(rename = "@name", default)]
    pub name: Option<String>,

    /// `@color`, a traversal mark written by the producer. Unused.
    #[serde(rename = "@color", default)]
    pub color: Option<String>,

    #[serde(rename = "DEPENDS", default)]
    pub depends: Vec<Depends>,
}

/// Represents one `<DEPENDS>` element. Its text content is a tagged symbol
/// name (e.g., "bar.data$") and is required to be non-empty.
#[derive(Debug, Deserialize)]
pub struct Depends {
    #[serde(rename = "$text", default)]
    pub text: Option<String>,
}
