// crates/mapgraph/src/parser.rs

use crate::error::MapError;
use crate::model;
use crate::types::{DependencyMap, ObjectFile, Section, TaggedName};
use log::debug;
use std::fs;
use std::path::Path;

/// Parses a dependency-map XML string into a [`DependencyMap`].
///
/// The whole document is parsed before anything is returned; there is no
/// streaming.
///
/// # Errors
/// Returns a `MapError` if the XML is malformed, a `SECTION` lacks its
/// `name` attribute, or a `DEPENDS` element has no text content.
pub fn parse_map(xml: &str) -> Result<DependencyMap, MapError> {
    // 1. Deserialize the raw XML string into our internal model.
    let map: model::Map = quick_xml::de::from_str(xml)?;

    // 2. Convert to the public types, validating as we go.
    let mut files = Vec::with_capacity(map.file.len());

    for file in map.file {
        let mut sections = Vec::with_capacity(file.section.len());

        for section in file.section {
            let name = section.name.ok_or(MapError::MissingAttribute {
                attribute: "name",
            })?;

            let mut dependencies = Vec::with_capacity(section.depends.len());

            for depends in section.depends {
                let text = depends
                    .text
                    .filter(|text| !text.is_empty())
                    .ok_or_else(|| MapError::MissingDependencyText {
                        section: name.clone(),
                    })?;

                dependencies.push(TaggedName::new(text));
            }

            sections.push(Section {
                name: TaggedName::new(name),
                dependencies,
            });
        }

        files.push(ObjectFile {
            name: file.name.unwrap_or_default(),
            sections,
        });
    }

    let section_count: usize = files.iter().map(|f| f.sections.len()).sum();
    debug!(
        "parsed dependency map: {} file(s), {} section(s)",
        files.len(),
        section_count
    );

    Ok(DependencyMap { files })
}

/// Reads and parses the dependency-map file at `path`.
///
/// # Errors
/// Returns `MapError::Io` if the file cannot be read, plus everything
/// [`parse_map`] can return.
pub fn load_map<P: AsRef<Path>>(path: P) -> Result<DependencyMap, MapError> {
    let xml = fs::read_to_string(path)?;
    parse_map(&xml)
}
