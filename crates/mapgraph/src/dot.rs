// crates/mapgraph/src/dot.rs

//! Renders a parsed dependency map as a Graphviz DOT digraph.

use crate::error::MapError;
use crate::types::DependencyMap;
use log::warn;
use std::collections::BTreeSet;
use std::io::Write;

/// Options controlling DOT output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotOptions {
    /// Classify referenced symbols by section kind and emit one node-shape
    /// declaration per distinct symbol after the edges: `box` for code,
    /// `circle` for data. When false, only edges are emitted.
    pub classify: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions { classify: true }
    }
}

/// Writes `map` to `out` as a complete DOT digraph.
///
/// One edge line is emitted per dependency, source and target stripped to
/// their symbols, in document order and as soon as each dependency is
/// visited. Under [`DotOptions::classify`], shape declarations for the
/// distinct referenced symbols follow the edges; a dependency is classified
/// by its raw tagged name, so a name carrying both tags is styled as both,
/// and an untagged name is styled as neither.
///
/// # Errors
/// Returns `MapError::Io` if writing fails. Output already written stays
/// written; there is no rollback.
pub fn write_dot<W: Write>(
    map: &DependencyMap,
    options: &DotOptions,
    out: &mut W,
) -> Result<(), MapError> {
    let mut code_symbols = BTreeSet::new();
    let mut data_symbols = BTreeSet::new();

    writeln!(out, "digraph {{")?;

    for file in &map.files {
        for section in &file.sections {
            let source = section.name.symbol();

            for depends in &section.dependencies {
                let target = depends.symbol();
                writeln!(out, "  {} -> {};", source, target)?;

                if options.classify {
                    let mut tagged = false;

                    if depends.is_code() {
                        code_symbols.insert(target.clone());
                        tagged = true;
                    }
                    if depends.is_data() {
                        data_symbols.insert(target.clone());
                        tagged = true;
                    }
                    if !tagged {
                        warn!(
                            "dependency '{}' carries no section tag; left unstyled",
                            depends.as_str()
                        );
                    }
                }
            }
        }
    }

    if options.classify {
        for symbol in &code_symbols {
            writeln!(out, " \"{}\" [shape=box];", symbol)?;
        }
        for symbol in &data_symbols {
            writeln!(out, " \"{}\" [shape=circle];", symbol)?;
        }
    }

    writeln!(out, "}}")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{DotOptions, write_dot};
    use crate::types::{DependencyMap, ObjectFile, Section, TaggedName};

    fn section(name: &str, dependencies: &[&str]) -> Section {
        Section {
            name: TaggedName::new(name),
            dependencies: dependencies.iter().copied().map(TaggedName::new).collect(),
        }
    }

    fn map_of(sections: Vec<Section>) -> DependencyMap {
        DependencyMap {
            files: vec![ObjectFile {
                name: "test.o".to_string(),
                sections,
            }],
        }
    }

    fn render(map: &DependencyMap, options: &DotOptions) -> String {
        let mut out = Vec::new();
        write_dot(map, options, &mut out).expect("rendering should succeed");
        String::from_utf8(out).expect("DOT output is UTF-8")
    }

    #[test]
    fn empty_map_renders_open_and_close_only() {
        let map = DependencyMap::default();
        assert_eq!(render(&map, &DotOptions::default()), "digraph {\n}\n");
    }

    #[test]
    fn renders_classified_sample() {
        let map = map_of(vec![section("foo.text$", &["bar.data$"])]);
        assert_eq!(
            render(&map, &DotOptions::default()),
            "digraph {\n  foo -> bar;\n \"bar\" [shape=circle];\n}\n"
        );
    }

    #[test]
    fn edges_only_variant_omits_shapes() {
        let map = map_of(vec![section("foo.text$", &["bar.data$"])]);
        assert_eq!(
            render(&map, &DotOptions { classify: false }),
            "digraph {\n  foo -> bar;\n}\n"
        );
    }

    #[test]
    fn emits_one_edge_per_dependency() {
        let map = map_of(vec![section(
            "main.text$",
            &["a.text$", "b.text$", "c.data$"],
        )]);
        let output = render(&map, &DotOptions { classify: false });

        let edges: Vec<&str> = output
            .lines()
            .filter(|line| line.contains("->"))
            .collect();
        assert_eq!(
            edges,
            ["  main -> a;", "  main -> b;", "  main -> c;"]
        );
    }

    #[test]
    fn shape_lines_are_deduplicated() {
        let map = map_of(vec![
            section("one.text$", &["shared.text$"]),
            section("two.text$", &["shared.text$"]),
        ]);
        let output = render(&map, &DotOptions::default());

        let shapes: Vec<&str> = output
            .lines()
            .filter(|line| line.contains("shape="))
            .collect();
        assert_eq!(shapes, [" \"shared\" [shape=box];"]);
    }

    #[test]
    fn untagged_dependency_passes_through_unstyled() {
        let map = map_of(vec![section("foo.text$", &["baz"])]);
        let output = render(&map, &DotOptions::default());

        assert!(output.contains("  foo -> baz;\n"));
        assert!(!output.contains("shape="));
    }

    #[test]
    fn zero_dependency_section_contributes_nothing() {
        let map = map_of(vec![section("lonely.data$", &[])]);
        assert_eq!(render(&map, &DotOptions::default()), "digraph {\n}\n");
    }

    #[test]
    fn both_tags_style_as_both() {
        let map = map_of(vec![section("foo.text$", &["odd.text$.data$"])]);
        let output = render(&map, &DotOptions::default());

        assert!(output.contains("  foo -> odd;\n"));
        assert!(output.contains(" \"odd\" [shape=box];\n"));
        assert!(output.contains(" \"odd\" [shape=circle];\n"));
    }
}
