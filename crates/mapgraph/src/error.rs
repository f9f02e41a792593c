// crates/mapgraph/src/error.rs

use quick_xml::errors::serialize::DeError;
use std::error::Error;
use std::fmt;
use std::io;

/// Errors that can occur while loading a dependency map or writing DOT output.
#[derive(Debug)]
pub enum MapError {
    /// An error from the underlying `quick-xml` deserializer.
    XmlParsing(DeError),

    /// An I/O error while reading the map file or writing the graph.
    Io(io::Error),

    /// A required attribute was missing (e.g., `SECTION@name`).
    MissingAttribute { attribute: &'static str },

    /// A `DEPENDS` element had no text content.
    MissingDependencyText { section: String },
}

impl From<DeError> for MapError {
    fn from(e: DeError) -> Self {
        MapError::XmlParsing(e)
    }
}

impl From<io::Error> for MapError {
    fn from(e: io::Error) -> Self {
        MapError::Io(e)
    }
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            MapError::Io(e) => write!(f, "I/O error: {}", e),
            MapError::MissingAttribute { attribute } => {
                write!(f, "Missing required attribute: {}", attribute)
            }
            MapError::MissingDependencyText { section } => {
                write!(f, "Empty DEPENDS element in section '{}'", section)
            }
        }
    }
}

impl Error for MapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MapError::XmlParsing(e) => Some(e),
            MapError::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MapError;
    use std::io;

    #[test]
    fn test_from_de_error() {
        // Create a dummy DeError by failing to parse
        let xml_err = quick_xml::de::from_str::<()>("invalid xml").unwrap_err();
        let map_err: MapError = xml_err.into();
        assert!(matches!(map_err, MapError::XmlParsing(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let map_err: MapError = io_err.into();
        assert!(matches!(map_err, MapError::Io(_)));
    }

    #[test]
    fn test_missing_attribute_display() {
        let map_err = MapError::MissingAttribute { attribute: "name" };
        assert_eq!(map_err.to_string(), "Missing required attribute: name");
    }

    #[test]
    fn test_missing_dependency_text_display() {
        let map_err = MapError::MissingDependencyText {
            section: "foo.text$".to_string(),
        };
        assert_eq!(
            map_err.to_string(),
            "Empty DEPENDS element in section 'foo.text$'"
        );
    }
}
