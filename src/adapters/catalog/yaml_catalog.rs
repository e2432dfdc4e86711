//! YAML catalog source.
//!
//! Lets a deployment override the built-in question set with a YAML
//! document, validated on load exactly like the built-in catalog.

use std::path::Path;

use crate::domain::assessment::validate_allocation_table;
use crate::domain::catalog::QuestionCatalog;
use crate::ports::{CatalogError, CatalogSource};

/// Catalog source that parses a YAML document.
#[derive(Debug, Clone)]
pub struct YamlCatalogSource {
    document: String,
}

impl YamlCatalogSource {
    /// Creates a source from a YAML document already in memory.
    pub fn from_document(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }

    /// Creates a source by reading a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let document = std::fs::read_to_string(path.as_ref())
            .map_err(|e| CatalogError::Io(e.to_string()))?;
        Ok(Self { document })
    }
}

impl CatalogSource for YamlCatalogSource {
    fn load(&self) -> Result<QuestionCatalog, CatalogError> {
        let catalog: QuestionCatalog = serde_yaml::from_str(&self.document)
            .map_err(|e| CatalogError::Parse(e.to_string()))?;
        catalog.validate()?;
        validate_allocation_table()?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL_CATALOG: &str = r#"
version: "test.1"
capacity:
  - id: cap_horizon
    dimension: capacity
    weight: 2
    options:
      - { value: 1, label: "Under 2 years" }
      - { value: 3, label: "5-10 years" }
      - { value: 5, label: "Over 20 years" }
willingness:
  - id: will_swings
    dimension: willingness
    options:
      - { value: 1, label: "No swings" }
      - { value: 5, label: "Any swings" }
bias:
  - id: bias_recency
    dimension: bias
    bias_kind: recency_bias
    options:
      - { value: 1, label: "Strongly disagree" }
      - { value: 5, label: "Strongly agree" }
"#;

    #[test]
    fn parses_and_validates_a_minimal_catalog() {
        let catalog = YamlCatalogSource::from_document(MINIMAL_CATALOG).load().unwrap();
        assert_eq!(catalog.version.as_str(), "test.1");
        assert_eq!(catalog.capacity[0].weight.value(), 2);
        assert_eq!(catalog.willingness[0].weight.value(), 1);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = YamlCatalogSource::from_document("version: [unclosed")
            .load()
            .unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn structurally_invalid_catalog_is_rejected() {
        // Well-formed YAML, but the willingness set is empty.
        let document = r#"
version: "test.1"
capacity:
  - id: cap_horizon
    dimension: capacity
    options:
      - { value: 3, label: "Mid" }
willingness: []
bias:
  - id: bias_recency
    dimension: bias
    bias_kind: recency_bias
    options:
      - { value: 3, label: "Neutral" }
"#;
        let err = YamlCatalogSource::from_document(document).load().unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
    }

    #[test]
    fn out_of_range_answer_value_is_a_parse_error() {
        let document = r#"
version: "test.1"
capacity:
  - id: cap_horizon
    dimension: capacity
    options:
      - { value: 7, label: "Impossible" }
willingness: []
bias: []
"#;
        let err = YamlCatalogSource::from_document(document).load().unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn loads_from_a_file_on_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL_CATALOG.as_bytes()).unwrap();

        let catalog = YamlCatalogSource::from_path(file.path())
            .unwrap()
            .load()
            .unwrap();
        assert_eq!(catalog.version.as_str(), "test.1");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = YamlCatalogSource::from_path("/nonexistent/catalog.yaml").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
