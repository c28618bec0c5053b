//! Argument files: a template and its arguments stored as TOML
//!
//! ```toml
//! template = "{0} has {1:x} items"
//! args = ["box", 255]
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::store::ArgumentStore;
use crate::value::Value;

/// Errors that can occur when loading or parsing argument files
#[derive(Error, Debug)]
pub enum ArgumentFileError {
    #[error("Failed to read argument file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse argument file TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Contents of an argument file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArgumentFile {
    /// Template to format, if the file carries one
    pub template: Option<String>,
    /// Arguments in index order
    #[serde(default)]
    pub args: Vec<Value>,
}

impl ArgumentFile {
    /// Load an argument file from disk
    pub fn from_file(path: &Path) -> Result<Self, ArgumentFileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load an argument file from TOML text
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ArgumentFileError> {
        Ok(toml::from_str(content)?)
    }

    /// Borrow the arguments as a store
    pub fn store(&self) -> ArgumentStore<'_> {
        self.args.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_template_and_args() {
        let file = ArgumentFile::from_str(
            r#"
template = "{0} has {1:x} items"
args = ["box", 255, 2.5, true]
"#,
        )
        .unwrap();
        assert_eq!(file.template.as_deref(), Some("{0} has {1:x} items"));
        assert_eq!(
            file.args,
            vec![
                Value::Text("box".to_string()),
                Value::Int(255),
                Value::Float(2.5),
                Value::Bool(true),
            ]
        );
        assert_eq!(file.store().len(), 4);
    }

    #[test]
    fn test_args_default_to_empty() {
        let file = ArgumentFile::from_str(r#"template = "plain""#).unwrap();
        assert!(file.args.is_empty());
        assert!(file.store().is_empty());
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(ArgumentFile::from_str("").unwrap(), ArgumentFile::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = ArgumentFile::from_str("colour = 1");
        assert!(matches!(result, Err(ArgumentFileError::ParseError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = ArgumentFile::from_file(Path::new("/nonexistent/args.toml"));
        assert!(matches!(result, Err(ArgumentFileError::IoError(_))));
    }
}
