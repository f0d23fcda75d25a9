use cfgconv_ir::{DialectId, Representation};
use thiserror::Error;

/// Errors produced while converting configuration text.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The registry has no rule table for this representation and dialect.
    #[error("representation `{representation}` is not supported for dialect `{dialect}`")]
    UnsupportedCombination {
        dialect: DialectId,
        representation: Representation,
    },
    /// Failed to serialize the tree as XML.
    #[error("failed to write XML: {0}")]
    Xml(#[from] quick_xml::Error),
    /// Serialized XML bytes were not valid UTF-8.
    #[error("serialized XML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    /// Failed to serialize JSON output.
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A pattern composed from configuration values did not compile.
    #[error("failed to compose match pattern: {0}")]
    Pattern(#[from] regex::Error),
}
