//! Rule-table driven conversion of network device configuration text.
//!
//! One engine serves every dialect: each vendor is a declarative
//! [`DialectProfile`] (ordered line rules, a path policy, tree rules) looked
//! up in a [`Registry`]. The engine turns text into:
//! - a template with `{{ name }}` placeholders ([`Registry::template`])
//! - a structured tree ([`Registry::tree`], serialized as XML or JSON)
//! - a flat record of the original lines
//!
//! Primary entrypoints:
//! - [`convert`]
//! - [`detect`]
//! - [`Registry`]
//!
//! # Example
//!
//! ```rust
//! use cfgconv_engine::{ConvertOptions, convert};
//! use cfgconv_ir::{DialectId, Representation};
//!
//! let cfg = "hostname edge-1\ninterface Gi0/1\n ip address 10.0.0.1 255.255.255.0\n";
//! let out = convert(cfg, DialectId::Ios, &ConvertOptions::new(Representation::Template)).unwrap();
//! assert_eq!(
//!     out,
//!     "hostname {{ hostname }}\ninterface {{ Gi0_1 }}\n ip address {{ ip_address }} {{ subnet_mask }}\n"
//! );
//! ```

mod classify;
mod detect;
pub mod dialects;
mod error;
mod extract;
mod format;
mod registry;
pub mod rules;
mod template;
mod tree;

use cfgconv_ir::{DialectId, Representation};
use serde::{Deserialize, Serialize};

pub use classify::{Classified, classify_line, is_comment, section_header};
pub use detect::{DetectionResult, detect};
pub use error::ConvertError;
pub use extract::{placeholder_name, render_placeholder};
pub use format::{flat_record, serialize_tree, tree_to_xml};
pub use registry::{CompiledProfile, CompiledRule, Registry};
pub use rules::{DialectProfile, LineClass};

/// Serialization used for the tree representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeFormat {
    #[default]
    Xml,
    Json,
}

/// Options controlling what a conversion produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub representation: Representation,
    pub tree_format: TreeFormat,
}

impl ConvertOptions {
    /// Options for `representation` with default serialization.
    pub fn new(representation: Representation) -> Self {
        Self {
            representation,
            tree_format: TreeFormat::default(),
        }
    }

    /// Override how trees are serialized.
    pub fn with_tree_format(mut self, tree_format: TreeFormat) -> Self {
        self.tree_format = tree_format;
        self
    }
}

/// Convert `input` with the built-in registry.
pub fn convert(
    input: &str,
    dialect: DialectId,
    options: &ConvertOptions,
) -> Result<String, ConvertError> {
    Registry::builtin().convert(input, dialect, options)
}
