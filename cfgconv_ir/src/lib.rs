//! Data model for converting network device configuration text.
//!
//! This crate provides:
//! - dialect and representation identifiers (`DialectId`, `Representation`)
//! - a lossless line splitter (`split_lines`) producing [`ConfigLine`] values
//! - the output models: [`TemplateDocument`], [`ConfigTree`], [`FlatRecord`]
//!
//! Nothing here knows about vendor syntax; rule tables live in
//! `cfgconv_engine`.
//!
//! # Example
//!
//! ```rust
//! use cfgconv_ir::split_lines;
//!
//! let input = "hostname edge-1\r\n!\ninterface Ethernet1";
//! let lines = split_lines(input);
//! assert_eq!(lines.len(), 3);
//! let rebuilt: String = lines.iter().map(|l| format!("{}{}", l.raw, l.line_ending)).collect();
//! assert_eq!(rebuilt, input);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vendor configuration dialect understood by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectId {
    Ios,
    Iosxr,
    Eos,
    Junos,
    Sros,
    Mikrotik,
}

impl DialectId {
    /// Every built-in dialect, in registry order.
    pub const ALL: [DialectId; 6] = [
        DialectId::Ios,
        DialectId::Iosxr,
        DialectId::Eos,
        DialectId::Junos,
        DialectId::Sros,
        DialectId::Mikrotik,
    ];

    /// Short lowercase tag used in flat records and tree root names.
    pub fn tag(self) -> &'static str {
        match self {
            DialectId::Ios => "ios",
            DialectId::Iosxr => "iosxr",
            DialectId::Eos => "eos",
            DialectId::Junos => "junos",
            DialectId::Sros => "sros",
            DialectId::Mikrotik => "mikrotik",
        }
    }

    /// Root element name of the tree representation.
    pub fn root_tag(self) -> String {
        format!("{}_configuration", self.tag())
    }
}

impl fmt::Display for DialectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when a dialect or representation name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownName {
    pub kind: &'static str,
    pub name: String,
}

impl fmt::Display for UnknownName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} `{}`", self.kind, self.name)
    }
}

impl std::error::Error for UnknownName {}

impl FromStr for DialectId {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" | "cisco" => Ok(DialectId::Ios),
            "iosxr" | "ios-xr" => Ok(DialectId::Iosxr),
            "eos" | "arista" => Ok(DialectId::Eos),
            "junos" | "juniper" => Ok(DialectId::Junos),
            "sros" | "nokia" => Ok(DialectId::Sros),
            "mikrotik" | "routeros" => Ok(DialectId::Mikrotik),
            _ => Err(UnknownName {
                kind: "dialect",
                name: s.to_string(),
            }),
        }
    }
}

/// Output representation produced by a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Representation {
    Template,
    Tree,
    FlatRecord,
}

impl Representation {
    pub fn name(self) -> &'static str {
        match self {
            Representation::Template => "template",
            Representation::Tree => "tree",
            Representation::FlatRecord => "flat-record",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Representation {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "template" | "jinja2" => Ok(Representation::Template),
            "tree" | "xml" => Ok(Representation::Tree),
            "flat-record" | "flat" | "json" => Ok(Representation::FlatRecord),
            _ => Err(UnknownName {
                kind: "representation",
                name: s.to_string(),
            }),
        }
    }
}

/// Source span pointing to a single line and byte range in the original input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub line: usize,
    pub start_byte: usize,
    pub end_byte: usize,
}

/// One raw input line with its original line ending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigLine {
    /// Zero-based position in the source.
    pub index: usize,
    pub raw: String,
    pub line_ending: String,
    pub span: Span,
}

impl ConfigLine {
    /// True when the line holds only whitespace.
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

/// Split input into lines without dropping or altering any byte.
///
/// `\n` and `\r\n` endings are recognized; a final line without a newline is
/// kept, and a trailing newline does not produce an extra empty line.
pub fn split_lines(input: &str) -> Vec<ConfigLine> {
    let mut out = Vec::new();
    let mut start = 0usize;

    while start < input.len() {
        let next_lf = input[start..].find('\n').map(|idx| start + idx);
        let (segment, next_start) = if let Some(lf_idx) = next_lf {
            (&input[start..=lf_idx], lf_idx + 1)
        } else {
            (&input[start..], input.len())
        };

        let (raw, line_ending) = split_line_ending(segment);
        let index = out.len();
        out.push(ConfigLine {
            index,
            raw: raw.to_string(),
            line_ending: line_ending.to_string(),
            // Spans cover the content bytes only (not trailing newline bytes).
            span: Span {
                line: index + 1,
                start_byte: start,
                end_byte: start + raw.len(),
            },
        });

        start = next_start;
    }

    out
}

fn split_line_ending(segment: &str) -> (&str, &str) {
    if let Some(raw) = segment.strip_suffix("\r\n") {
        (raw, "\r\n")
    } else if let Some(raw) = segment.strip_suffix('\n') {
        (raw, "\n")
    } else {
        (segment, "")
    }
}

/// One rendered template line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateLine {
    pub index: usize,
    pub text: String,
    pub line_ending: String,
    /// Placeholder names substituted into this line, left to right.
    pub placeholders: Vec<String>,
}

impl TemplateLine {
    /// Line emitted unchanged from the source.
    pub fn verbatim(index: usize, text: impl Into<String>, line_ending: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
            line_ending: line_ending.into(),
            placeholders: Vec::new(),
        }
    }

    pub fn is_verbatim(&self) -> bool {
        self.placeholders.is_empty()
    }
}

/// Ordered template output mirroring the input line sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDocument {
    pub dialect: DialectId,
    pub lines: Vec<TemplateLine>,
}

impl TemplateDocument {
    /// Render the template, reusing each source line's original ending.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.text);
            out.push_str(&line.line_ending);
        }
        out
    }

    /// Distinct placeholder names in first-use order.
    pub fn variables(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for name in self.lines.iter().flat_map(|line| &line.placeholders) {
            if !seen.contains(&name.as_str()) {
                seen.push(name.as_str());
            }
        }
        seen
    }
}

impl fmt::Display for TemplateDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Device identity found in the configuration, keyed by its element name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemField {
    Hostname(String),
    Name(String),
}

impl SystemField {
    pub fn tag(&self) -> &'static str {
        match self {
            SystemField::Hostname(_) => "hostname",
            SystemField::Name(_) => "name",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            SystemField::Hostname(value) | SystemField::Name(value) => value,
        }
    }
}

/// One interface (or interface unit) with the attributes bound to it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_mask: Option<String>,
}

impl Entry {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Structured, vendor-tagged view of a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigTree {
    pub dialect: DialectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemField>,
    pub interfaces: Vec<Entry>,
    /// Addresses listed independently of any entry (RouterOS `/ip address`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
}

impl ConfigTree {
    pub fn new(dialect: DialectId) -> Self {
        Self {
            dialect,
            system: None,
            interfaces: Vec::new(),
            addresses: None,
        }
    }

    /// Find an entry by name (first match).
    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.interfaces.iter().find(|entry| entry.name == name)
    }
}

/// Untransformed line list tagged with the dialect name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRecord {
    pub os_type: String,
    pub config: Vec<String>,
}

impl FlatRecord {
    pub fn from_lines(dialect: DialectId, lines: &[ConfigLine]) -> Self {
        Self {
            os_type: dialect.tag().to_string(),
            config: lines.iter().map(|line| line.raw.clone()).collect(),
        }
    }
}
