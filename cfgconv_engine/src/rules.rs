//! Declarative rule tables describing one dialect.
//!
//! Everything here is plain `'static` data so a dialect profile can be a
//! `static` item. Patterns are compiled once by [`crate::Registry`].

use cfgconv_ir::DialectId;
use serde::Serialize;

/// Category assigned to a line by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineClass {
    Comment,
    Hostname,
    Entry,
    Address,
    Passthrough,
}

/// How a captured value becomes a placeholder name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Always the given name; the literal value is discarded.
    Fixed(&'static str),
    /// Name derived from the captured text (see [`crate::placeholder_name`]).
    Derived,
}

/// Rewrite applied to a matched line in template mode.
#[derive(Debug, Clone, Copy)]
pub enum Rewrite {
    /// Replace each named capture group with its placeholder.
    Captures(&'static [(&'static str, Placeholder)]),
    /// Rewrite the `path` capture group segment by segment.
    Path(&'static PathPolicy),
}

/// One template rule. Rules are tried in table order; the first match wins.
#[derive(Debug, Clone, Copy)]
pub struct LineRule {
    pub name: &'static str,
    pub class: LineClass,
    /// Only consider lines inside a matching `/section`.
    pub section: Option<SectionFilter>,
    pub pattern: &'static str,
    pub rewrite: Rewrite,
}

/// Segment naming policy for `set`-style hierarchical paths.
#[derive(Debug, Clone, Copy)]
pub struct PathPolicy {
    /// Segments kept literal even though they contain a hyphen.
    pub keywords: &'static [&'static str],
    /// The segment after one of these is always a value (e.g. an interface name).
    pub value_after: &'static [&'static str],
    /// The segment after the keyword collapses into a fixed placeholder.
    pub fixed_after: &'static [(&'static str, &'static str)],
}

/// Element name used for the device identity in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTag {
    Hostname,
    Name,
}

/// Whole-text search for the device identity (`value` group).
#[derive(Debug, Clone, Copy)]
pub struct MetadataRule {
    pub tag: SystemTag,
    pub pattern: &'static str,
}

/// True when `current` is `prefix` or a subsection of it (word-aligned).
pub fn in_section(current: &str, prefix: &str) -> bool {
    current == prefix
        || current
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with(' '))
}

/// A `/section` prefix minus subsections that hold something else
/// (e.g. `/interface list` under `/interface`).
#[derive(Debug, Clone, Copy)]
pub struct SectionFilter {
    pub prefix: &'static str,
    pub excluded: &'static [&'static str],
}

impl SectionFilter {
    pub const fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            excluded: &[],
        }
    }

    pub const fn excluding(mut self, excluded: &'static [&'static str]) -> Self {
        self.excluded = excluded;
        self
    }

    pub fn matches(&self, section: &str) -> bool {
        in_section(section, self.prefix)
            && !self
                .excluded
                .iter()
                .any(|excluded| in_section(section, excluded))
    }
}

/// Key names used by `/section` dialects (RouterOS).
#[derive(Debug, Clone, Copy)]
pub struct SectionScope {
    pub entry_section: SectionFilter,
    pub entry_key: &'static str,
    pub address_section: SectionFilter,
    pub address_key: &'static str,
    pub binding_key: &'static str,
}

/// How attributes are bound to the entry that owns them.
#[derive(Debug, Clone, Copy)]
pub enum Scope {
    /// `declaration` yields `name`; `address` (groups `addr`, optional `mask`)
    /// is searched only up to the next declaration.
    Span {
        declaration: &'static str,
        address: &'static str,
    },
    /// `declaration` yields `name` and `unit`; the address path is rebuilt from
    /// `address_path`, with `{name}` and `{unit}` replaced by escaped values.
    Path {
        declaration: &'static str,
        address_path: &'static str,
    },
    /// Entries and addresses come from `add key=value` commands in sections.
    Section(SectionScope),
}

/// Rules for the tree representation.
#[derive(Debug, Clone, Copy)]
pub struct TreeRules {
    pub metadata: Option<MetadataRule>,
    pub scope: Scope,
}

/// Complete description of one dialect.
#[derive(Debug, Clone, Copy)]
pub struct DialectProfile {
    pub id: DialectId,
    /// A line whose trimmed text starts with one of these is a comment.
    pub comment_markers: &'static [&'static str],
    /// Trim every line before matching (path dialects).
    pub trim_lines: bool,
    /// Lines starting with `/` open a section (RouterOS).
    pub sections: bool,
    pub template: Option<&'static [LineRule]>,
    pub tree: Option<TreeRules>,
}
