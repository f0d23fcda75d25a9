//! Nokia SR OS classic CLI.
//!
//! Identifiers are usually double-quoted (`interface "to-core"`); the quotes
//! stay in place and only the identifier inside them is substituted.

use cfgconv_ir::DialectId;

use crate::rules::{
    DialectProfile, LineClass, LineRule, MetadataRule, Placeholder, Rewrite, Scope, SystemTag,
    TreeRules,
};

pub static SROS: DialectProfile = DialectProfile {
    id: DialectId::Sros,
    comment_markers: &["#"],
    trim_lines: false,
    sections: false,
    template: Some(&[
        LineRule {
            name: "system-name",
            class: LineClass::Hostname,
            section: None,
            pattern: r#"^\s*name\s+"?(?P<value>[^"]+?)"?\s*$"#,
            rewrite: Rewrite::Captures(&[("value", Placeholder::Fixed("hostname"))]),
        },
        LineRule {
            name: "interface",
            class: LineClass::Entry,
            section: None,
            pattern: r#"^\s*interface\s+"?(?P<value>[^"]+?)"?(?:\s+create)?\s*$"#,
            rewrite: Rewrite::Captures(&[("value", Placeholder::Derived)]),
        },
        LineRule {
            name: "address",
            class: LineClass::Address,
            section: None,
            pattern: r"^\s*address\s+(?P<addr>[0-9]\S*)(?:\s+(?P<mask>[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+))?",
            rewrite: Rewrite::Captures(&[
                ("addr", Placeholder::Fixed("ip_address")),
                ("mask", Placeholder::Fixed("subnet_mask")),
            ]),
        },
    ]),
    tree: Some(TreeRules {
        metadata: Some(MetadataRule {
            tag: SystemTag::Name,
            pattern: r#"(?m)^[ \t]*name[ \t]+"?(?P<value>[^"\r\n]+?)"?[ \t]*\r?$"#,
        }),
        scope: Scope::Span {
            declaration: r#"(?m)^[ \t]*interface[ \t]+"?(?P<name>[^"\r\n]+?)"?(?:[ \t]+create)?[ \t]*\r?$"#,
            address: r"(?m)^[ \t]*address[ \t]+(?P<addr>[0-9]\S*)(?:[ \t]+(?P<mask>[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+))?",
        },
    }),
};
