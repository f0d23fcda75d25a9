//! Mikrotik RouterOS `/export` scripts.
//!
//! RouterOS groups commands under `/section` headers, either on their own
//! line or in front of the command (`/interface bridge add name=br0`).

use cfgconv_ir::DialectId;

use crate::rules::{
    DialectProfile, LineClass, LineRule, MetadataRule, Placeholder, Rewrite, Scope, SectionFilter,
    SectionScope, SystemTag, TreeRules,
};

/// Subsections of `/interface` whose `name=` values are not interfaces.
const NOT_INTERFACES: &[&str] = &[
    "/interface list",
    "/interface wireless security-profiles",
    "/interface wireless access-list",
    "/interface wireless connect-list",
    "/interface wifi security",
    "/interface wifi configuration",
    "/interface wifi channel",
    "/interface wifi datapath",
    "/interface wifi steering",
    "/interface bridge filter",
    "/interface bridge nat",
];

const INTERFACES: SectionFilter = SectionFilter::new("/interface").excluding(NOT_INTERFACES);

pub static MIKROTIK: DialectProfile = DialectProfile {
    id: DialectId::Mikrotik,
    comment_markers: &["#"],
    trim_lines: false,
    sections: true,
    template: Some(&[
        LineRule {
            name: "identity",
            class: LineClass::Hostname,
            section: Some(SectionFilter::new("/system identity")),
            pattern: r#"(?:^|\s)set\s+name=(?P<value>"[^"]*"|\S+)"#,
            rewrite: Rewrite::Captures(&[("value", Placeholder::Fixed("hostname"))]),
        },
        LineRule {
            name: "interface-name",
            class: LineClass::Entry,
            section: Some(INTERFACES),
            pattern: r#"(?:^|\s)add\s+(?:.*\s)?name=(?P<value>"[^"]*"|\S+)"#,
            rewrite: Rewrite::Captures(&[("value", Placeholder::Derived)]),
        },
        LineRule {
            name: "address",
            class: LineClass::Address,
            section: None,
            pattern: r"(?:^|\s)add\s+(?:.*\s)?address=(?P<addr>[0-9]\S*)",
            rewrite: Rewrite::Captures(&[("addr", Placeholder::Fixed("ip_address"))]),
        },
    ]),
    tree: Some(TreeRules {
        metadata: Some(MetadataRule {
            tag: SystemTag::Name,
            pattern: r#"(?m)^[ \t]*/system[ \t]+identity\s+set[ \t]+name=(?P<value>"[^"]*"|\S+)"#,
        }),
        scope: Scope::Section(SectionScope {
            entry_section: INTERFACES,
            entry_key: "name",
            address_section: SectionFilter::new("/ip address"),
            address_key: "address",
            binding_key: "interface",
        }),
    }),
};
