//! Cisco IOS, Cisco IOS-XR and Arista EOS.
//!
//! The three share the same block layout (`interface X` followed by indented
//! attributes) and differ in the address keyword and comment markers.

use cfgconv_ir::DialectId;

use crate::rules::{
    DialectProfile, LineClass, LineRule, MetadataRule, Placeholder, Rewrite, Scope, SystemTag,
    TreeRules,
};

const HOSTNAME_VALUE: &[(&str, Placeholder)] = &[("value", Placeholder::Fixed("hostname"))];
const INTERFACE_VALUE: &[(&str, Placeholder)] = &[("value", Placeholder::Derived)];
const ADDRESS_VALUES: &[(&str, Placeholder)] = &[
    ("addr", Placeholder::Fixed("ip_address")),
    ("mask", Placeholder::Fixed("subnet_mask")),
];

const HOSTNAME_RULE: LineRule = LineRule {
    name: "hostname",
    class: LineClass::Hostname,
    section: None,
    pattern: r"^\s*hostname\s+(?P<value>\S+)",
    rewrite: Rewrite::Captures(HOSTNAME_VALUE),
};

const INTERFACE_RULE: LineRule = LineRule {
    name: "interface",
    class: LineClass::Entry,
    section: None,
    pattern: r"^\s*interface\s+(?P<value>\S+)",
    rewrite: Rewrite::Captures(INTERFACE_VALUE),
};

const IP_ADDRESS_RULE: LineRule = LineRule {
    name: "ip-address",
    class: LineClass::Address,
    section: None,
    pattern: r"^\s*ip\s+address\s+(?P<addr>[0-9]\S*)(?:\s+(?P<mask>[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+))?",
    rewrite: Rewrite::Captures(ADDRESS_VALUES),
};

const IPV4_ADDRESS_RULE: LineRule = LineRule {
    name: "ipv4-address",
    class: LineClass::Address,
    section: None,
    pattern: r"^\s*ipv4\s+address\s+(?P<addr>[0-9]\S*)(?:\s+(?P<mask>[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+))?",
    rewrite: Rewrite::Captures(ADDRESS_VALUES),
};

const HOSTNAME_METADATA: MetadataRule = MetadataRule {
    tag: SystemTag::Hostname,
    pattern: r"(?m)^[ \t]*hostname[ \t]+(?P<value>\S+)",
};

/// Column 0 only; indented `interface` lines inside protocol blocks are
/// references, not declarations.
const INTERFACE_DECLARATION: &str = r"(?m)^interface[ \t]+(?P<name>\S+)";

pub static IOS: DialectProfile = DialectProfile {
    id: DialectId::Ios,
    comment_markers: &["!"],
    trim_lines: false,
    sections: false,
    template: Some(&[HOSTNAME_RULE, INTERFACE_RULE, IP_ADDRESS_RULE]),
    tree: Some(TreeRules {
        metadata: Some(HOSTNAME_METADATA),
        scope: Scope::Span {
            declaration: INTERFACE_DECLARATION,
            address: r"(?m)^[ \t]*ip[ \t]+address[ \t]+(?P<addr>[0-9]\S*)(?:[ \t]+(?P<mask>[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+))?",
        },
    }),
};

pub static IOSXR: DialectProfile = DialectProfile {
    id: DialectId::Iosxr,
    comment_markers: &["!"],
    trim_lines: false,
    sections: false,
    template: Some(&[HOSTNAME_RULE, INTERFACE_RULE, IPV4_ADDRESS_RULE]),
    tree: Some(TreeRules {
        metadata: Some(HOSTNAME_METADATA),
        scope: Scope::Span {
            declaration: INTERFACE_DECLARATION,
            address: r"(?m)^[ \t]*ipv4[ \t]+address[ \t]+(?P<addr>[0-9]\S*)(?:[ \t]+(?P<mask>[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+))?",
        },
    }),
};

pub static EOS: DialectProfile = DialectProfile {
    id: DialectId::Eos,
    comment_markers: &["!", "#"],
    trim_lines: false,
    sections: false,
    template: Some(&[HOSTNAME_RULE, INTERFACE_RULE, IP_ADDRESS_RULE]),
    tree: Some(TreeRules {
        metadata: Some(HOSTNAME_METADATA),
        scope: Scope::Span {
            declaration: INTERFACE_DECLARATION,
            address: r"(?m)^[ \t]*ip[ \t]+address[ \t]+(?P<addr>[0-9]\S*)(?:[ \t]+(?P<mask>[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+))?",
        },
    }),
};
