//! Juniper JunOS in `set` (display set) form.

use cfgconv_ir::DialectId;

use crate::rules::{
    DialectProfile, LineClass, LineRule, MetadataRule, PathPolicy, Rewrite, Scope, SystemTag,
    TreeRules,
};

/// Hyphenated words that are part of the JunOS schema, not values.
const KEYWORDS: &[&str] = &[
    "address-book",
    "aggregated-ether-options",
    "autonomous-system",
    "class-of-service",
    "destination-address",
    "domain-name",
    "domain-search",
    "encrypted-password",
    "ether-options",
    "ethernet-switching",
    "flexible-vlan-tagging",
    "forwarding-options",
    "from-zone",
    "host-inbound-traffic",
    "host-name",
    "instance-type",
    "interface-mode",
    "interface-range",
    "link-speed",
    "local-address",
    "local-as",
    "minimum-links",
    "name-server",
    "native-vlan-id",
    "next-hop",
    "no-redirects",
    "peer-as",
    "plain-text-password",
    "policy-options",
    "policy-statement",
    "port-mode",
    "prefix-list",
    "root-authentication",
    "route-distinguisher",
    "route-filter",
    "router-advertisement",
    "router-id",
    "routing-instances",
    "routing-options",
    "security-zone",
    "source-address",
    "ssh-ed25519",
    "ssh-rsa",
    "system-services",
    "time-zone",
    "to-zone",
    "vlan-id",
    "vlan-tagging",
    "vrf-target",
];

static SET_PATH: PathPolicy = PathPolicy {
    keywords: KEYWORDS,
    value_after: &["interfaces"],
    fixed_after: &[("host-name", "hostname"), ("address", "ip_address")],
};

pub static JUNOS: DialectProfile = DialectProfile {
    id: DialectId::Junos,
    comment_markers: &["#", "/*", "*"],
    trim_lines: true,
    sections: false,
    template: Some(&[LineRule {
        name: "set-path",
        class: LineClass::Entry,
        section: None,
        pattern: r"^set\s+(?P<path>\S.*)$",
        rewrite: Rewrite::Path(&SET_PATH),
    }]),
    tree: Some(TreeRules {
        metadata: Some(MetadataRule {
            tag: SystemTag::Hostname,
            pattern: r"(?m)^[ \t]*set[ \t]+system[ \t]+host-name[ \t]+(?P<value>\S+)",
        }),
        scope: Scope::Path {
            declaration: r"(?m)^[ \t]*set[ \t]+interfaces[ \t]+(?P<name>\S+)[ \t]+unit[ \t]+(?P<unit>[0-9]+)",
            address_path: "set interfaces {name} unit {unit} family inet address",
        },
    }),
};
