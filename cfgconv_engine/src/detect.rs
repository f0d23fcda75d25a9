//! Heuristic dialect detection.
//!
//! Fingerprints are checked in order and the first hit wins. Most dialects
//! share keywords such as `hostname` and `interface`, so the result is a guess;
//! prefer an explicit dialect whenever the caller knows it.

use std::sync::LazyLock;

use cfgconv_ir::DialectId;
use regex::Regex;
use serde::Serialize;

/// Outcome of [`detect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionResult {
    Detected(DialectId),
    Unknown,
}

impl DetectionResult {
    pub fn dialect(self) -> Option<DialectId> {
        match self {
            DetectionResult::Detected(id) => Some(id),
            DetectionResult::Unknown => None,
        }
    }
}

struct Fingerprint {
    name: &'static str,
    dialect: DialectId,
    regex: Regex,
}

const FINGERPRINTS: &[(&str, DialectId, &str)] = &[
    (
        "junos-set-path",
        DialectId::Junos,
        r"(?m)^[ \t]*set[ \t]+(?:system|interfaces|protocols|routing-options|security)[ \t]",
    ),
    (
        "junos-version",
        DialectId::Junos,
        r"(?m)^[ \t]*(?:set[ \t]+)?version[ \t]+[0-9]+\.[0-9]+R[0-9]",
    ),
    ("sros-timos-banner", DialectId::Sros, r"(?i)\bTiMOS-"),
    ("sros-exit-all", DialectId::Sros, r"(?m)^[ \t]*exit[ \t]+all[ \t]*\r?$"),
    ("routeros-banner", DialectId::Mikrotik, r"(?i)\bby RouterOS\b"),
    (
        "routeros-section",
        DialectId::Mikrotik,
        r"(?m)^/(?:interface|ip|system|routing)\b",
    ),
    ("iosxr-banner", DialectId::Iosxr, r"(?i)!![ \t]*IOS[ -]XR"),
    (
        "iosxr-ipv4-address",
        DialectId::Iosxr,
        r"(?m)^[ \t]*ipv4[ \t]+address[ \t]+[0-9]",
    ),
    ("eos-banner", DialectId::Eos, r"(?i)\barista\b|\bEOS-[0-9]"),
    (
        "eos-prefix-address",
        DialectId::Eos,
        r"(?m)^[ \t]*ip[ \t]+address[ \t]+[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+/[0-9]+",
    ),
    (
        "ios-banner",
        DialectId::Ios,
        r"(?m)^(?:Current configuration|Building configuration|version[ \t]+[0-9]+\.[0-9]+[ \t]*\r?$)",
    ),
    (
        "ios-mask-address",
        DialectId::Ios,
        r"(?m)^[ \t]*ip[ \t]+address[ \t]+[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+[ \t]+[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+",
    ),
];

static COMPILED: LazyLock<Vec<Fingerprint>> = LazyLock::new(|| {
    FINGERPRINTS
        .iter()
        .map(|(name, dialect, pattern)| Fingerprint {
            name: *name,
            dialect: *dialect,
            regex: Regex::new(pattern).expect("fingerprint pattern is valid"),
        })
        .collect()
});

/// Guess the dialect of `input`, or [`DetectionResult::Unknown`].
pub fn detect(input: &str) -> DetectionResult {
    match COMPILED.iter().find(|fp| fp.regex.is_match(input)) {
        Some(fp) => {
            tracing::debug!(fingerprint = fp.name, dialect = %fp.dialect, "dialect detected");
            DetectionResult::Detected(fp.dialect)
        }
        None => {
            tracing::debug!("no dialect fingerprint matched");
            DetectionResult::Unknown
        }
    }
}
