use regex::Captures;

use crate::extract::split_segments;
use crate::registry::CompiledRule;
use crate::rules::{LineClass, SectionFilter};

/// Words that end the section path of a RouterOS `/section` line.
const SECTION_COMMANDS: &[&str] = &[
    "add", "set", "remove", "print", "enable", "disable", "export", "unset", "move", "comment",
    "edit",
];

/// Result of classifying one line against a dialect's ordered rules.
#[derive(Debug)]
pub enum Classified<'r, 't> {
    Comment,
    Matched {
        rule: &'r CompiledRule,
        captures: Captures<'t>,
    },
    Passthrough,
}

impl Classified<'_, '_> {
    pub fn class(&self) -> LineClass {
        match self {
            Classified::Comment => LineClass::Comment,
            Classified::Matched { rule, .. } => rule.rule.class,
            Classified::Passthrough => LineClass::Passthrough,
        }
    }
}

/// True when the trimmed line starts with one of `markers`.
pub fn is_comment(text: &str, markers: &[&str]) -> bool {
    let trimmed = text.trim_start();
    markers.iter().any(|marker| trimmed.starts_with(marker))
}

/// Section path opened by a `/section` line, e.g. `/interface bridge` for
/// `/interface bridge add name=br0`.
pub fn section_header(text: &str) -> Option<String> {
    let trimmed = text.trim_start();
    if !trimmed.starts_with('/') {
        return None;
    }
    let words = split_segments(trimmed)
        .into_iter()
        .take_while(|word| {
            !SECTION_COMMANDS.contains(&word.as_str())
                && !word.contains('=')
                && !word.starts_with('[')
        })
        .collect::<Vec<_>>();
    Some(words.join(" "))
}

fn section_matches(current: Option<&str>, required: Option<&SectionFilter>) -> bool {
    match (required, current) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(filter), Some(section)) => filter.matches(section),
    }
}

/// Classify `text`: comments first, then the first rule whose section
/// constraint and pattern both match.
pub fn classify_line<'r, 't>(
    text: &'t str,
    rules: &'r [CompiledRule],
    comment_markers: &[&str],
    section: Option<&str>,
) -> Classified<'r, 't> {
    if is_comment(text, comment_markers) {
        return Classified::Comment;
    }

    for rule in rules {
        if !section_matches(section, rule.rule.section.as_ref()) {
            continue;
        }
        if let Some(captures) = rule.regex.captures(text) {
            return Classified::Matched { rule, captures };
        }
    }

    Classified::Passthrough
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_markers_are_checked_after_indentation() {
        assert!(is_comment("  ! banner", &["!"]));
        assert!(is_comment("/* junos */", &["#", "/*", "*"]));
        assert!(!is_comment("interface Ethernet1", &["!", "#"]));
    }

    #[test]
    fn section_header_stops_at_command_word() {
        assert_eq!(section_header("/interface bridge"), Some("/interface bridge".into()));
        assert_eq!(
            section_header("/interface bridge add name=br0"),
            Some("/interface bridge".into())
        );
        assert_eq!(
            section_header("/interface ethernet set [ find default-name=ether1 ] name=wan"),
            Some("/interface ethernet".into())
        );
        assert_eq!(section_header("add name=br0"), None);
    }

    #[test]
    fn section_prefix_is_word_aligned() {
        let interface = SectionFilter::new("/interface");
        assert!(section_matches(Some("/interface"), Some(&interface)));
        assert!(section_matches(Some("/interface vlan"), Some(&interface)));
        assert!(!section_matches(Some("/interfaces"), Some(&interface)));
        assert!(!section_matches(None, Some(&interface)));
        assert!(section_matches(None, None));
    }

    #[test]
    fn excluded_subsections_do_not_match() {
        let interface = SectionFilter::new("/interface").excluding(&["/interface list"]);
        assert!(section_matches(Some("/interface bridge"), Some(&interface)));
        assert!(!section_matches(Some("/interface list"), Some(&interface)));
        assert!(!section_matches(Some("/interface list member"), Some(&interface)));
        assert!(section_matches(Some("/interface listener"), Some(&interface)));
    }
}
