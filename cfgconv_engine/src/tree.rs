use std::collections::HashSet;

use cfgconv_ir::{ConfigTree, Entry, SystemField, split_lines};
use regex::Regex;

use crate::classify::{is_comment, section_header};
use crate::error::ConvertError;
use crate::extract::{split_segments, strip_quotes};
use crate::registry::{CompiledProfile, CompiledScope};
use crate::rules::{MetadataRule, SectionScope, SystemTag};

/// Build the structured tree from the whole configuration text.
///
/// Entries keep declaration order; attributes are only bound within the
/// scope of the entry that declares them.
pub(crate) fn build_tree(input: &str, profile: &CompiledProfile) -> Result<ConfigTree, ConvertError> {
    let rules = profile.tree_rules()?;
    let mut tree = ConfigTree::new(profile.id());

    if let Some((meta, regex)) = &rules.metadata {
        tree.system = find_system(input, meta, regex);
    }

    match &rules.scope {
        CompiledScope::Span {
            declaration,
            address,
        } => tree.interfaces = span_entries(input, declaration, address),
        CompiledScope::Path {
            declaration,
            address_path,
        } => tree.interfaces = path_entries(input, declaration, address_path)?,
        CompiledScope::Section(scope) => {
            let (entries, addresses) =
                section_entries(input, scope, profile.profile.comment_markers);
            tree.interfaces = entries;
            tree.addresses = Some(addresses);
        }
    }

    tracing::debug!(
        dialect = %tree.dialect,
        entries = tree.interfaces.len(),
        has_system = tree.system.is_some(),
        "tree built"
    );
    Ok(tree)
}

fn find_system(input: &str, meta: &MetadataRule, regex: &Regex) -> Option<SystemField> {
    let value = regex.captures(input)?.name("value")?.as_str();
    let value = strip_quotes(value).to_string();
    Some(match meta.tag {
        SystemTag::Hostname => SystemField::Hostname(value),
        SystemTag::Name => SystemField::Name(value),
    })
}

/// Attributes are searched between a declaration and the next one.
///
/// A name declared more than once (protocol blocks that reference an
/// interface) yields one entry at its first position; later spans only fill
/// attributes that are still missing.
fn span_entries(input: &str, declaration: &Regex, address: &Regex) -> Vec<Entry> {
    let declarations = declaration
        .captures_iter(input)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.name("name")?.as_str().to_string();
            Some((whole.start(), whole.end(), name))
        })
        .collect::<Vec<_>>();

    let mut entries: Vec<Entry> = Vec::new();
    for (idx, (_, body_start, name)) in declarations.iter().enumerate() {
        let body_end = declarations
            .get(idx + 1)
            .map_or(input.len(), |(next_start, _, _)| *next_start);
        let body = &input[*body_start..body_end];

        let slot = match entries.iter().position(|entry| entry.name == *name) {
            Some(pos) => pos,
            None => {
                entries.push(Entry::named(name.clone()));
                entries.len() - 1
            }
        };
        let entry = &mut entries[slot];
        if entry.ip_address.is_some() {
            continue;
        }
        if let Some(caps) = address.captures(body) {
            entry.ip_address = caps.name("addr").map(|m| m.as_str().to_string());
            entry.subnet_mask = caps.name("mask").map(|m| m.as_str().to_string());
        }
    }

    entries
}

/// Attributes are found by rebuilding the full `set` path of each entry.
fn path_entries(
    input: &str,
    declaration: &Regex,
    address_path: &str,
) -> Result<Vec<Entry>, ConvertError> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for caps in declaration.captures_iter(input) {
        let (Some(name), Some(unit)) = (caps.name("name"), caps.name("unit")) else {
            continue;
        };
        let (name, unit) = (name.as_str(), unit.as_str());
        if !seen.insert((name, unit)) {
            continue;
        }

        let pattern = compose_path_pattern(address_path, name, unit)?;
        let mut entry = Entry::named(name);
        entry.unit = Some(unit.to_string());
        entry.ip_address = pattern
            .captures(input)
            .and_then(|found| found.name("addr"))
            .map(|m| m.as_str().to_string());
        entries.push(entry);
    }

    Ok(entries)
}

/// `set interfaces {name} unit {unit} ...` with each word escaped, followed
/// by an `addr` capture.
fn compose_path_pattern(template: &str, name: &str, unit: &str) -> Result<Regex, regex::Error> {
    let words = template
        .split_whitespace()
        .map(|word| match word {
            "{name}" => regex::escape(name),
            "{unit}" => regex::escape(unit),
            other => regex::escape(other),
        })
        .collect::<Vec<_>>();
    Regex::new(&format!(
        r"(?m)^[ \t]*{}[ \t]+(?P<addr>\S+)",
        words.join(r"[ \t]+")
    ))
}

/// Join RouterOS `\` line continuations into logical lines.
fn logical_lines(input: &str, comment_markers: &[&str]) -> Vec<String> {
    let mut out = Vec::new();
    let mut pending = String::new();

    for line in split_lines(input) {
        if pending.is_empty() && is_comment(&line.raw, comment_markers) {
            continue;
        }
        let raw = line.raw.trim_end();
        match raw.strip_suffix('\\') {
            Some(head) => {
                pending.push_str(head);
                pending.push(' ');
            }
            None => {
                pending.push_str(raw);
                out.push(std::mem::take(&mut pending));
            }
        }
    }
    if !pending.trim().is_empty() {
        out.push(pending);
    }

    out
}

fn key_value<'a>(words: &'a [String], key: &str) -> Option<&'a str> {
    words.iter().find_map(|word| {
        let (k, v) = word.split_once('=')?;
        (k == key).then(|| strip_quotes(v))
    })
}

/// Entries from `add name=...` in interface sections, addresses from
/// `add address=... interface=...`, bound by interface name.
fn section_entries(
    input: &str,
    scope: &SectionScope,
    comment_markers: &[&str],
) -> (Vec<Entry>, Vec<String>) {
    let mut section = String::new();
    let mut entries: Vec<Entry> = Vec::new();
    let mut addresses = Vec::new();
    let mut bindings = Vec::new();

    for line in logical_lines(input, comment_markers) {
        if let Some(header) = section_header(&line) {
            section = header;
        }
        let words = split_segments(&line);
        if !words.iter().any(|word| word == "add") {
            continue;
        }

        if scope.entry_section.matches(&section) {
            if let Some(name) = key_value(&words, scope.entry_key) {
                entries.push(Entry::named(name));
            }
        } else if scope.address_section.matches(&section) {
            if let Some(address) = key_value(&words, scope.address_key) {
                addresses.push(address.to_string());
                if let Some(owner) = key_value(&words, scope.binding_key) {
                    bindings.push((owner.to_string(), address.to_string()));
                }
            }
        }
    }

    for (owner, address) in bindings {
        if let Some(entry) = entries
            .iter_mut()
            .find(|entry| entry.name == owner && entry.ip_address.is_none())
        {
            entry.ip_address = Some(address);
        }
    }

    (entries, addresses)
}
