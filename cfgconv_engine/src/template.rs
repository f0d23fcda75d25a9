use std::ops::Range;

use cfgconv_ir::{TemplateDocument, TemplateLine, split_lines};
use regex::Captures;

use crate::classify::{Classified, classify_line, is_comment, section_header};
use crate::error::ConvertError;
use crate::extract::{placeholder_name, render_placeholder, rewrite_path};
use crate::registry::CompiledProfile;
use crate::rules::{Placeholder, Rewrite};

struct Splice {
    range: Range<usize>,
    replacement: String,
    placeholders: Vec<String>,
}

/// Render every input line, substituting placeholders where a rule matches.
///
/// Output has exactly one line per input line, in order, each with the
/// source line's original ending.
pub(crate) fn emit_template(
    input: &str,
    profile: &CompiledProfile,
) -> Result<TemplateDocument, ConvertError> {
    let rules = profile.template_rules()?;
    let dialect = profile.profile;
    let mut section: Option<String> = None;
    let mut lines = Vec::new();

    for line in split_lines(input) {
        let text = if dialect.trim_lines {
            line.raw.trim()
        } else {
            line.raw.as_str()
        };

        if dialect.sections && !is_comment(text, dialect.comment_markers) {
            if let Some(header) = section_header(text) {
                section = Some(header);
            }
        }

        let rendered =
            match classify_line(text, rules, dialect.comment_markers, section.as_deref()) {
                Classified::Matched { rule, captures } => {
                    tracing::trace!(line = line.index, rule = rule.rule.name, "rule matched");
                    let (text, placeholders) = apply_rewrite(text, rule.rule.rewrite, &captures);
                    TemplateLine {
                        index: line.index,
                        text,
                        line_ending: line.line_ending.clone(),
                        placeholders,
                    }
                }
                Classified::Comment | Classified::Passthrough => {
                    TemplateLine::verbatim(line.index, text, line.line_ending.as_str())
                }
            };
        lines.push(rendered);
    }

    let doc = TemplateDocument {
        dialect: dialect.id,
        lines,
    };
    tracing::debug!(
        dialect = %doc.dialect,
        lines = doc.lines.len(),
        rewritten = doc.lines.iter().filter(|l| !l.is_verbatim()).count(),
        "template emitted"
    );
    Ok(doc)
}

fn apply_rewrite(text: &str, rewrite: Rewrite, captures: &Captures<'_>) -> (String, Vec<String>) {
    let mut splices = Vec::new();

    match rewrite {
        Rewrite::Captures(groups) => {
            for (group, placeholder) in groups {
                let Some(found) = captures.name(group) else {
                    continue;
                };
                let name = match placeholder {
                    Placeholder::Fixed(name) => (*name).to_string(),
                    Placeholder::Derived => placeholder_name(found.as_str()),
                };
                if name.is_empty() {
                    continue;
                }
                splices.push(Splice {
                    range: found.range(),
                    replacement: render_placeholder(&name),
                    placeholders: vec![name],
                });
            }
        }
        Rewrite::Path(policy) => {
            if let Some(found) = captures.name("path") {
                let (path, placeholders) = rewrite_path(found.as_str(), policy);
                splices.push(Splice {
                    range: found.range(),
                    replacement: path,
                    placeholders,
                });
            }
        }
    }

    splices.sort_by_key(|splice| splice.range.start);

    let mut out = String::with_capacity(text.len());
    let mut names = Vec::new();
    let mut cursor = 0usize;
    for splice in splices {
        out.push_str(&text[cursor..splice.range.start]);
        out.push_str(&splice.replacement);
        names.extend(splice.placeholders);
        cursor = splice.range.end;
    }
    out.push_str(&text[cursor..]);

    (out, names)
}
