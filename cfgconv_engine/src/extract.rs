use crate::rules::PathPolicy;

/// Normalize a captured value into a template placeholder name.
///
/// - surrounding quotes are dropped
/// - a purely numeric value becomes `<value>_id`
/// - every character outside `[A-Za-z0-9_]` becomes `_`
///
/// ```rust
/// use cfgconv_engine::placeholder_name;
///
/// assert_eq!(placeholder_name("ge-0/0/1"), "ge_0_0_1");
/// assert_eq!(placeholder_name("0"), "0_id");
/// assert_eq!(placeholder_name("\"to-core\""), "to_core");
/// ```
pub fn placeholder_name(value: &str) -> String {
    let value = strip_quotes(value);
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        return format!("{value}_id");
    }
    value
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

/// Render a placeholder in `{{ name }}` syntax.
pub fn render_placeholder(name: &str) -> String {
    format!("{{{{ {name} }}}}")
}

pub(crate) fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

fn is_quoted(segment: &str) -> bool {
    segment.len() >= 2 && strip_quotes(segment).len() + 2 == segment.len()
}

/// Split on whitespace while keeping quoted strings (and escapes inside
/// them) in one token.
pub(crate) fn split_segments(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quote: Option<char> = None;
    let mut escape = false;

    for ch in raw.chars() {
        if let Some(q) = in_quote {
            current.push(ch);
            if escape {
                escape = false;
            } else if ch == '\\' {
                escape = true;
            } else if ch == q {
                in_quote = None;
            }
            continue;
        }

        match ch {
            '"' | '\'' => {
                current.push(ch);
                in_quote = Some(ch);
            }
            c if c.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Decision for one path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal,
    Placeholder(String),
}

fn classify_segment(segment: &str, previous: Option<&str>, policy: &PathPolicy) -> Segment {
    let fixed = previous.and_then(|prev| policy.fixed_after.iter().find(|(kw, _)| *kw == prev));
    if let Some((_, name)) = fixed {
        return Segment::Placeholder((*name).to_string());
    }
    if is_quoted(segment) {
        return Segment::Literal;
    }
    if segment.bytes().all(|b| b.is_ascii_digit()) {
        return Segment::Placeholder(placeholder_name(segment));
    }
    if policy.keywords.contains(&segment) {
        return Segment::Literal;
    }
    let value_position = previous.is_some_and(|prev| policy.value_after.contains(&prev));
    if value_position || segment.contains('-') {
        Segment::Placeholder(placeholder_name(segment))
    } else {
        Segment::Literal
    }
}

/// Rewrite a `set` path (without the leading keyword).
///
/// Returns the rewritten path and the placeholder names in order.
pub(crate) fn rewrite_path(path: &str, policy: &PathPolicy) -> (String, Vec<String>) {
    let segments = split_segments(path);
    let mut out = Vec::with_capacity(segments.len());
    let mut placeholders = Vec::new();
    let mut previous: Option<&str> = None;

    for segment in &segments {
        match classify_segment(segment, previous, policy) {
            Segment::Literal => out.push(segment.clone()),
            Segment::Placeholder(name) => {
                out.push(render_placeholder(&name));
                placeholders.push(name);
            }
        }
        previous = Some(segment.as_str());
    }

    (out.join(" "), placeholders)
}
