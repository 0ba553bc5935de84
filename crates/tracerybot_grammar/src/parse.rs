//! Rule text parsing.

use tracerybot_error::{GrammarError, GrammarErrorKind};

/// One piece of a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Section {
    /// Literal text
    Text(String),
    /// Contents of a `#...#` tag
    Tag(String),
    /// Contents of a top-level `[...]` action
    Action(String),
}

/// Contents of a tag split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TagSpec {
    pub actions: Vec<String>,
    pub symbol: String,
    pub modifiers: Vec<String>,
}

/// An action split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ActionSpec<'a> {
    Push { key: &'a str, rules: Vec<&'a str> },
    Pop { key: &'a str },
    Unsupported,
}

#[track_caller]
fn malformed(rule: &str, message: &str) -> GrammarError {
    GrammarError::new(GrammarErrorKind::MalformedRule {
        rule: rule.to_string(),
        message: message.to_string(),
    })
}

fn flush_text(sections: &mut Vec<Section>, buffer: &mut String) {
    if !buffer.is_empty() {
        sections.push(Section::Text(std::mem::take(buffer)));
    }
}

/// Splits a rule into literal text, tags and actions.
///
/// Escapes are resolved in literal text and preserved inside tags and
/// actions, whose contents are parsed again when expanded.
pub(crate) fn parse_rule(rule: &str) -> Result<Vec<Section>, GrammarError> {
    let mut sections = Vec::new();
    let mut buffer = String::new();
    let mut depth = 0usize;
    let mut in_tag = false;
    let mut escaped = false;

    for c in rule.chars() {
        if escaped {
            buffer.push(c);
            escaped = false;
            continue;
        }
        match c {
            '\\' => {
                escaped = true;
                if in_tag || depth > 0 {
                    buffer.push('\\');
                }
            }
            '[' => {
                if depth == 0 && !in_tag {
                    flush_text(&mut sections, &mut buffer);
                } else {
                    buffer.push('[');
                }
                depth += 1;
            }
            ']' => {
                if depth == 0 {
                    return Err(malformed(rule, "unmatched ']'"));
                }
                depth -= 1;
                if depth == 0 && !in_tag {
                    sections.push(Section::Action(std::mem::take(&mut buffer)));
                } else {
                    buffer.push(']');
                }
            }
            '#' if depth == 0 => {
                if in_tag {
                    sections.push(Section::Tag(std::mem::take(&mut buffer)));
                } else {
                    flush_text(&mut sections, &mut buffer);
                }
                in_tag = !in_tag;
            }
            _ => buffer.push(c),
        }
    }

    if in_tag {
        return Err(malformed(rule, "unclosed '#'"));
    }
    if depth > 0 {
        return Err(malformed(rule, "unclosed '['"));
    }
    if escaped {
        buffer.push('\\');
    }
    flush_text(&mut sections, &mut buffer);
    Ok(sections)
}

/// Splits tag contents into leading actions, the symbol and its modifiers.
pub(crate) fn parse_tag(tag: &str) -> Result<TagSpec, GrammarError> {
    let mut actions = Vec::new();
    let mut rest = tag;

    while rest.starts_with('[') {
        let mut depth = 0usize;
        let mut escaped = false;
        let mut end = None;
        for (index, c) in rest.char_indices() {
            if escaped {
                escaped = false;
                continue;
            }
            match c {
                '\\' => escaped = true,
                '[' => depth += 1,
                ']' => {
                    depth -= 1;
                    if depth == 0 {
                        end = Some(index);
                        break;
                    }
                }
                _ => {}
            }
        }
        let end = end.ok_or_else(|| malformed(tag, "unclosed '[' in tag"))?;
        actions.push(rest[1..end].to_string());
        rest = &rest[end + 1..];
    }

    let mut parts = rest.split('.');
    let symbol = parts.next().unwrap_or_default().to_string();
    let modifiers = parts
        .filter(|modifier| !modifier.is_empty())
        .map(str::to_string)
        .collect();

    Ok(TagSpec {
        actions,
        symbol,
        modifiers,
    })
}

/// Interprets action contents.
pub(crate) fn parse_action(action: &str) -> ActionSpec<'_> {
    match action.split_once(':') {
        Some((key, "POP")) => ActionSpec::Pop { key },
        Some((key, value)) => ActionSpec::Push {
            key,
            rules: value.split(',').collect(),
        },
        None => ActionSpec::Unsupported,
    }
}
