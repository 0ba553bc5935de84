//! English text modifiers.

use tracing::debug;

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

fn is_alphanumeric_or_apostrophe(c: char) -> bool {
    c.is_alphanumeric() || c == '\''
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn capitalize_all(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if is_alphanumeric_or_apostrophe(c) {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

fn comma(text: &str) -> String {
    match text.chars().last() {
        Some(',' | '.' | '!' | '?') => text.to_string(),
        _ => format!("{text},"),
    }
}

fn article(text: &str) -> String {
    let mut chars = text.chars();
    let first = chars.next();
    let third = chars.nth(1);

    // "unicorn", "university": a leading 'u' followed by 'i' sounds like "you".
    if first.is_some_and(|c| c.eq_ignore_ascii_case(&'u'))
        && third.is_some_and(|c| c.eq_ignore_ascii_case(&'i'))
    {
        return format!("a {text}");
    }
    match first {
        Some(c) if is_vowel(c) => format!("an {text}"),
        _ => format!("a {text}"),
    }
}

fn plural(text: &str) -> String {
    let mut rev = text.chars().rev();
    match (rev.next(), rev.next()) {
        (None, _) => String::new(),
        (Some('s' | 'h' | 'x'), _) => format!("{text}es"),
        (Some('y'), Some(before)) if !is_vowel(before) => {
            format!("{}ies", &text[..text.len() - 1])
        }
        _ => format!("{text}s"),
    }
}

fn first_plural(text: &str) -> String {
    match text.split_once(' ') {
        Some((first, rest)) => format!("{} {rest}", plural(first)),
        None => plural(text),
    }
}

fn past_tense(text: &str) -> String {
    let (verb, rest) = match text.split_once(' ') {
        Some((verb, rest)) => (verb, Some(rest)),
        None => (text, None),
    };

    let mut rev = verb.chars().rev();
    let past = match (rev.next(), rev.next()) {
        (None, _) => String::new(),
        (Some('e'), _) => format!("{verb}d"),
        (Some('y'), Some(before)) if !is_vowel(before) => {
            format!("{}ied", &verb[..verb.len() - 1])
        }
        _ => format!("{verb}ed"),
    };

    match rest {
        Some(rest) => format!("{past} {rest}"),
        None => past,
    }
}

/// Applies a named modifier to `text`.
///
/// Supported: `capitalize`, `capitalizeAll`, `inQuotes`, `comma`, `a`, `s`,
/// `firstS`, `ed`. Unknown names leave the text unchanged.
///
/// # Examples
///
/// ```
/// use tracerybot_grammar::apply_modifier;
///
/// assert_eq!(apply_modifier("a", "owl"), "an owl");
/// assert_eq!(apply_modifier("s", "fox"), "foxes");
/// assert_eq!(apply_modifier("capitalize", "hello"), "Hello");
/// assert_eq!(apply_modifier("sparkle", "unchanged"), "unchanged");
/// ```
pub fn apply_modifier(name: &str, text: &str) -> String {
    match name {
        "capitalize" => capitalize(text),
        "capitalizeAll" => capitalize_all(text),
        "inQuotes" => format!("\"{text}\""),
        "comma" => comma(text),
        "a" => article(text),
        "s" => plural(text),
        "firstS" => first_plural(text),
        "ed" => past_tense(text),
        unknown => {
            debug!(modifier = unknown, "Unknown modifier, leaving text unchanged");
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn articles() {
        assert_eq!(article("eel"), "an eel");
        assert_eq!(article("Owl"), "an Owl");
        assert_eq!(article("cat"), "a cat");
        assert_eq!(article("unicorn"), "a unicorn");
        assert_eq!(article("umbrella"), "an umbrella");
    }

    #[test]
    fn plurals() {
        assert_eq!(plural("bus"), "buses");
        assert_eq!(plural("wish"), "wishes");
        assert_eq!(plural("berry"), "berries");
        assert_eq!(plural("day"), "days");
        assert_eq!(plural("owl"), "owls");
        assert_eq!(plural(""), "");
    }

    #[test]
    fn first_word_plural() {
        assert_eq!(first_plural("cat of the house"), "cats of the house");
    }

    #[test]
    fn past_tenses() {
        assert_eq!(past_tense("bake"), "baked");
        assert_eq!(past_tense("cry"), "cried");
        assert_eq!(past_tense("play"), "played");
        assert_eq!(past_tense("walk home"), "walked home");
    }

    #[test]
    fn capitalization() {
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize_all("the old-growth forest"), "The Old-Growth Forest");
    }

    #[test]
    fn punctuation() {
        assert_eq!(comma("hello"), "hello,");
        assert_eq!(comma("hello!"), "hello!");
        assert_eq!(apply_modifier("inQuotes", "hi"), "\"hi\"");
    }
}
