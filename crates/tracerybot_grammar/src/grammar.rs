//! Grammar definition and loading.

use crate::expand::Expander;
use crate::parse::{Section, parse_rule, parse_tag};
use rand::Rng;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracerybot_error::{GrammarError, GrammarErrorKind, TracerybotResult};
use tracing::{debug, instrument};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRules {
    One(String),
    Many(Vec<String>),
}

/// A set of symbols, each with one or more rules.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tracerybot_grammar::Grammar;
///
/// let grammar = Grammar::from_json_str(
///     r##"{"toot": ["#animal.a.capitalize# says hi"], "animal": ["owl"]}"##,
/// )
/// .expect("valid grammar");
///
/// let mut rng = StdRng::seed_from_u64(7);
/// assert_eq!(grammar.expand("toot", &mut rng), "An owl says hi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    rules: HashMap<String, Vec<String>>,
}

impl Grammar {
    /// Builds a grammar from symbol/rules pairs, validating every rule.
    ///
    /// # Errors
    ///
    /// Returns an error if a symbol has no rules or a rule is malformed.
    pub fn new(rules: HashMap<String, Vec<String>>) -> TracerybotResult<Self> {
        let grammar = Self { rules };
        grammar.validate()?;
        Ok(grammar)
    }

    /// Parses a grammar from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not an object of strings or string
    /// lists, or if validation fails.
    pub fn from_json_str(json: &str) -> TracerybotResult<Self> {
        let raw: HashMap<String, RawRules> = serde_json::from_str(json)
            .map_err(|e| GrammarError::new(GrammarErrorKind::Parse(e.to_string())))?;

        let rules = raw
            .into_iter()
            .map(|(symbol, rules)| {
                let rules = match rules {
                    RawRules::One(rule) => vec![rule],
                    RawRules::Many(rules) => rules,
                };
                (symbol, rules)
            })
            .collect();

        Self::new(rules)
    }

    /// Loads a grammar from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> TracerybotResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            GrammarError::new(GrammarErrorKind::FileRead(format!(
                "{}: {}",
                path.as_ref().display(),
                e
            )))
        })?;

        let grammar = Self::from_json_str(&content)?;
        debug!(symbols = grammar.rules.len(), "Loaded grammar");
        Ok(grammar)
    }

    /// Rules for `symbol`, if it is defined.
    pub fn rules(&self, symbol: &str) -> Option<&[String]> {
        self.rules.get(symbol).map(Vec::as_slice)
    }

    /// Whether `symbol` is defined.
    pub fn has_symbol(&self, symbol: &str) -> bool {
        self.rules.contains_key(symbol)
    }

    /// Defined symbol names, in no particular order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Expands arbitrary rule text.
    pub fn flatten<R: Rng + ?Sized>(&self, rule: &str, rng: &mut R) -> String {
        Expander::new(self, rng).flatten(rule, 0)
    }

    /// Expands a symbol, equivalent to flattening `#symbol#`.
    pub fn expand<R: Rng + ?Sized>(&self, symbol: &str, rng: &mut R) -> String {
        self.flatten(&format!("#{symbol}#"), rng)
    }

    fn validate(&self) -> Result<(), GrammarError> {
        for (symbol, rules) in &self.rules {
            if rules.is_empty() {
                return Err(GrammarError::new(GrammarErrorKind::EmptySymbol(
                    symbol.clone(),
                )));
            }
            for rule in rules {
                validate_rule(rule)?;
            }
        }
        Ok(())
    }
}

fn validate_rule(rule: &str) -> Result<(), GrammarError> {
    for section in parse_rule(rule)? {
        match section {
            Section::Tag(tag) => {
                for action in parse_tag(&tag)?.actions {
                    validate_action(&action)?;
                }
            }
            Section::Action(action) => validate_action(&action)?,
            Section::Text(_) => {}
        }
    }
    Ok(())
}

fn validate_action(action: &str) -> Result<(), GrammarError> {
    match action.split_once(':') {
        Some((_, value)) => value.split(',').try_for_each(validate_rule),
        None => Ok(()),
    }
}
