//! Rule expansion.

use crate::parse::{ActionSpec, Section, parse_action, parse_rule, parse_tag};
use crate::{Grammar, MAX_EXPANSION_DEPTH, MAX_SYMBOL_EXPANSIONS, apply_modifier};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use tracing::warn;

/// State for one top-level expansion.
///
/// Pushed rule stacks and the expansion budget live only as long as the
/// expansion that created them.
pub(crate) struct Expander<'g, R: Rng + ?Sized> {
    grammar: &'g Grammar,
    rng: &'g mut R,
    pushed: HashMap<String, Vec<Vec<String>>>,
    remaining: usize,
}

impl<'g, R: Rng + ?Sized> Expander<'g, R> {
    pub(crate) fn new(grammar: &'g Grammar, rng: &'g mut R) -> Self {
        Self {
            grammar,
            rng,
            pushed: HashMap::new(),
            remaining: MAX_SYMBOL_EXPANSIONS,
        }
    }

    pub(crate) fn flatten(&mut self, rule: &str, depth: usize) -> String {
        if depth > MAX_EXPANSION_DEPTH {
            warn!(depth, "Expansion depth exceeded, emitting rule verbatim");
            return rule.to_string();
        }

        let sections = match parse_rule(rule) {
            Ok(sections) => sections,
            Err(e) => {
                warn!(error = %e, "Emitting malformed rule verbatim");
                return rule.to_string();
            }
        };

        let mut out = String::new();
        for section in sections {
            match section {
                Section::Text(text) => out.push_str(&text),
                Section::Action(action) => {
                    self.apply_action(&action, depth);
                }
                Section::Tag(tag) => out.push_str(&self.expand_tag(&tag, depth)),
            }
        }
        out
    }

    fn expand_tag(&mut self, tag: &str, depth: usize) -> String {
        if self.remaining == 0 {
            return format!("#{tag}#");
        }

        let spec = match parse_tag(tag) {
            Ok(spec) => spec,
            Err(e) => {
                warn!(error = %e, "Emitting malformed tag verbatim");
                return format!("#{tag}#");
            }
        };

        let scoped: Vec<String> = spec
            .actions
            .iter()
            .filter_map(|action| self.apply_action(action, depth))
            .collect();

        let mut text = if spec.symbol.is_empty() {
            String::new()
        } else {
            self.expand_symbol(&spec.symbol, depth)
        };
        for modifier in &spec.modifiers {
            text = apply_modifier(modifier, &text);
        }

        for key in scoped.iter().rev() {
            self.pop(key);
        }
        text
    }

    /// Runs an action, returning the key it pushed onto.
    fn apply_action(&mut self, action: &str, depth: usize) -> Option<String> {
        match parse_action(action) {
            ActionSpec::Push { key, rules } => {
                let expanded: Vec<String> = rules
                    .into_iter()
                    .map(|rule| self.flatten(rule, depth + 1))
                    .collect();
                self.pushed
                    .entry(key.to_string())
                    .or_default()
                    .push(expanded);
                Some(key.to_string())
            }
            ActionSpec::Pop { key } => {
                self.pop(key);
                None
            }
            ActionSpec::Unsupported => {
                warn!(action, "Ignoring unsupported action");
                None
            }
        }
    }

    fn pop(&mut self, key: &str) {
        if let Some(stack) = self.pushed.get_mut(key) {
            stack.pop();
            if stack.is_empty() {
                self.pushed.remove(key);
            }
        }
    }

    fn expand_symbol(&mut self, symbol: &str, depth: usize) -> String {
        if self.remaining == 0 {
            return format!("#{symbol}#");
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            warn!(
                limit = MAX_SYMBOL_EXPANSIONS,
                "Expansion budget spent, emitting remaining tags verbatim"
            );
        }

        let chosen = match self.pushed.get(symbol).and_then(|stack| stack.last()) {
            Some(rules) => rules.choose(&mut *self.rng).cloned(),
            None => self
                .grammar
                .rules(symbol)
                .and_then(|rules| rules.choose(&mut *self.rng))
                .cloned(),
        };

        match chosen {
            Some(rule) => self.flatten(&rule, depth + 1),
            None => format!("(({symbol}))"),
        }
    }
}
