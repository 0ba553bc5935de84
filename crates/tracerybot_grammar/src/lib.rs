//! Tracery-style generative grammar.
//!
//! A grammar is a JSON object mapping symbol names to lists of rules:
//!
//! ```json
//! {
//!   "toot": ["#greeting.capitalize#, #animal.a# is #mood#."],
//!   "greeting": ["hello", "good morning"],
//!   "animal": ["owl", "eel"],
//!   "mood": ["sleepy", "hungry"]
//! }
//! ```
//!
//! Rule syntax:
//! - `#symbol#` expands a randomly chosen rule of `symbol`
//! - `#symbol.mod1.mod2#` applies English modifiers to the expansion
//! - `[key:rule1,rule2]` pushes expanded rules onto `key`; `[key:POP]` pops
//! - actions written at the start of a tag (`#[key:rule]symbol#`) last only
//!   for that tag
//! - `\` escapes the next character
//!
//! Unknown symbols render as `((symbol))`. Both the nesting depth and the
//! total number of symbol expansions are capped, so even branching
//! self-referential grammars terminate quickly; tags past the cap are
//! emitted verbatim.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod expand;
mod generator;
mod grammar;
mod modifiers;
mod parse;

pub use generator::GrammarGenerator;
pub use grammar::Grammar;
pub use modifiers::apply_modifier;

/// Deepest nesting of symbol expansions before a rule is emitted verbatim.
pub const MAX_EXPANSION_DEPTH: usize = 32;

/// Symbol expansions allowed in one top-level expansion before remaining
/// tags are emitted verbatim.
pub const MAX_SYMBOL_EXPANSIONS: usize = 1024;
