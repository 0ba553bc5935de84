//! Grammar-backed text generator.

use crate::Grammar;
use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use tracerybot_error::TracerybotResult;
use tracerybot_interface::TextGenerator;
use tracing::trace;

/// [`TextGenerator`] that expands symbols of a [`Grammar`].
///
/// # Examples
///
/// ```
/// use tracerybot_grammar::{Grammar, GrammarGenerator};
/// use tracerybot_interface::TextGenerator;
///
/// let grammar = Grammar::from_json_str(r#"{"toot": ["beep", "boop"]}"#).unwrap();
/// let generator = GrammarGenerator::with_seed(grammar, 1);
///
/// let toot = generator.expand("toot");
/// assert!(toot == "beep" || toot == "boop");
/// ```
#[derive(Debug)]
pub struct GrammarGenerator {
    grammar: Grammar,
    rng: Mutex<StdRng>,
}

impl GrammarGenerator {
    /// Creates a generator seeded from the operating system.
    pub fn new(grammar: Grammar) -> Self {
        Self {
            grammar,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Creates a generator with a fixed seed, for reproducible output.
    pub fn with_seed(grammar: Grammar, seed: u64) -> Self {
        Self {
            grammar,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Loads the grammar from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> TracerybotResult<Self> {
        Ok(Self::new(Grammar::from_file(path)?))
    }

    /// The underlying grammar.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }
}

impl TextGenerator for GrammarGenerator {
    fn expand(&self, symbol: &str) -> String {
        let mut rng = self.rng.lock();
        let text = self.grammar.expand(symbol, &mut *rng);
        trace!(symbol, chars = text.chars().count(), "Expanded symbol");
        text
    }
}
