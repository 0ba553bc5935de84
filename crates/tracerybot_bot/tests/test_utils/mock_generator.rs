//! Mock text generator for testing.

use std::collections::VecDeque;
use std::sync::Mutex;
use tracerybot_interface::TextGenerator;

/// Generator that returns scripted text, then a fixed fallback.
pub struct MockGenerator {
    scripted: Mutex<VecDeque<String>>,
    fallback: String,
    symbols: Mutex<Vec<String>>,
}

impl MockGenerator {
    /// Always return `text`.
    pub fn fixed(text: impl Into<String>) -> Self {
        Self {
            scripted: Mutex::new(VecDeque::new()),
            fallback: text.into(),
            symbols: Mutex::new(Vec::new()),
        }
    }

    /// Return each of `texts` once, then `fallback` forever.
    pub fn sequence(texts: Vec<String>, fallback: impl Into<String>) -> Self {
        Self {
            scripted: Mutex::new(texts.into()),
            fallback: fallback.into(),
            symbols: Mutex::new(Vec::new()),
        }
    }

    /// Number of times expand() was called.
    pub fn call_count(&self) -> usize {
        self.symbols.lock().unwrap().len()
    }

    /// Symbols requested so far, in order.
    pub fn symbols(&self) -> Vec<String> {
        self.symbols.lock().unwrap().clone()
    }
}

impl TextGenerator for MockGenerator {
    fn expand(&self, symbol: &str) -> String {
        self.symbols.lock().unwrap().push(symbol.to_string());
        self.scripted
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}
