//! Length-bounded text synthesis.

use std::sync::Arc;
use tracerybot_interface::TextGenerator;
use tracing::trace;

/// Attempts allowed before giving up on a piece of text.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Platform limit on status length, in characters.
pub const MAX_STATUS_CHARS: usize = 500;

/// Outcome of [`retry_until`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryOutcome<T> {
    /// A produced value passed the predicate
    Accepted {
        /// The accepted value
        value: T,
        /// Attempts used, including the accepted one
        attempts: u32,
    },
    /// Every attempt was rejected
    Exhausted {
        /// Attempts used
        attempts: u32,
    },
}

impl<T> RetryOutcome<T> {
    /// Number of times the producer ran.
    pub fn attempts(&self) -> u32 {
        match self {
            Self::Accepted { attempts, .. } | Self::Exhausted { attempts } => *attempts,
        }
    }

    /// The accepted value, if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Accepted { value, .. } => Some(value),
            Self::Exhausted { .. } => None,
        }
    }
}

/// Runs `produce` until `accept` passes or `max_attempts` runs are used up.
///
/// # Examples
///
/// ```
/// use tracerybot_bot::{RetryOutcome, retry_until};
///
/// let mut n = 0;
/// let outcome = retry_until(10, || { n += 1; n }, |value| *value == 3);
/// assert_eq!(outcome, RetryOutcome::Accepted { value: 3, attempts: 3 });
///
/// let outcome = retry_until(4, || "x".repeat(600), |text| text.len() <= 500);
/// assert_eq!(outcome, RetryOutcome::Exhausted { attempts: 4 });
/// ```
pub fn retry_until<T, P, A>(max_attempts: u32, mut produce: P, mut accept: A) -> RetryOutcome<T>
where
    P: FnMut() -> T,
    A: FnMut(&T) -> bool,
{
    for attempt in 1..=max_attempts {
        let value = produce();
        if accept(&value) {
            return RetryOutcome::Accepted {
                value,
                attempts: attempt,
            };
        }
    }
    RetryOutcome::Exhausted {
        attempts: max_attempts,
    }
}

/// Attempt budget and length limit for generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisPolicy {
    /// Generator calls allowed per piece of text
    pub max_attempts: u32,
    /// Longest acceptable text, in characters
    pub max_chars: usize,
}

impl Default for SynthesisPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_chars: MAX_STATUS_CHARS,
        }
    }
}

impl SynthesisPolicy {
    /// Whether `text` is short enough to post.
    ///
    /// Length is counted in characters, not bytes.
    pub fn fits(&self, text: &str) -> bool {
        text.chars().count() <= self.max_chars
    }
}

/// Produces toots and replies from a [`TextGenerator`] within a
/// [`SynthesisPolicy`].
#[derive(Debug)]
pub struct Synthesizer<G: TextGenerator> {
    generator: Arc<G>,
    policy: SynthesisPolicy,
    toot_symbol: String,
    reply_symbol: String,
}

impl<G: TextGenerator> Synthesizer<G> {
    /// Creates a synthesizer expanding `toot_symbol` for original posts and
    /// `reply_symbol` for replies.
    pub fn new(
        generator: Arc<G>,
        policy: SynthesisPolicy,
        toot_symbol: impl Into<String>,
        reply_symbol: impl Into<String>,
    ) -> Self {
        Self {
            generator,
            policy,
            toot_symbol: toot_symbol.into(),
            reply_symbol: reply_symbol.into(),
        }
    }

    /// The policy in force.
    pub fn policy(&self) -> &SynthesisPolicy {
        &self.policy
    }

    /// Generates an original post.
    pub fn compose_toot(&self) -> RetryOutcome<String> {
        retry_until(
            self.policy.max_attempts,
            || self.generator.expand(&self.toot_symbol),
            |text| self.accept(text),
        )
    }

    /// Generates a reply addressed to `sender_handle`.
    ///
    /// The `@handle ` prefix counts towards the length limit.
    pub fn compose_reply(&self, sender_handle: &str) -> RetryOutcome<String> {
        retry_until(
            self.policy.max_attempts,
            || format!("@{} {}", sender_handle, self.generator.expand(&self.reply_symbol)),
            |text| self.accept(text),
        )
    }

    fn accept(&self, text: &str) -> bool {
        let fits = self.policy.fits(text);
        if !fits {
            trace!(
                chars = text.chars().count(),
                max_chars = self.policy.max_chars,
                "Rejected over-length text"
            );
        }
        fits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_attempts_never_produces() {
        let mut calls = 0;
        let outcome = retry_until(0, || calls += 1, |_| true);
        assert_eq!(outcome, RetryOutcome::Exhausted { attempts: 0 });
        assert_eq!(calls, 0);
    }

    #[test]
    fn fits_counts_characters() {
        let policy = SynthesisPolicy {
            max_attempts: 1,
            max_chars: 3,
        };
        assert!(policy.fits("éèê"));
        assert!(!policy.fits("abcd"));
    }
}
