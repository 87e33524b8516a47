//! Wildcard pattern compilation.

use crate::{PolicyError, PolicyResult};
use regex_lite::Regex;

/// A compiled wildcard matcher for component names.
///
/// Patterns are plain text plus `*` wildcards. Each `*` stands for one or
/// more word characters (letters, digits, underscore), never zero and
/// never anything else. The whole pattern is anchored at both ends, so a
/// pattern without wildcards behaves as an exact match.
///
/// Compilation happens once, when the policy set is installed, not per
/// lookup.
#[derive(Debug)]
pub struct RuleMatcher {
    pattern: String,
    regex: Regex,
}

impl RuleMatcher {
    /// Compile a wildcard pattern into an anchored matcher.
    ///
    /// Every non-`*` character is a literal; regex metacharacters in the
    /// pattern carry no special meaning.
    pub fn compile(pattern: &str) -> PolicyResult<Self> {
        let mut source = String::with_capacity(pattern.len() + 8);
        source.push('^');
        for ch in pattern.chars() {
            match ch {
                '*' => source.push_str(r"\w+"),
                // Only actual metacharacters get a backslash. Escaping
                // blindly is wrong for characters like '<' and '>', where
                // the escaped form is a word-boundary assertion.
                c @ ('.' | '^' | '$' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '|'
                | '\\') => {
                    source.push('\\');
                    source.push(c);
                }
                c => source.push(c),
            }
        }
        source.push('$');

        let regex = Regex::new(&source).map_err(|source| PolicyError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// Test whether `name` matches the entire pattern.
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// The original pattern text.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}
