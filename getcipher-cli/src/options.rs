//! `name=value` option parsing.
//!
//! Each accepted option has a value pattern checked before anything
//! reaches the algorithm. `salt_charset` is written as bracket ranges on
//! the command line (`[0-9][a-z]`) and handed to the core in compact pair
//! form (`09az`).

use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use getcipher_core::Overrides;
use regex::Regex;

/// Accepted option names and the pattern their values must match.
pub const OPTION_PATTERNS: &[(&str, &str)] = &[
    ("salt_len", r"^\d+$"),
    ("iter_pos", r"^\S$"),
    ("salt_charset", r"^(\[[0-9A-Za-z./]-[0-9A-Za-z./]\])+$"),
];

const RANGE_PATTERN: &str = r"\[(.)-(.)\]";

/// Compiled option validators.
#[derive(Debug, Clone)]
pub struct OptionParser {
    patterns: BTreeMap<&'static str, Regex>,
    range: Regex,
}

impl OptionParser {
    pub fn new() -> Result<Self> {
        let patterns: BTreeMap<_, _> = OPTION_PATTERNS
            .iter()
            .map(|&(name, pattern)| {
                Regex::new(pattern)
                    .with_context(|| format!("compile value pattern for {name}"))
                    .map(|re| (name, re))
            })
            .collect::<Result<_>>()?;
        let range = Regex::new(RANGE_PATTERN).context("compile charset range pattern")?;
        Ok(Self { patterns, range })
    }

    /// Parse every `name=value` argument into one override map.
    ///
    /// Fails on a missing `=`, an unknown name, a value that does not
    /// match its pattern, or a name given twice.
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> Result<Overrides> {
        let mut overrides = Overrides::new();
        for arg in args {
            let arg = arg.as_ref();
            let Some((name, value)) = arg.split_once('=') else {
                bail!("invalid option '{arg}' (expected format: <name>=<value>)");
            };
            let Some(pattern) = self.patterns.get(name) else {
                bail!(
                    "unknown option '{name}' (expected one of: {})",
                    self.names().collect::<Vec<_>>().join(", ")
                );
            };
            if !pattern.is_match(value) {
                bail!("invalid value '{value}' for option '{name}'");
            }

            let value = if name == "salt_charset" {
                self.decode_ranges(value)
            } else {
                value.to_string()
            };
            if overrides.insert(name.to_string(), value).is_some() {
                bail!("option '{name}' given more than once");
            }
        }
        Ok(overrides)
    }

    /// `[0-9][a-z]` → `09az`.
    pub fn decode_ranges(&self, value: &str) -> String {
        let mut pairs = String::with_capacity(value.len() / 5 * 2);
        for caps in self.range.captures_iter(value) {
            pairs.push_str(&caps[1]);
            pairs.push_str(&caps[2]);
        }
        pairs
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.keys().copied()
    }
}
