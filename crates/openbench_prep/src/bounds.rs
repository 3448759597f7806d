//! SPRT Elo bounds as given on the command line

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Lower and upper Elo bounds of an SPRT, e.g. `[-3.0, 1.0]`.
///
/// H0 is "Elo <= lower", H1 is "Elo >= upper". The textual form is kept
/// alongside the parsed values so that generated files echo exactly what
/// the operator typed.
#[derive(Debug, Clone, PartialEq)]
pub struct SprtBounds {
    pub lower: f64,
    pub upper: f64,
    raw: String,
    lower_text: String,
    upper_text: String,
}

impl SprtBounds {
    /// The bounds OpenBench uses for regular gainer tests
    pub const DEFAULT_LOWER: f64 = -3.0;
    pub const DEFAULT_UPPER: f64 = 1.0;

    pub fn parse(input: &str) -> Result<Self, Error> {
        let invalid = |reason: &str| Error::InvalidBounds {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let inner = input
            .trim()
            .trim_start_matches('[')
            .trim_end_matches(']');
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        let [lower_text, upper_text] = parts.as_slice() else {
            return Err(invalid("expected two comma-separated values"));
        };

        let parse_one = |text: &str, which: &str| -> Result<f64, Error> {
            let value: f64 = text
                .parse()
                .map_err(|_| invalid(&format!("{} bound {:?} is not a number", which, text)))?;
            if !value.is_finite() {
                return Err(invalid(&format!("{} bound must be finite", which)));
            }
            Ok(value)
        };

        Ok(Self {
            lower: parse_one(*lower_text, "lower")?,
            upper: parse_one(*upper_text, "upper")?,
            raw: input.to_string(),
            lower_text: lower_text.to_string(),
            upper_text: upper_text.to_string(),
        })
    }

    /// The bounds string exactly as supplied
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lower bound as written, without brackets or whitespace
    pub fn lower_text(&self) -> &str {
        &self.lower_text
    }

    /// Upper bound as written, without brackets or whitespace
    pub fn upper_text(&self) -> &str {
        &self.upper_text
    }

    /// Whether these are exactly the default `[-3.0, 1.0]` bounds
    pub fn is_default(&self) -> bool {
        self.lower == Self::DEFAULT_LOWER && self.upper == Self::DEFAULT_UPPER
    }
}

impl FromStr for SprtBounds {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SprtBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
#[path = "bounds_tests.rs"]
mod bounds_tests;
