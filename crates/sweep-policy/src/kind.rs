//! Runtime policy selection by name.

use crate::{ColumnSweep, ReverseRowSweep, RowSweep, Spiral, TraversalPolicy};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// The built-in traversal policies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// [`RowSweep`].
    #[default]
    RowSweep,
    /// [`ReverseRowSweep`].
    ReverseRowSweep,
    /// [`ColumnSweep`].
    ColumnSweep,
    /// [`Spiral`].
    Spiral,
}

impl PolicyKind {
    /// Every built-in policy, in presentation order.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::RowSweep,
        PolicyKind::ReverseRowSweep,
        PolicyKind::ColumnSweep,
        PolicyKind::Spiral,
    ];

    /// Short name accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyKind::RowSweep => "row",
            PolicyKind::ReverseRowSweep => "reverse-row",
            PolicyKind::ColumnSweep => "column",
            PolicyKind::Spiral => "spiral",
        }
    }

    /// Instantiate the policy.
    pub fn build(self) -> Box<dyn TraversalPolicy> {
        match self {
            PolicyKind::RowSweep => Box::new(RowSweep),
            PolicyKind::ReverseRowSweep => Box::new(ReverseRowSweep),
            PolicyKind::ColumnSweep => Box::new(ColumnSweep),
            PolicyKind::Spiral => Box::new(Spiral),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a policy name is not recognised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsePolicyError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParsePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = PolicyKind::ALL.iter().map(|k| k.as_str()).collect();
        write!(
            f,
            "unknown policy '{}' (expected one of: {})",
            self.input,
            names.join(", ")
        )
    }
}

impl Error for ParsePolicyError {}

impl FromStr for PolicyKind {
    type Err = ParsePolicyError;

    /// Case-insensitive; accepts the short name, the `-sweep` suffixed
    /// form, and underscores in place of hyphens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace('_', "-");
        let norm = norm.strip_suffix("-sweep").unwrap_or(&norm);
        match norm {
            "row" => Ok(PolicyKind::RowSweep),
            "reverse-row" | "reverse" => Ok(PolicyKind::ReverseRowSweep),
            "column" | "col" => Ok(PolicyKind::ColumnSweep),
            "spiral" => Ok(PolicyKind::Spiral),
            _ => Err(ParsePolicyError {
                input: s.to_string(),
            }),
        }
    }
}
