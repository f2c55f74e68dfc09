//! Delivery modality of a program.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How a program is delivered.
///
/// The canonical spellings are the ones stored in the data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modality {
    /// In-person delivery.
    Presencial,
    /// Remote delivery.
    Virtual,
    /// Mixed in-person and remote delivery.
    Mixta,
}

impl Modality {
    pub const ALL: [Modality; 3] = [Modality::Presencial, Modality::Virtual, Modality::Mixta];

    /// Returns the canonical string as stored in data files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Presencial => "Presencial",
            Modality::Virtual => "Virtual",
            Modality::Mixta => "Mixta",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a canonical modality.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown modality '{0}'")]
pub struct ParseModalityError(pub String);

impl FromStr for Modality {
    type Err = ParseModalityError;

    /// Exact, case-sensitive match on the canonical spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Modality::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ParseModalityError(s.to_string()))
    }
}

/// The set of modality strings a catalog accepts.
///
/// Defaults to the three [`Modality`] spellings; a deployment may inject a
/// different set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalitySet {
    allowed: BTreeSet<String>,
}

impl ModalitySet {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Case-sensitive membership test.
    pub fn contains(&self, value: &str) -> bool {
        self.allowed.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

impl Default for ModalitySet {
    fn default() -> Self {
        Self::new(Modality::ALL.iter().map(Modality::as_str))
    }
}

impl fmt::Display for ModalitySet {
    /// Sorted, comma-separated list.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self.iter().collect::<Vec<_>>().join(", ");
        f.write_str(&joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_spelling_only() {
        assert_eq!("Mixta".parse::<Modality>(), Ok(Modality::Mixta));
        assert!("mixta".parse::<Modality>().is_err());
        assert!(" Virtual".parse::<Modality>().is_err());
    }

    #[test]
    fn default_set_lists_sorted() {
        let set = ModalitySet::default();
        assert!(set.contains("Presencial"));
        assert!(!set.contains("presencial"));
        assert_eq!(set.to_string(), "Mixta, Presencial, Virtual");
    }

    #[test]
    fn custom_set_replaces_defaults() {
        let set = ModalitySet::new(["Online"]);
        assert!(set.contains("Online"));
        assert!(!set.contains("Mixta"));
    }
}
