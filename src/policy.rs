use serde::{Deserialize, Serialize};

/// Case normalization applied once to the finished ID.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CasePolicy {
    #[default]
    Unrestricted,
    UpperOnly,
    LowerOnly,
}

/// Character class an ID is restricted to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Composition {
    #[default]
    #[serde(rename = "unrestricted")]
    Unrestricted,
    #[serde(rename = "char_only")]
    AlphaOnly,
    #[serde(rename = "digit_only")]
    NumericOnly,
    #[serde(rename = "alphanumeric_only")]
    AlphanumericOnly,
}

impl CasePolicy {
    /// Map every character to the policy's case.
    ///
    /// Characters whose mapping expands to more than one character (`ß` ->
    /// `SS`) are kept as-is so the character count never changes.
    pub fn apply(self, s: &str) -> String {
        match self {
            Self::Unrestricted => s.to_string(),
            Self::UpperOnly => s.chars().map(|c| single(c, c.to_uppercase())).collect(),
            Self::LowerOnly => s.chars().map(|c| single(c, c.to_lowercase())).collect(),
        }
    }
}

fn single(original: char, mut mapped: impl ExactSizeIterator<Item = char>) -> char {
    if mapped.len() == 1 {
        mapped.next().unwrap_or(original)
    } else {
        original
    }
}

impl Composition {
    /// Returns true if `c` belongs to this character class.
    pub const fn allows(self, c: char) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::AlphaOnly => c.is_ascii_alphabetic(),
            Self::NumericOnly => c.is_ascii_digit(),
            Self::AlphanumericOnly => c.is_ascii_alphanumeric(),
        }
    }

    /// Drop every character outside the class, keeping the rest in order.
    pub fn apply(self, s: &str) -> String {
        match self {
            Self::Unrestricted => s.to_string(),
            _ => s.chars().filter(|&c| self.allows(c)).collect(),
        }
    }
}

pub fn apply_case(s: &str, policy: CasePolicy) -> String {
    policy.apply(s)
}

pub fn apply_composition(s: &str, policy: Composition) -> String {
    policy.apply(s)
}
