//! Questionnaire answer value objects
//!
//! Each enum has a canonical wire value (used in config files, JSON and
//! CLI flags) and a human-readable label for display.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Skin type reported by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    Oily,
    Dry,
    Combination,
}

impl SkinType {
    pub const ALL: [SkinType; 3] = [SkinType::Oily, SkinType::Dry, SkinType::Combination];

    /// Canonical wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            SkinType::Oily => "oily",
            SkinType::Dry => "dry",
            SkinType::Combination => "combination",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkinType::Oily => "Oily",
            SkinType::Dry => "Dry",
            SkinType::Combination => "Combination",
        }
    }
}

impl std::fmt::Display for SkinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SkinType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "oily" => Ok(SkinType::Oily),
            "dry" => Ok(SkinType::Dry),
            "combination" => Ok(SkinType::Combination),
            _ => Err(DomainError::invalid("skin type", s)),
        }
    }
}

/// Primary skin concern
///
/// `None` is a real answer: the user has no specific concern and gets no
/// treatment step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Concern {
    Acne,
    Hyperpigmentation,
    Wrinkles,
    None,
}

impl Concern {
    pub const ALL: [Concern; 4] = [
        Concern::Acne,
        Concern::Hyperpigmentation,
        Concern::Wrinkles,
        Concern::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Concern::Acne => "acne",
            Concern::Hyperpigmentation => "hyperpigmentation",
            Concern::Wrinkles => "wrinkles",
            Concern::None => "none",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Concern::Acne => "Acne",
            Concern::Hyperpigmentation => "Hyperpigmentation",
            Concern::Wrinkles => "Wrinkles",
            Concern::None => "None",
        }
    }

    /// Whether this concern calls for a dedicated treatment product
    pub fn needs_treatment(&self) -> bool {
        !matches!(self, Concern::None)
    }
}

impl std::fmt::Display for Concern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Concern {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "acne" => Ok(Concern::Acne),
            "hyperpigmentation" => Ok(Concern::Hyperpigmentation),
            "wrinkles" => Ok(Concern::Wrinkles),
            "none" => Ok(Concern::None),
            _ => Err(DomainError::invalid("concern", s)),
        }
    }
}

/// Budget bracket in rupees
///
/// Older stored answers spell these without underscores (`below500`,
/// `500to1000`, `1000to2000`); both spellings are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Budget {
    #[serde(rename = "below_500", alias = "below500")]
    Below500,
    #[serde(rename = "500_to_1000", alias = "500to1000")]
    From500To1000,
    #[serde(rename = "1000_to_2000", alias = "1000to2000")]
    From1000To2000,
}

impl Budget {
    pub const ALL: [Budget; 3] = [Budget::Below500, Budget::From500To1000, Budget::From1000To2000];

    pub fn as_str(&self) -> &'static str {
        match self {
            Budget::Below500 => "below_500",
            Budget::From500To1000 => "500_to_1000",
            Budget::From1000To2000 => "1000_to_2000",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Budget::Below500 => "Below Rs. 500",
            Budget::From500To1000 => "Rs. 500 - 1000",
            Budget::From1000To2000 => "Rs. 1000 - 2000",
        }
    }
}

impl std::fmt::Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Budget {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "below_500" | "below500" => Ok(Budget::Below500),
            "500_to_1000" | "500to1000" => Ok(Budget::From500To1000),
            "1000_to_2000" | "1000to2000" => Ok(Budget::From1000To2000),
            _ => Err(DomainError::invalid("budget", s)),
        }
    }
}
