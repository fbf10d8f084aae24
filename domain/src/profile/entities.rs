//! Skin profile and its presence state

use super::value_objects::{Budget, Concern, SkinType};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The three questionnaire answers that drive recommendations (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinProfile {
    pub skin_type: SkinType,
    pub concern: Concern,
    pub budget: Budget,
}

impl SkinProfile {
    pub fn new(skin_type: SkinType, concern: Concern, budget: Budget) -> Self {
        Self {
            skin_type,
            concern,
            budget,
        }
    }

    /// Build a profile from raw questionnaire answers.
    ///
    /// Blank answers are reported before invalid ones, in field order
    /// (skin type, concern, budget).
    pub fn from_answers(skin_type: &str, concern: &str, budget: &str) -> Result<Self, DomainError> {
        for (field, answer) in [
            ("skin type", skin_type),
            ("concern", concern),
            ("budget", budget),
        ] {
            if answer.trim().is_empty() {
                return Err(DomainError::MissingAnswer(field));
            }
        }

        Ok(Self {
            skin_type: skin_type.parse()?,
            concern: concern.parse()?,
            budget: budget.parse()?,
        })
    }
}

impl std::fmt::Display for SkinProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} skin, concern: {}, budget: {}",
            self.skin_type.label(),
            self.concern.label(),
            self.budget.label()
        )
    }
}

/// Whether the user has completed the questionnaire
///
/// `Absent` is the normal state before the first submission. Callers
/// branch on it explicitly instead of invoking the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", content = "profile", rename_all = "lowercase")]
pub enum ProfileState {
    Present(SkinProfile),
    #[default]
    Absent,
}

impl ProfileState {
    pub fn is_present(&self) -> bool {
        matches!(self, ProfileState::Present(_))
    }

    pub fn profile(&self) -> Option<&SkinProfile> {
        match self {
            ProfileState::Present(profile) => Some(profile),
            ProfileState::Absent => None,
        }
    }
}

impl From<Option<SkinProfile>> for ProfileState {
    fn from(profile: Option<SkinProfile>) -> Self {
        match profile {
            Some(profile) => ProfileState::Present(profile),
            None => ProfileState::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_answers_valid() {
        let profile = SkinProfile::from_answers("oily", "acne", "below500").unwrap();
        assert_eq!(
            profile,
            SkinProfile::new(SkinType::Oily, Concern::Acne, Budget::Below500)
        );
    }

    #[test]
    fn test_from_answers_reports_first_blank_field() {
        assert_eq!(
            SkinProfile::from_answers("", "", "below_500"),
            Err(DomainError::MissingAnswer("skin type"))
        );
        assert_eq!(
            SkinProfile::from_answers("dry", "  ", ""),
            Err(DomainError::MissingAnswer("concern"))
        );
        assert_eq!(
            SkinProfile::from_answers("dry", "none", ""),
            Err(DomainError::MissingAnswer("budget"))
        );
    }

    #[test]
    fn test_from_answers_blank_wins_over_invalid() {
        let err = SkinProfile::from_answers("normal", "acne", "").unwrap_err();
        assert!(err.is_missing_answer());
    }

    #[test]
    fn test_from_answers_invalid_value() {
        let err = SkinProfile::from_answers("dry", "acne", "free").unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidEnumValue {
                field: "budget",
                value: "free".to_string()
            }
        );
    }

    #[test]
    fn test_profile_json_uses_camel_case() {
        let profile = SkinProfile::new(SkinType::Dry, Concern::Wrinkles, Budget::From500To1000);
        let json = serde_json::to_value(profile).unwrap();
        assert_eq!(json["skinType"], "dry");
        assert_eq!(json["concern"], "wrinkles");
        assert_eq!(json["budget"], "500_to_1000");
    }

    #[test]
    fn test_display() {
        let profile = SkinProfile::new(SkinType::Oily, Concern::None, Budget::Below500);
        assert_eq!(
            profile.to_string(),
            "Oily skin, concern: None, budget: Below Rs. 500"
        );
    }

    #[test]
    fn test_profile_state() {
        let profile = SkinProfile::new(SkinType::Oily, Concern::Acne, Budget::Below500);
        let present = ProfileState::from(Some(profile));
        assert!(present.is_present());
        assert_eq!(present.profile(), Some(&profile));

        let absent = ProfileState::from(None::<SkinProfile>);
        assert!(!absent.is_present());
        assert_eq!(absent.profile(), None);
        assert_eq!(ProfileState::default(), ProfileState::Absent);
    }
}
