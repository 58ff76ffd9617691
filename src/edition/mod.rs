//! Product editions and their static pricing, benefit and catalog tables

mod profile;
mod features;
mod catalog;

pub use profile::{
    EditionProfile, EditionPricing, DowntimeParams, BenefitDefaults, DiscountTier,
    VOLUME_DISCOUNT_TIERS, BASE_BLOCK_DEVICES,
};
pub use features::{BonusFeature, BonusContext};
pub use catalog::{Comparison, EditionCatalog, Recommendation};

use crate::error::RoiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product edition, ordered from least to most capable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Edition {
    Free,
    Professional,
    Enterprise,
    #[serde(rename = "UEM")]
    Uem,
    Security,
}

impl Edition {
    /// All editions in ascending order
    pub const ALL: [Edition; 5] = [
        Edition::Free,
        Edition::Professional,
        Edition::Enterprise,
        Edition::Uem,
        Edition::Security,
    ];

    /// Display name as used in reports and file names
    pub fn name(self) -> &'static str {
        match self {
            Edition::Free => "Free",
            Edition::Professional => "Professional",
            Edition::Enterprise => "Enterprise",
            Edition::Uem => "UEM",
            Edition::Security => "Security",
        }
    }

    /// Static pricing and benefit profile
    pub fn profile(self) -> &'static EditionProfile {
        profile::lookup(self)
    }

    /// Descriptive text (features, recommendations, report conclusion)
    pub fn catalog(self) -> &'static EditionCatalog {
        catalog::lookup(self)
    }

    /// Bonus features unlocked by this edition, in report order
    pub fn bonus_features(self) -> &'static [BonusFeature] {
        self.profile().bonus_features
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Edition {
    type Err = RoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Edition::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RoiError::UnknownEdition(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edition_names() {
        assert_eq!("uem".parse::<Edition>().unwrap(), Edition::Uem);
        assert_eq!(" Security ".parse::<Edition>().unwrap(), Edition::Security);
        assert_eq!("PROFESSIONAL".parse::<Edition>().unwrap(), Edition::Professional);
        assert!(matches!(
            "Ultimate".parse::<Edition>(),
            Err(RoiError::UnknownEdition(name)) if name == "Ultimate"
        ));
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Edition::Uem).unwrap();
        assert_eq!(json, "\"UEM\"");
        let parsed: Edition = serde_json::from_str("\"Enterprise\"").unwrap();
        assert_eq!(parsed, Edition::Enterprise);
    }

    #[test]
    fn test_bonus_features_are_strictly_nested() {
        for pair in Edition::ALL.windows(2) {
            let lower = pair[0].bonus_features();
            let higher = pair[1].bonus_features();
            assert!(lower.iter().all(|f| higher.contains(f)), "{} not within {}", pair[0], pair[1]);
            assert!(higher.len() > lower.len());
        }
        assert!(Edition::Free.bonus_features().is_empty());
        assert_eq!(Edition::Professional.bonus_features().len(), 2);
        assert_eq!(Edition::Enterprise.bonus_features().len(), 4);
        assert_eq!(Edition::Uem.bonus_features().len(), 6);
        assert_eq!(Edition::Security.bonus_features().len(), 9);
    }
}
