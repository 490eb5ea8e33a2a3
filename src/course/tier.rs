//! @acp:module "Tier Types"
//! @acp:summary "Course product tiers and the tier selector"
//! @acp:domain curriculum
//! @acp:layer model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CourseError;

/// The four course products, in generation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    MiniDiploma,
    Foundation,
    PractitionerBundle,
    IncomeAccelerator,
}

impl Tier {
    /// Get all tiers in fixed output order
    pub fn all() -> &'static [Tier] {
        &[
            Tier::MiniDiploma,
            Tier::Foundation,
            Tier::PractitionerBundle,
            Tier::IncomeAccelerator,
        ]
    }

    /// Label stored in the envelope's `level` field
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::MiniDiploma => "mini-diploma",
            Tier::Foundation => "foundation",
            Tier::PractitionerBundle => "practitioner-bundle",
            Tier::IncomeAccelerator => "income-accelerator",
        }
    }

    /// Suffix appended to the niche slug to form the course slug
    pub fn slug_suffix(&self) -> &'static str {
        match self {
            Tier::MiniDiploma => "mini-diploma",
            Tier::Foundation => "foundation-certificate",
            Tier::PractitionerBundle => "practitioner-bundle",
            Tier::IncomeAccelerator => "income-accelerator",
        }
    }

    /// Get the human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Tier::MiniDiploma => "Mini-Diploma",
            Tier::Foundation => "Foundation Certificate",
            Tier::PractitionerBundle => "Practitioner Bundle",
            Tier::IncomeAccelerator => "Income Accelerator",
        }
    }

    /// Build the course slug for a niche slug
    pub fn course_slug(&self, niche_slug: &str) -> String {
        format!("{}-{}", niche_slug, self.slug_suffix())
    }

    /// Whether lesson 1 of module 1 is offered as a free preview
    pub fn has_free_preview(&self) -> bool {
        matches!(self, Tier::MiniDiploma | Tier::Foundation)
    }

    /// Parse tier name from string
    pub fn from_name(name: &str) -> Option<Tier> {
        match name.trim().to_lowercase().as_str() {
            "mini-diploma" => Some(Tier::MiniDiploma),
            "foundation" => Some(Tier::Foundation),
            "practitioner-bundle" => Some(Tier::PractitionerBundle),
            "income-accelerator" => Some(Tier::IncomeAccelerator),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which tiers a generation run should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TierSelector {
    #[default]
    All,
    One(Tier),
}

impl TierSelector {
    /// Tiers implied by this selector, in fixed output order
    pub fn tiers(&self) -> Vec<Tier> {
        match self {
            TierSelector::All => Tier::all().to_vec(),
            TierSelector::One(tier) => vec![*tier],
        }
    }
}

impl FromStr for TierSelector {
    type Err = CourseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(TierSelector::All);
        }
        Tier::from_name(s)
            .map(TierSelector::One)
            .ok_or_else(|| CourseError::UnknownTier(s.to_string()))
    }
}

impl From<Tier> for TierSelector {
    fn from(tier: Tier) -> Self {
        TierSelector::One(tier)
    }
}

impl fmt::Display for TierSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierSelector::All => write!(f, "all"),
            TierSelector::One(tier) => write!(f, "{}", tier),
        }
    }
}
