//! @acp:module "Niche"
//! @acp:summary "Niche parameter model and catalog lookup"
//! @acp:domain curriculum
//! @acp:layer model
//!
//! A niche is the only input to course generation. Required fields are
//! rendered verbatim into every tier; optional enrichment lists are consumed
//! by specific tiers and fall back to the tier defaults when absent.

pub mod catalog;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CourseError, Result};

pub use catalog::NicheCatalog;

/// Lowercase, hyphen-delimited identifier
static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

/// @acp:summary "Immutable description of a coaching/health niche"
/// @acp:lock normal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheDefinition {
    pub name: String,
    /// URL-safe identifier, unique across niches
    pub slug: String,
    pub category: String,
    pub category_slug: String,
    pub target_audience: String,
    pub key_benefit: String,
    pub primary_problem: String,

    // Foundation tier enrichment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_causes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_methods: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treatment_approaches: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_populations: Option<Vec<String>>,

    // Practitioner bundle enrichment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced_topics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_topics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specializations: Option<Vec<String>>,

    // Income accelerator enrichment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_client_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potential_monthly_income: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typical_client_problems: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_formats: Option<Vec<String>>,
}

impl NicheDefinition {
    /// @acp:summary "Create a niche with only the required fields set"
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        category: impl Into<String>,
        category_slug: impl Into<String>,
        target_audience: impl Into<String>,
        key_benefit: impl Into<String>,
        primary_problem: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            category: category.into(),
            category_slug: category_slug.into(),
            target_audience: target_audience.into(),
            key_benefit: key_benefit.into(),
            primary_problem: primary_problem.into(),
            root_causes: None,
            assessment_methods: None,
            treatment_approaches: None,
            special_populations: None,
            advanced_topics: None,
            master_topics: None,
            specializations: None,
            average_client_price: None,
            potential_monthly_income: None,
            typical_client_problems: None,
            service_formats: None,
        }
    }

    /// @acp:summary "Reject niches with blank required fields or malformed slugs"
    ///
    /// Required fields are never replaced with placeholder text, so a niche
    /// that fails here cannot be generated.
    pub fn validate(&self) -> Result<()> {
        let label = if self.slug.trim().is_empty() {
            self.name.as_str()
        } else {
            self.slug.as_str()
        };

        let required = [
            ("name", &self.name),
            ("slug", &self.slug),
            ("category", &self.category),
            ("categorySlug", &self.category_slug),
            ("targetAudience", &self.target_audience),
            ("keyBenefit", &self.key_benefit),
            ("primaryProblem", &self.primary_problem),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CourseError::validation(
                    label,
                    format!("required field '{}' is empty", field),
                ));
            }
        }

        for (field, value) in [("slug", &self.slug), ("categorySlug", &self.category_slug)] {
            if !is_valid_slug(value) {
                return Err(CourseError::validation(
                    label,
                    format!(
                        "{} '{}' must be lowercase and hyphen-delimited",
                        field, value
                    ),
                ));
            }
        }

        Ok(())
    }
}

/// Check that a slug is lowercase alphanumerics separated by single hyphens
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_PATTERN.is_match(slug)
}
