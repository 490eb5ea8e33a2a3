//! @acp:module "Tier Defaults"
//! @acp:summary "Read-only fallback tables for optional niche fields"
//! @acp:domain curriculum
//! @acp:layer config
//!
//! Every entry must read naturally for any niche, so none of these values
//! mention a specific health domain. Each table and each field can be
//! overridden from `.coursegen.config.json`; unspecified fields keep the
//! built-in value.

use serde::{Deserialize, Serialize};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// @acp:summary "Fallback tables for all tiers that consume optional fields"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TierDefaults {
    pub foundation: FoundationDefaults,
    pub bundle: BundleDefaults,
    pub income: IncomeDefaults,
}

/// Foundation certificate fallbacks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FoundationDefaults {
    pub root_causes: Vec<String>,
    pub assessment_methods: Vec<String>,
    pub treatment_approaches: Vec<String>,
    pub special_populations: Vec<String>,
}

impl Default for FoundationDefaults {
    fn default() -> Self {
        Self {
            root_causes: strings(&[
                "Chronic Stress",
                "Nutritional Deficiencies",
                "Lifestyle Factors",
            ]),
            assessment_methods: strings(&[
                "Comprehensive Intake Assessment",
                "Symptom and Habit Tracking",
            ]),
            treatment_approaches: strings(&[
                "Targeted Nutrition Protocols",
                "Lifestyle and Behavior Change",
            ]),
            special_populations: strings(&["Women in Midlife", "Older Adults"]),
        }
    }
}

/// Practitioner bundle fallbacks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BundleDefaults {
    pub advanced_topics: Vec<String>,
    pub master_topics: Vec<String>,
    pub specializations: Vec<String>,
}

impl Default for BundleDefaults {
    fn default() -> Self {
        Self {
            advanced_topics: strings(&[
                "Advanced Assessment Strategies",
                "Complex Case Management",
            ]),
            master_topics: strings(&[
                "Clinical Reasoning Frameworks",
                "Signature Program Design",
            ]),
            specializations: strings(&[
                "Women's Health",
                "Performance and Recovery",
                "Healthy Aging",
            ]),
        }
    }
}

/// Income accelerator fallbacks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IncomeDefaults {
    pub average_client_price: String,
    pub potential_monthly_income: String,
    pub typical_client_problems: Vec<String>,
    pub service_formats: Vec<String>,
}

impl Default for IncomeDefaults {
    fn default() -> Self {
        Self {
            average_client_price: "$150-$300".to_string(),
            potential_monthly_income: "$5,000-$10,000".to_string(),
            typical_client_problems: strings(&[
                "low energy",
                "stubborn symptoms",
                "confusing health advice",
            ]),
            service_formats: strings(&[
                "1:1 Coaching",
                "Group Programs",
                "Self-Paced Courses",
            ]),
        }
    }
}
