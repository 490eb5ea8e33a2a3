//! @acp:module "Default Resolver"
//! @acp:summary "Field-level merge of niche overrides with tier defaults"
//! @acp:domain curriculum
//! @acp:layer service
//!
//! Each optional field resolves independently: the niche value wins whenever
//! it is present, even if it is an empty list, and the default is used only
//! when the field is absent. Lists are never padded from the defaults; short
//! lists are handled at render time by [`resolve_positional`].

use crate::defaults::{BundleDefaults, FoundationDefaults, IncomeDefaults};
use crate::niche::NicheDefinition;

/// Mini-diploma input: required fields only
#[derive(Debug, Clone, Copy)]
pub struct MiniDiplomaConfig<'a> {
    pub niche: &'a NicheDefinition,
}

/// Foundation certificate input
#[derive(Debug, Clone, Copy)]
pub struct FoundationConfig<'a> {
    pub niche: &'a NicheDefinition,
    pub root_causes: &'a [String],
    pub assessment_methods: &'a [String],
    pub treatment_approaches: &'a [String],
    pub special_populations: &'a [String],
}

/// Practitioner bundle input
#[derive(Debug, Clone, Copy)]
pub struct BundleConfig<'a> {
    pub niche: &'a NicheDefinition,
    pub advanced_topics: &'a [String],
    pub master_topics: &'a [String],
    pub specializations: &'a [String],
}

/// Income accelerator input
#[derive(Debug, Clone, Copy)]
pub struct IncomeConfig<'a> {
    pub niche: &'a NicheDefinition,
    pub average_client_price: &'a str,
    pub potential_monthly_income: &'a str,
    pub typical_client_problems: &'a [String],
    pub service_formats: &'a [String],
}

fn list_or<'a>(value: &'a Option<Vec<String>>, default: &'a [String]) -> &'a [String] {
    value.as_deref().unwrap_or(default)
}

// Blank scalars count as absent, like blank list entries
fn scalar_or<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    match value.as_deref() {
        Some(value) if !value.trim().is_empty() => value,
        _ => default,
    }
}

pub fn resolve_mini_diploma(niche: &NicheDefinition) -> MiniDiplomaConfig<'_> {
    MiniDiplomaConfig { niche }
}

pub fn resolve_foundation<'a>(
    niche: &'a NicheDefinition,
    defaults: &'a FoundationDefaults,
) -> FoundationConfig<'a> {
    FoundationConfig {
        niche,
        root_causes: list_or(&niche.root_causes, &defaults.root_causes),
        assessment_methods: list_or(&niche.assessment_methods, &defaults.assessment_methods),
        treatment_approaches: list_or(&niche.treatment_approaches, &defaults.treatment_approaches),
        special_populations: list_or(&niche.special_populations, &defaults.special_populations),
    }
}

pub fn resolve_bundle<'a>(
    niche: &'a NicheDefinition,
    defaults: &'a BundleDefaults,
) -> BundleConfig<'a> {
    BundleConfig {
        niche,
        advanced_topics: list_or(&niche.advanced_topics, &defaults.advanced_topics),
        master_topics: list_or(&niche.master_topics, &defaults.master_topics),
        specializations: list_or(&niche.specializations, &defaults.specializations),
    }
}

pub fn resolve_income<'a>(
    niche: &'a NicheDefinition,
    defaults: &'a IncomeDefaults,
) -> IncomeConfig<'a> {
    IncomeConfig {
        niche,
        average_client_price: scalar_or(&niche.average_client_price, &defaults.average_client_price),
        potential_monthly_income: scalar_or(
            &niche.potential_monthly_income,
            &defaults.potential_monthly_income,
        ),
        typical_client_problems: list_or(
            &niche.typical_client_problems,
            &defaults.typical_client_problems,
        ),
        service_formats: list_or(&niche.service_formats, &defaults.service_formats),
    }
}

/// @acp:summary "Entry at `index`, or `fallback` when missing or blank"
pub fn resolve_positional<'a>(list: &'a [String], index: usize, fallback: &'a str) -> &'a str {
    match list.get(index) {
        Some(value) if !value.trim().is_empty() => value.as_str(),
        _ => fallback,
    }
}

/// Join non-blank entries with commas, or `fallback` if nothing remains
pub fn join_or(list: &[String], fallback: &str) -> String {
    let items: Vec<&str> = list
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}
