//! @acp:module "Course Generator"
//! @acp:summary "Orchestrates tier selection, default merging and envelope stamping"
//! @acp:domain curriculum
//! @acp:layer service
//!
//! ## Overview
//!
//! The generator validates a niche, renders every tier implied by the
//! selector, and wraps each outline in a [`GeneratedCourse`] envelope. All
//! envelopes from one call share a single `generatedAt` timestamp.
//!
//! Tiers render in parallel; the indexed collect keeps the fixed tier order
//! (mini-diploma, foundation, practitioner-bundle, income-accelerator).

use chrono::{DateTime, Utc};
use rayon::prelude::*;

use crate::course::{GeneratedCourse, Tier, TierSelector};
use crate::defaults::TierDefaults;
use crate::error::Result;
use crate::niche::NicheDefinition;
use crate::templates::template_for;

/// Main course generator - holds the read-only default tables
#[derive(Debug, Clone, Default)]
pub struct CourseGenerator {
    defaults: TierDefaults,
}

impl CourseGenerator {
    /// Create a generator with explicit default tables
    pub fn new(defaults: TierDefaults) -> Self {
        Self { defaults }
    }

    /// @acp:summary "Generate every tier implied by the selector"
    ///
    /// Fails with a validation error if the niche is missing a required field
    /// or has a malformed slug; optional data never causes a failure.
    pub fn generate(
        &self,
        niche: &NicheDefinition,
        selector: TierSelector,
    ) -> Result<Vec<GeneratedCourse>> {
        self.generate_at(niche, selector, Utc::now())
    }

    /// Same as [`generate`](Self::generate) with a caller-supplied timestamp
    pub fn generate_at(
        &self,
        niche: &NicheDefinition,
        selector: TierSelector,
        generated_at: DateTime<Utc>,
    ) -> Result<Vec<GeneratedCourse>> {
        niche.validate()?;

        let tiers = selector.tiers();
        tracing::debug!(
            "Generating {} tier(s) for niche '{}'",
            tiers.len(),
            niche.slug
        );

        let courses: Vec<GeneratedCourse> = tiers
            .par_iter()
            .map(|&tier| self.generate_tier(niche, tier, generated_at))
            .collect();

        Ok(courses)
    }

    fn generate_tier(
        &self,
        niche: &NicheDefinition,
        tier: Tier,
        generated_at: DateTime<Utc>,
    ) -> GeneratedCourse {
        let outline = template_for(tier).render(niche, &self.defaults);
        tracing::debug!(
            "Rendered {} ({} modules, {} lessons)",
            outline.course.slug,
            outline.modules.len(),
            outline.lesson_count()
        );
        GeneratedCourse::new(tier, outline, niche.clone(), generated_at)
    }
}
