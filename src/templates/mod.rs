//! @acp:module "Tier Templates"
//! @acp:summary "Fixed module/lesson skeletons for each course tier"
//! @acp:domain curriculum
//! @acp:layer service
//!
//! Each template is a pure function from a resolved tier config to a
//! [`CourseOutline`]. Module and lesson order is part of the template and is
//! never rearranged afterwards.
//!
//! Conventions shared by all tiers:
//! - every module except the last ends with a zero-length `Module N Assessment` quiz
//! - the last module closes with review, final exam, certificate access and next steps
//! - only mini-diploma and foundation mark lesson 1 of module 1 as a free preview

mod foundation;
mod income_accelerator;
mod mini_diploma;
mod practitioner_bundle;

pub use foundation::{foundation, FoundationTemplate};
pub use income_accelerator::{income_accelerator, IncomeAcceleratorTemplate};
pub use mini_diploma::{mini_diploma, MiniDiplomaTemplate};
pub use practitioner_bundle::{practitioner_bundle, PractitionerBundleTemplate};

use crate::course::{CourseOutline, Tier};
use crate::defaults::TierDefaults;
use crate::niche::NicheDefinition;

/// Tier template trait - implement for each course product
pub trait TierTemplate: Send + Sync {
    /// Get the tier identifier
    fn tier(&self) -> Tier;

    /// Resolve this tier's config from the niche and defaults, then render it
    fn render(&self, niche: &NicheDefinition, defaults: &TierDefaults) -> CourseOutline;
}

/// Built-in template for a tier
pub fn template_for(tier: Tier) -> &'static dyn TierTemplate {
    match tier {
        Tier::MiniDiploma => &MiniDiplomaTemplate,
        Tier::Foundation => &FoundationTemplate,
        Tier::PractitionerBundle => &PractitionerBundleTemplate,
        Tier::IncomeAccelerator => &IncomeAcceleratorTemplate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::LessonType;

    pub(super) fn gut_health() -> NicheDefinition {
        NicheDefinition::new(
            "Gut Health",
            "gut-health",
            "Gut Health",
            "gut-health",
            "women struggling with digestive issues",
            "restored gut health and vitality",
            "bloating, IBS, and digestive dysfunction",
        )
    }

    fn render(tier: Tier) -> CourseOutline {
        template_for(tier).render(&gut_health(), &TierDefaults::default())
    }

    #[test]
    fn test_template_for_matches_tier() {
        for tier in Tier::all() {
            assert_eq!(template_for(*tier).tier(), *tier);
        }
    }

    #[test]
    fn test_structural_counts() {
        let expected = [
            (Tier::MiniDiploma, 3, 9),
            (Tier::Foundation, 15, 90),
            (Tier::PractitionerBundle, 21, 105),
            (Tier::IncomeAccelerator, 15, 85),
        ];
        for (tier, modules, lessons) in expected {
            let outline = render(tier);
            assert_eq!(outline.modules.len(), modules, "{tier} modules");
            assert_eq!(outline.lesson_count(), lessons, "{tier} lessons");
        }
    }

    #[test]
    fn test_assessment_convention() {
        for tier in Tier::all() {
            let outline = render(*tier);
            let last = outline.modules.len() - 1;

            for (i, module) in outline.modules.iter().enumerate() {
                assert!(!module.lessons.is_empty());
                let tail = module.lessons.last().unwrap();
                if i == last {
                    assert!(!module.ends_with_quiz(), "{tier} final module");
                    assert!(module.lessons.iter().any(|l| l.is_quiz()));
                } else {
                    assert_eq!(tail.title, format!("Module {} Assessment", i + 1));
                    assert_eq!(tail.duration, 0);
                    assert_eq!(tail.lesson_type, Some(LessonType::Quiz));
                }
            }
        }
    }

    #[test]
    fn test_free_preview_only_first_lesson() {
        for tier in Tier::all() {
            let outline = render(*tier);
            let previews: Vec<(usize, usize)> = outline
                .modules
                .iter()
                .enumerate()
                .flat_map(|(m, module)| {
                    module
                        .lessons
                        .iter()
                        .enumerate()
                        .filter(|(_, l)| l.is_free_preview == Some(true))
                        .map(move |(l, _)| (m, l))
                })
                .collect();

            if tier.has_free_preview() {
                assert_eq!(previews, vec![(0, 0)], "{tier}");
            } else {
                assert!(previews.is_empty(), "{tier}");
                assert!(outline.lessons().all(|l| l.is_free_preview.is_none()));
            }
        }
    }

    #[test]
    fn test_only_quizzes_have_zero_duration() {
        for tier in Tier::all() {
            for lesson in render(*tier).lessons() {
                assert_eq!(lesson.duration == 0, lesson.is_quiz(), "{}", lesson.title);
            }
        }
    }

    #[test]
    fn test_slug_and_price_per_tier() {
        let expected = [
            (Tier::MiniDiploma, "gut-health-mini-diploma", 27, 2700),
            (Tier::Foundation, "gut-health-foundation-certificate", 197, 36000),
            (Tier::PractitionerBundle, "gut-health-practitioner-bundle", 997, 75600),
            (Tier::IncomeAccelerator, "gut-health-income-accelerator", 497, 32400),
        ];
        for (tier, slug, price, duration) in expected {
            let course = render(tier).course;
            assert_eq!(course.slug, slug);
            assert_eq!(course.price, price);
            assert_eq!(course.duration, duration);
            assert!(course.title.contains("Gut Health"));
        }
    }
}
