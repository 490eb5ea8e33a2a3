//! Course generation tests
//!
//! End-to-end checks of the generator across all four tiers.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use coursegen::{
    CourseError, CourseGenerator, GeneratedCourse, NicheCatalog, NicheDefinition, Tier,
    TierSelector,
};

fn gut_health() -> NicheDefinition {
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

fn generate_all(niche: &NicheDefinition) -> Vec<GeneratedCourse> {
    let at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
    CourseGenerator::default()
        .generate_at(niche, TierSelector::All, at)
        .unwrap()
}

fn text_fields(course: &GeneratedCourse) -> Vec<&str> {
    let mut fields = vec![
        course.course.title.as_str(),
        course.course.slug.as_str(),
        course.course.description.as_str(),
        course.course.short_description.as_str(),
    ];
    for module in &course.modules {
        fields.push(&module.title);
        fields.push(&module.description);
        for lesson in &module.lessons {
            fields.push(&lesson.title);
            fields.push(&lesson.description);
        }
    }
    fields
}

// =============================================================================
// Scenarios
// =============================================================================

mod scenario_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_gut_health_mini_diploma() {
        let courses = CourseGenerator::default()
            .generate(&gut_health(), TierSelector::One(Tier::MiniDiploma))
            .unwrap();

        assert_eq!(courses.len(), 1);
        let course = &courses[0];
        assert_eq!(course.level, Tier::MiniDiploma);
        assert_eq!(course.course.title, "Gut Health Foundations Mini-Diploma");
        assert_eq!(course.course.price, 27);
        assert_eq!(course.course.duration, 2700);
        assert_eq!(course.modules.len(), 3);
        assert_eq!(course.modules[0].lessons[0].is_free_preview, Some(true));
    }

    #[test]
    fn test_all_tiers_in_order() {
        let courses = generate_all(&gut_health());
        let levels: Vec<Tier> = courses.iter().map(|c| c.level).collect();
        assert_eq!(levels, Tier::all().to_vec());
    }

    #[test]
    fn test_builtin_niches_generate() {
        let catalog = NicheCatalog::builtin();
        for (key, niche) in catalog.iter() {
            let courses = generate_all(niche);
            assert_eq!(courses.len(), 4, "niche {key}");
        }
    }

    #[test]
    fn test_invalid_niche_rejected() {
        let mut niche = gut_health();
        niche.slug = "Gut Health".to_string();

        let err = CourseGenerator::default()
            .generate(&niche, TierSelector::All)
            .unwrap_err();
        assert!(matches!(err, CourseError::Validation { .. }));
    }

    #[test]
    fn test_unknown_level_rejected() {
        let err = "platinum".parse::<TierSelector>().unwrap_err();
        assert!(matches!(err, CourseError::UnknownTier(ref name) if name == "platinum"));
    }
}

// =============================================================================
// Structural properties
// =============================================================================

mod structure_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_module_and_lesson_counts() {
        let expected = [
            (Tier::MiniDiploma, 3, 9),
            (Tier::Foundation, 15, 90),
            (Tier::PractitionerBundle, 21, 105),
            (Tier::IncomeAccelerator, 15, 85),
        ];
        let courses = generate_all(&gut_health());

        for (course, (tier, modules, lessons)) in courses.iter().zip(expected) {
            assert_eq!(course.level, tier);
            assert_eq!(course.modules.len(), modules, "{tier} modules");
            assert_eq!(course.lesson_count(), lessons, "{tier} lessons");
        }
    }

    #[test]
    fn test_fixed_prices() {
        let prices: Vec<u32> = generate_all(&gut_health())
            .iter()
            .map(|c| c.course.price)
            .collect();
        assert_eq!(prices, vec![27, 197, 997, 497]);
    }

    #[test]
    fn test_slug_derivation() {
        let slugs: Vec<String> = generate_all(&gut_health())
            .into_iter()
            .map(|c| c.course.slug)
            .collect();
        assert_eq!(
            slugs,
            vec![
                "gut-health-mini-diploma",
                "gut-health-foundation-certificate",
                "gut-health-practitioner-bundle",
                "gut-health-income-accelerator",
            ]
        );
    }

    #[test]
    fn test_free_preview_placement() {
        for course in generate_all(&gut_health()) {
            let previews: Vec<(usize, usize)> = course
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

            if course.level.has_free_preview() {
                assert_eq!(previews, vec![(0, 0)], "{}", course.level);
            } else {
                assert!(previews.is_empty(), "{}", course.level);
            }
        }
    }

    #[test]
    fn test_only_quizzes_have_zero_duration() {
        for course in generate_all(&gut_health()) {
            for module in &course.modules {
                for lesson in &module.lessons {
                    assert_eq!(
                        lesson.duration == 0,
                        lesson.is_quiz(),
                        "{}: {}",
                        course.level,
                        lesson.title
                    );
                }
            }
        }
    }

    #[test]
    fn test_assessed_modules_end_with_quiz() {
        for course in generate_all(&gut_health()) {
            let (last, assessed) = course.modules.split_last().unwrap();
            for module in assessed {
                assert!(module.ends_with_quiz(), "{}: {}", course.level, module.title);
            }
            assert!(!last.lessons.is_empty());
        }
    }
}

// =============================================================================
// Determinism and isolation
// =============================================================================

mod purity_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generation_is_deterministic() {
        let niche = gut_health();
        assert_eq!(generate_all(&niche), generate_all(&niche));
    }

    #[test]
    fn test_timestamp_recorded() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        for course in generate_all(&gut_health()) {
            assert_eq!(course.generated_at, at);
        }
    }

    #[test]
    fn test_advanced_topics_only_affect_bundle() {
        let base = gut_health();
        let mut enriched = gut_health();
        enriched.advanced_topics = Some(vec![
            "SIBO and Dysbiosis".to_string(),
            "The Gut-Brain Axis".to_string(),
        ]);

        let before = generate_all(&base);
        let after = generate_all(&enriched);

        for (a, b) in before.iter().zip(&after) {
            if a.level == Tier::PractitionerBundle {
                let changed: Vec<usize> = (0..a.modules.len())
                    .filter(|&i| a.modules[i] != b.modules[i])
                    .collect();
                assert_eq!(changed, vec![1, 2, 3, 4, 5, 13]);
                assert_eq!(a.course, b.course);
            } else {
                assert_eq!(a.course, b.course, "{}", a.level);
                assert_eq!(a.modules, b.modules, "{}", a.level);
            }
        }
    }

    #[test]
    fn test_income_fields_only_affect_income() {
        let base = gut_health();
        let mut enriched = gut_health();
        enriched.average_client_price = Some("$400".to_string());

        let before = generate_all(&base);
        let after = generate_all(&enriched);

        for (a, b) in before.iter().zip(&after) {
            if a.level == Tier::IncomeAccelerator {
                assert_ne!(a.modules, b.modules);
            } else {
                assert_eq!(a.modules, b.modules, "{}", a.level);
            }
        }
    }
}

// =============================================================================
// Default fallback
// =============================================================================

mod fallback_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_blank_or_undefined_text() {
        for course in generate_all(&gut_health()) {
            for field in text_fields(&course) {
                assert!(!field.trim().is_empty(), "{}: blank field", course.level);
                assert!(!field.contains("undefined"), "{}: {field}", course.level);
            }
        }
    }

    #[test]
    fn test_defaults_fill_absent_lists() {
        let courses = generate_all(&gut_health());

        let foundation = &courses[1];
        assert_eq!(foundation.modules[2].title, "Root Cause #1: Chronic Stress");
        assert_eq!(foundation.modules[3].title, "Root Cause #2: Nutritional Deficiencies");
        assert_eq!(foundation.modules[4].title, "Root Cause #3: Lifestyle Factors");

        let income = &courses[3];
        assert_eq!(income.modules[13].title, "Scaling to $5,000-$10,000 per Month");
    }

    #[test]
    fn test_short_list_not_padded_from_defaults() {
        let mut niche = gut_health();
        niche.root_causes = Some(vec!["Estrogen Dominance".to_string()]);

        let foundation = &generate_all(&niche)[1];
        assert_eq!(foundation.modules[2].title, "Root Cause #1: Estrogen Dominance");
        assert_eq!(foundation.modules[3].title, "Root Cause #2: Hormonal Imbalance");
        assert_eq!(foundation.modules[4].title, "Root Cause #3: Lifestyle Factors");
    }

    #[test]
    fn test_empty_list_uses_positional_fallbacks() {
        let mut niche = gut_health();
        niche.root_causes = Some(Vec::new());
        niche.service_formats = Some(vec!["   ".to_string()]);

        let courses = generate_all(&niche);
        assert_eq!(courses[1].modules[2].title, "Root Cause #1: Inflammation");
        assert_eq!(
            courses[3].modules[3].title,
            "Service Format: 1:1 Coaching Packages"
        );
        for course in &courses {
            for field in text_fields(course) {
                assert!(!field.trim().is_empty());
            }
        }
    }

    #[test]
    fn test_blank_income_scalars_use_defaults() {
        let mut niche = gut_health();
        niche.average_client_price = Some(String::new());
        niche.potential_monthly_income = Some("  ".to_string());

        let courses = CourseGenerator::default()
            .generate(&niche, TierSelector::One(Tier::IncomeAccelerator))
            .unwrap();
        let income = &courses[0];

        for field in text_fields(income) {
            assert!(!field.contains("  "), "gap in: {field}");
            assert!(!field.contains(" ."), "gap in: {field}");
        }
        assert_eq!(income.modules[2].lessons[0].title, "Pricing Your Services at $150-$300");
        assert_eq!(income.modules[13].title, "Scaling to $5,000-$10,000 per Month");
    }
}
