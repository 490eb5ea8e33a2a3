//! Course persistence and niche catalog tests

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use coursegen::{
    save_courses, Config, CourseError, CourseGenerator, CourseSummary, GeneratedCourse,
    NicheCatalog, NicheDefinition, Tier, TierSelector,
};

fn sleep_niche() -> NicheDefinition {
    NicheCatalog::builtin()
        .get("sleep-optimization")
        .unwrap()
        .clone()
}

mod output_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip_equality() {
        let temp = TempDir::new().unwrap();
        let courses = CourseGenerator::default()
            .generate(&sleep_niche(), TierSelector::All)
            .unwrap();

        let paths = save_courses(&courses, temp.path()).unwrap();

        assert_eq!(paths.len(), 4);
        for (course, path) in courses.iter().zip(&paths) {
            let loaded = GeneratedCourse::from_json(path).unwrap();
            assert_eq!(&loaded, course);
        }
    }

    #[test]
    fn test_file_named_by_course_slug() {
        let temp = TempDir::new().unwrap();
        let courses = CourseGenerator::default()
            .generate(&sleep_niche(), TierSelector::One(Tier::Foundation))
            .unwrap();

        let paths = save_courses(&courses, temp.path()).unwrap();

        assert_eq!(
            paths,
            vec![temp
                .path()
                .join("sleep-optimization-foundation-certificate.json")]
        );
    }

    #[test]
    fn test_document_shape() {
        let temp = TempDir::new().unwrap();
        let courses = CourseGenerator::default()
            .generate(&sleep_niche(), TierSelector::One(Tier::MiniDiploma))
            .unwrap();
        let paths = save_courses(&courses, temp.path()).unwrap();

        let raw = fs::read_to_string(&paths[0]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["level"], "mini-diploma");
        assert!(value["course"]["shortDescription"].is_string());
        assert_eq!(value["niche"]["slug"], "sleep-optimization");
        assert!(value["generatedAt"].is_string());
        assert_eq!(value["modules"][0]["lessons"][0]["isFreePreview"], true);
        // Absent optionals are omitted rather than written as null
        assert!(value["niche"].get("rootCauses").is_none());
        assert!(value["modules"][0]["lessons"][1].get("isFreePreview").is_none());
    }

    #[test]
    fn test_regenerate_overwrites() {
        let temp = TempDir::new().unwrap();
        let generator = CourseGenerator::default();
        let selector = TierSelector::One(Tier::IncomeAccelerator);

        let first = generator.generate(&sleep_niche(), selector).unwrap();
        save_courses(&first, temp.path()).unwrap();

        let mut niche = sleep_niche();
        niche.average_client_price = Some("$400".to_string());
        let second = generator.generate(&niche, selector).unwrap();
        let paths = save_courses(&second, temp.path()).unwrap();

        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
        assert_eq!(GeneratedCourse::from_json(&paths[0]).unwrap(), second[0]);
    }

    #[test]
    fn test_summary_from_course() {
        let courses = CourseGenerator::default()
            .generate(&sleep_niche(), TierSelector::One(Tier::PractitionerBundle))
            .unwrap();
        let summary = CourseSummary::from(&courses[0]);

        assert_eq!(summary.level, Tier::PractitionerBundle);
        assert_eq!(summary.slug, "sleep-optimization-practitioner-bundle");
        assert_eq!(summary.modules, 21);
        assert_eq!(summary.lessons, 105);
        assert_eq!(summary.price, 997);
    }
}

mod catalog_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_niche_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("output");
        let catalog = NicheCatalog::default();

        let result = catalog.get("nonexistent-niche").map(|niche| {
            let courses = CourseGenerator::default()
                .generate(niche, TierSelector::All)
                .unwrap();
            save_courses(&courses, &output).unwrap()
        });

        assert!(matches!(result, Err(CourseError::Configuration(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_catalog_file_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("niches.json");

        NicheCatalog::builtin().write_json(&path).unwrap();
        let loaded = NicheCatalog::from_json(&path).unwrap();

        assert_eq!(loaded, NicheCatalog::builtin());
        assert!(loaded.validate().is_empty());
    }

    #[test]
    fn test_missing_catalog_file_uses_builtin() {
        let temp = TempDir::new().unwrap();
        let catalog = NicheCatalog::load_or_builtin(temp.path().join("missing.json")).unwrap();
        assert!(catalog.get("gut-health").is_ok());
    }

    #[test]
    fn test_config_defaults_drive_generation() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".coursegen.config.json");
        fs::write(
            &path,
            r#"{"defaults": {"foundation": {"rootCauses": ["Circadian Disruption"]}}}"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        let courses = CourseGenerator::new(config.defaults)
            .generate(&sleep_niche(), TierSelector::One(Tier::Foundation))
            .unwrap();

        assert_eq!(
            courses[0].modules[2].title,
            "Root Cause #1: Circadian Disruption"
        );
        assert_eq!(courses[0].modules[3].title, "Root Cause #2: Hormonal Imbalance");
    }
}
