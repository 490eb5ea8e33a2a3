//! @acp:module "Course Output"
//! @acp:summary "Persist generated courses as one JSON file per course"
//! @acp:domain curriculum
//! @acp:layer io
//!
//! Files are named `<course-slug>.json` so regenerating a niche and tier
//! overwrites the previous file. Each course is serialized fully in memory
//! and written with one call; the first failure aborts the batch.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::course::{GeneratedCourse, Tier};
use crate::error::Result;

/// @acp:summary "Write courses to `output_dir`, returning paths in input order"
pub fn save_courses<P: AsRef<Path>>(
    courses: &[GeneratedCourse],
    output_dir: P,
) -> Result<Vec<PathBuf>> {
    let output_dir = output_dir.as_ref();
    // create_dir_all succeeds if the directory already exists
    std::fs::create_dir_all(output_dir)?;

    let mut paths = Vec::with_capacity(courses.len());
    for course in courses {
        let path = output_dir.join(course.file_name());
        course.write_json(&path)?;
        tracing::info!("Wrote {}", path.display());
        paths.push(path);
    }

    Ok(paths)
}

/// Display summary of a generated course
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub level: Tier,
    pub title: String,
    pub slug: String,
    pub modules: usize,
    pub lessons: usize,
    pub price: u32,
}

impl From<&GeneratedCourse> for CourseSummary {
    fn from(course: &GeneratedCourse) -> Self {
        Self {
            level: course.level,
            title: course.course.title.clone(),
            slug: course.course.slug.clone(),
            modules: course.modules.len(),
            lessons: course.lesson_count(),
            price: course.course.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::TierSelector;
    use crate::error::CourseError;
    use crate::generate::CourseGenerator;
    use crate::niche::NicheCatalog;
    use tempfile::TempDir;

    #[test]
    fn test_creates_nested_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a").join("b");
        let niche = NicheCatalog::builtin().get("sleep-optimization").unwrap().clone();
        let courses = CourseGenerator::default()
            .generate(&niche, TierSelector::All)
            .unwrap();

        let paths = save_courses(&courses, &dir).unwrap();

        assert_eq!(paths.len(), 4);
        assert_eq!(paths[0], dir.join("sleep-optimization-mini-diploma.json"));
        assert!(paths.iter().all(|p| p.exists()));
        // Second run into the existing directory
        assert!(save_courses(&courses, &dir).is_ok());
    }

    #[test]
    fn test_two_space_indentation() {
        let temp = TempDir::new().unwrap();
        let niche = NicheCatalog::builtin().get("gut-health").unwrap().clone();
        let courses = CourseGenerator::default()
            .generate(&niche, TierSelector::All)
            .unwrap();

        let paths = save_courses(&courses[..1], temp.path()).unwrap();
        let content = std::fs::read_to_string(&paths[0]).unwrap();

        assert!(content.starts_with("{\n  \"level\": \"mini-diploma\""));
    }

    #[test]
    fn test_write_failure_aborts() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let niche = NicheCatalog::builtin().get("gut-health").unwrap().clone();
        let courses = CourseGenerator::default()
            .generate(&niche, TierSelector::All)
            .unwrap();

        let err = save_courses(&courses, &blocker).unwrap_err();
        assert!(matches!(err, CourseError::Io(_)));

        let written: Vec<_> = std::fs::read_dir(temp.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        assert!(written.is_empty());
    }

    #[test]
    fn test_write_failure_stops_batch() {
        let temp = TempDir::new().unwrap();
        let niche = NicheCatalog::builtin().get("gut-health").unwrap().clone();
        let courses = CourseGenerator::default()
            .generate(&niche, TierSelector::All)
            .unwrap();
        // A directory where the second course file should go makes that write fail
        std::fs::create_dir(temp.path().join(courses[1].file_name())).unwrap();

        let err = save_courses(&courses, temp.path()).unwrap_err();
        assert!(matches!(err, CourseError::Io(_)));

        assert!(temp.path().join(courses[0].file_name()).is_file());
        assert!(!temp.path().join(courses[2].file_name()).exists());
        assert!(!temp.path().join(courses[3].file_name()).exists());
    }

    #[test]
    fn test_summary() {
        let niche = NicheCatalog::builtin().get("gut-health").unwrap().clone();
        let courses = CourseGenerator::default()
            .generate(&niche, TierSelector::All)
            .unwrap();
        let summary = CourseSummary::from(&courses[1]);

        assert_eq!(summary.level, Tier::Foundation);
        assert_eq!(summary.modules, 15);
        assert_eq!(summary.lessons, 90);
        assert_eq!(summary.price, 197);
    }
}
