//! @acp:module "Course Types"
//! @acp:summary "Lesson, module and course structures serialized to course JSON files"
//! @acp:domain curriculum
//! @acp:layer model
//!
//! These types serialize directly to/from `<course-slug>.json`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::tier::Tier;
use crate::error::Result;
use crate::niche::NicheDefinition;

/// Lesson delivery format; absent means video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LessonType {
    Video,
    Text,
    Quiz,
}

/// @acp:summary "A single lesson inside a module"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonTemplate {
    pub title: String,
    pub description: String,
    /// Runtime in seconds; 0 marks an assessment with no fixed runtime
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_free_preview: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_type: Option<LessonType>,
}

impl LessonTemplate {
    /// Video lesson of the given length in minutes
    pub fn video(title: impl Into<String>, description: impl Into<String>, minutes: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            duration: minutes * 60,
            is_free_preview: None,
            lesson_type: None,
        }
    }

    /// Reading lesson of the given length in minutes
    pub fn text(title: impl Into<String>, description: impl Into<String>, minutes: u32) -> Self {
        Self {
            lesson_type: Some(LessonType::Text),
            ..Self::video(title, description, minutes)
        }
    }

    /// Zero-duration quiz
    pub fn quiz(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            lesson_type: Some(LessonType::Quiz),
            ..Self::video(title, description, 0)
        }
    }

    /// Trailing quiz for a non-final module
    pub fn assessment(module_number: usize) -> Self {
        Self::quiz(
            format!("Module {} Assessment", module_number),
            format!(
                "Check your understanding of the key concepts from Module {}.",
                module_number
            ),
        )
    }

    /// Mark this lesson as the free preview
    pub fn free_preview(mut self) -> Self {
        self.is_free_preview = Some(true);
        self
    }

    pub fn is_quiz(&self) -> bool {
        self.lesson_type == Some(LessonType::Quiz)
    }
}

/// @acp:summary "An ordered group of lessons"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleTemplate {
    pub title: String,
    pub description: String,
    pub lessons: Vec<LessonTemplate>,
}

impl ModuleTemplate {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        lessons: Vec<LessonTemplate>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            lessons,
        }
    }

    /// Non-final module: the given lessons followed by "Module N Assessment"
    pub fn assessed(
        number: usize,
        title: impl Into<String>,
        description: impl Into<String>,
        mut lessons: Vec<LessonTemplate>,
    ) -> Self {
        lessons.push(LessonTemplate::assessment(number));
        Self::new(title, description, lessons)
    }

    /// Whether the module ends with a quiz lesson
    pub fn ends_with_quiz(&self) -> bool {
        self.lessons.last().is_some_and(LessonTemplate::is_quiz)
    }
}

/// @acp:summary "Catalog-facing course metadata"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInfo {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub short_description: String,
    pub price: u32,
    /// Authored total runtime in seconds
    pub duration: u32,
}

/// @acp:summary "A tier template's output: course metadata plus its modules"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseOutline {
    pub course: CourseInfo,
    pub modules: Vec<ModuleTemplate>,
}

impl CourseOutline {
    pub fn lesson_count(&self) -> usize {
        self.modules.iter().map(|m| m.lessons.len()).sum()
    }

    /// Iterate every lesson in course order
    pub fn lessons(&self) -> impl Iterator<Item = &LessonTemplate> {
        self.modules.iter().flat_map(|m| m.lessons.iter())
    }
}

/// @acp:summary "Tier-labeled, timestamped course envelope written to disk"
/// @acp:lock normal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCourse {
    pub level: Tier,
    pub course: CourseInfo,
    pub modules: Vec<ModuleTemplate>,
    /// The input niche, kept for provenance
    pub niche: NicheDefinition,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedCourse {
    pub fn new(
        level: Tier,
        outline: CourseOutline,
        niche: NicheDefinition,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            level,
            course: outline.course,
            modules: outline.modules,
            niche,
            generated_at,
        }
    }

    /// @acp:summary "Load a course from a JSON file"
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let course = serde_json::from_reader(reader)?;
        Ok(course)
    }

    /// @acp:summary "Write the course as pretty JSON in a single write"
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Output file name, `<course-slug>.json`
    pub fn file_name(&self) -> String {
        format!("{}.json", self.course.slug)
    }

    pub fn lesson_count(&self) -> usize {
        self.modules.iter().map(|m| m.lessons.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_video_lesson_omits_optional_fields() {
        let lesson = LessonTemplate::video("Welcome", "Start here", 10);
        let json = serde_json::to_value(&lesson).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "title": "Welcome",
                "description": "Start here",
                "duration": 600
            })
        );
    }

    #[test]
    fn test_quiz_and_preview_serialization() {
        let quiz = serde_json::to_value(LessonTemplate::assessment(3)).unwrap();
        assert_eq!(quiz["title"], "Module 3 Assessment");
        assert_eq!(quiz["duration"], 0);
        assert_eq!(quiz["lessonType"], "QUIZ");

        let preview =
            serde_json::to_value(LessonTemplate::text("Intro", "Read", 5).free_preview()).unwrap();
        assert_eq!(preview["isFreePreview"], true);
        assert_eq!(preview["lessonType"], "TEXT");
    }

    #[test]
    fn test_assessed_module_appends_quiz() {
        let module = ModuleTemplate::assessed(
            2,
            "Basics",
            "The basics",
            vec![LessonTemplate::video("One", "First", 8)],
        );

        assert_eq!(module.lessons.len(), 2);
        assert!(module.ends_with_quiz());
        assert_eq!(module.lessons[1].title, "Module 2 Assessment");
    }
}
