#![forbid(unsafe_code)]

//! @acp:module "Coursegen Library"
//! @acp:summary "Tiered niche curriculum synthesis"
//! @acp:domain curriculum
//! @acp:layer api
//! @acp:stability stable
//!
//! # Coursegen
//!
//! Synthesizes a four-tier course ladder (mini-diploma, foundation
//! certificate, practitioner bundle, income accelerator) from a small
//! niche definition, and persists each course as one JSON document.
//!
//! ## Example
//!
//! ```rust,no_run
//! use coursegen::{save_courses, CourseGenerator, NicheCatalog, TierSelector};
//!
//! fn main() -> anyhow::Result<()> {
//!     let catalog = NicheCatalog::builtin();
//!     let niche = catalog.get("gut-health")?;
//!
//!     let courses = CourseGenerator::default().generate(niche, TierSelector::All)?;
//!     save_courses(&courses, "./output")?;
//!
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod course;
pub mod defaults;
pub mod error;
pub mod generate;
pub mod niche;
pub mod output;
pub mod resolve;
pub mod templates;

pub use config::Config;
pub use course::{
    CourseInfo, CourseOutline, GeneratedCourse, LessonTemplate, LessonType, ModuleTemplate, Tier,
    TierSelector,
};
pub use defaults::TierDefaults;
pub use error::{CourseError, Result};
pub use generate::CourseGenerator;
pub use niche::{NicheCatalog, NicheDefinition};
pub use output::{save_courses, CourseSummary};
