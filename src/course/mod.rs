//! @acp:module "Course"
//! @acp:summary "Course structures and product tiers"
//! @acp:domain curriculum
//! @acp:layer model

pub mod tier;
pub mod types;

pub use tier::{Tier, TierSelector};
pub use types::{
    CourseInfo, CourseOutline, GeneratedCourse, LessonTemplate, LessonType, ModuleTemplate,
};
