//! Mini-diploma template: the short lead-magnet course

use super::TierTemplate;
use crate::course::{CourseInfo, CourseOutline, LessonTemplate, ModuleTemplate, Tier};
use crate::defaults::TierDefaults;
use crate::niche::NicheDefinition;
use crate::resolve::{resolve_mini_diploma, MiniDiplomaConfig};

const PRICE: u32 = 27;
const DURATION: u32 = 2700;

/// Mini-diploma template - 3 modules, 9 lessons
pub struct MiniDiplomaTemplate;

impl TierTemplate for MiniDiplomaTemplate {
    fn tier(&self) -> Tier {
        Tier::MiniDiploma
    }

    fn render(&self, niche: &NicheDefinition, _defaults: &TierDefaults) -> CourseOutline {
        mini_diploma(&resolve_mini_diploma(niche))
    }
}

pub fn mini_diploma(config: &MiniDiplomaConfig) -> CourseOutline {
    let n = config.niche;
    let name = &n.name;
    let audience = &n.target_audience;
    let benefit = &n.key_benefit;
    let problem = &n.primary_problem;

    let course = CourseInfo {
        title: format!("{name} Foundations Mini-Diploma"),
        slug: Tier::MiniDiploma.course_slug(&n.slug),
        description: format!(
            "A fast, practical introduction to {name} coaching. Learn why {audience} struggle with \
             {problem}, and discover a simple framework for helping them achieve {benefit}."
        ),
        short_description: format!(
            "Your first step toward becoming a certified {name} coach."
        ),
        price: PRICE,
        duration: DURATION,
    };

    let modules = vec![
        ModuleTemplate::assessed(
            1,
            format!("Understanding {name}"),
            format!("What {name} coaching is and why it matters for {audience}."),
            vec![
                LessonTemplate::video(
                    format!("Welcome to Your {name} Mini-Diploma"),
                    format!(
                        "Discover how {name} coaching helps {audience} achieve {benefit}, \
                         and what you will learn in this mini-diploma."
                    ),
                    12,
                )
                .free_preview(),
                LessonTemplate::video(
                    "The Root Causes Behind the Symptoms",
                    format!(
                        "Why {problem} keeps showing up for {audience}, and what is really \
                         driving it beneath the surface."
                    ),
                    8,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            2,
            format!("The {name} Coaching Approach"),
            format!("A simple, repeatable process for guiding clients toward {benefit}."),
            vec![LessonTemplate::video(
                format!("The 3-Step {name} Framework"),
                format!(
                    "Assess, educate and support: a practical framework you can use to guide \
                     clients from {problem} toward {benefit}."
                ),
                11,
            )],
        ),
        ModuleTemplate::new(
            "Certification & Next Steps",
            format!("Complete your exam and claim your {name} Mini-Diploma."),
            vec![
                LessonTemplate::text(
                    "Mini-Diploma Review",
                    format!("A concise recap of the key {name} concepts before your final exam."),
                    7,
                ),
                LessonTemplate::quiz(
                    "Mini-Diploma Final Exam",
                    format!("Demonstrate your understanding of {name} foundations to earn your mini-diploma."),
                ),
                LessonTemplate::text(
                    "Access Your Mini-Diploma Certificate",
                    format!("Download your {name} Foundations Mini-Diploma certificate and share your achievement."),
                    2,
                ),
                LessonTemplate::video(
                    format!("Your Next Steps: Becoming a Certified {name} Coach"),
                    format!(
                        "How the {name} Foundation Certificate builds on what you have learned \
                         and prepares you to work with paying clients."
                    ),
                    5,
                ),
            ],
        ),
    ];

    CourseOutline { course, modules }
}
