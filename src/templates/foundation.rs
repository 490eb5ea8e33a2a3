//! Foundation certificate template: the mid-size certification

use super::TierTemplate;
use crate::course::{CourseInfo, CourseOutline, LessonTemplate as L, ModuleTemplate, Tier};
use crate::defaults::TierDefaults;
use crate::niche::NicheDefinition;
use crate::resolve::{resolve_foundation, resolve_positional, FoundationConfig};

const PRICE: u32 = 197;
const DURATION: u32 = 36000;

/// Foundation certificate template - 15 modules, 90 lessons
pub struct FoundationTemplate;

impl TierTemplate for FoundationTemplate {
    fn tier(&self) -> Tier {
        Tier::Foundation
    }

    fn render(&self, niche: &NicheDefinition, defaults: &TierDefaults) -> CourseOutline {
        foundation(&resolve_foundation(niche, &defaults.foundation))
    }
}

pub fn foundation(config: &FoundationConfig) -> CourseOutline {
    let n = config.niche;
    let name = &n.name;
    let category = &n.category;
    let audience = &n.target_audience;
    let benefit = &n.key_benefit;
    let problem = &n.primary_problem;

    let cause1 = resolve_positional(config.root_causes, 0, "Inflammation");
    let cause2 = resolve_positional(config.root_causes, 1, "Hormonal Imbalance");
    let cause3 = resolve_positional(config.root_causes, 2, "Lifestyle Factors");
    let method1 = resolve_positional(config.assessment_methods, 0, "Client Intake Interview");
    let method2 = resolve_positional(config.assessment_methods, 1, "Symptom Tracking");
    let approach1 = resolve_positional(config.treatment_approaches, 0, "Nutrition Strategies");
    let approach2 = resolve_positional(config.treatment_approaches, 1, "Lifestyle Modification");
    let population = resolve_positional(config.special_populations, 0, "Special Populations");

    let course = CourseInfo {
        title: format!("{name} Foundation Certificate™"),
        slug: Tier::Foundation.course_slug(&n.slug),
        description: format!(
            "The complete foundation for {name} coaching. Master the root causes of {problem}, \
             learn evidence-informed assessment and intervention strategies, and graduate ready \
             to help {audience} achieve {benefit}."
        ),
        short_description: format!(
            "Become a certified {name} coach and help {audience} achieve {benefit}."
        ),
        price: PRICE,
        duration: DURATION,
    };

    let modules = vec![
        ModuleTemplate::assessed(
            1,
            format!("Welcome to {name} Coaching"),
            format!("Orientation to the {name} Foundation Certificate and the role of a {name} coach."),
            vec![
                L::video(
                    format!("Welcome to the {name} Foundation Certificate"),
                    format!(
                        "What you will learn, how the certificate works, and how this training \
                         prepares you to help {audience}."
                    ),
                    10,
                )
                .free_preview(),
                L::video(
                    format!("The Role of a {name} Coach"),
                    format!("Where coaching fits alongside medical care, and how coaches help clients achieve {benefit}."),
                    12,
                ),
                L::video(
                    "Understanding Your Ideal Client",
                    format!("A closer look at {audience} and the challenges they face every day."),
                    10,
                ),
                L::text(
                    "Scope of Practice Essentials",
                    format!("What a {name} coach can and cannot do, and when to refer a client to a medical provider."),
                    8,
                ),
                L::video(
                    "How to Get the Most From This Course",
                    "Study strategies, community resources and how the module assessments work.",
                    6,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            2,
            format!("Foundations of {category}"),
            format!("The core science underpinning {category} and how it relates to {problem}."),
            vec![
                L::video(
                    format!("Core Concepts of {category}"),
                    format!("The essential principles every {name} coach needs to understand."),
                    14,
                ),
                L::video(
                    format!("The Body Systems Behind {name}"),
                    "How the major body systems interact, and why symptoms rarely have a single cause.",
                    14,
                ),
                L::video(
                    "What Goes Wrong: Understanding the Problem",
                    format!("How {problem} develops and why it persists without targeted support."),
                    12,
                ),
                L::video(
                    "Signs, Symptoms and Patterns",
                    format!("Recognizing the symptom patterns most common among {audience}."),
                    10,
                ),
                L::text(
                    "Key Terms Glossary",
                    format!("A reference guide to the terminology used throughout {name} coaching."),
                    8,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            3,
            format!("Root Cause #1: {cause1}"),
            format!("How {cause1} contributes to {problem}."),
            vec![
                L::video(
                    format!("Understanding {cause1}"),
                    format!("What {cause1} is, how it develops, and why it matters for {name}."),
                    12,
                ),
                L::video(
                    format!("How {cause1} Shows Up in Clients"),
                    format!("The signs that {cause1} is playing a role in a client's symptoms."),
                    10,
                ),
                L::video(
                    format!("Coaching Strategies for {cause1}"),
                    format!("Practical, in-scope strategies to help clients address {cause1}."),
                    12,
                ),
                L::text(
                    format!("Case Study: {cause1}"),
                    format!("Follow a client whose {problem} was driven largely by {cause1}."),
                    8,
                ),
                L::video(
                    "Common Mistakes to Avoid",
                    format!("Where new coaches go wrong when addressing {cause1}, and how to avoid it."),
                    8,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            4,
            format!("Root Cause #2: {cause2}"),
            format!("How {cause2} contributes to {problem}."),
            vec![
                L::video(
                    format!("Understanding {cause2}"),
                    format!("What {cause2} is and how it interacts with other root causes."),
                    12,
                ),
                L::video(
                    format!("Identifying {cause2}"),
                    format!("Questions, patterns and history clues that point to {cause2}."),
                    10,
                ),
                L::video(
                    format!("Coaching Strategies for {cause2}"),
                    format!("Step-by-step support strategies that address {cause2} safely."),
                    12,
                ),
                L::text(
                    format!("Case Study: {cause2}"),
                    format!("How one client achieved {benefit} by addressing {cause2}."),
                    8,
                ),
                L::video(
                    "When Root Causes Overlap",
                    format!("Untangling cases where {cause2} and {cause1} appear together."),
                    8,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            5,
            format!("Root Cause #3: {cause3}"),
            format!("How {cause3} contributes to {problem}."),
            vec![
                L::video(
                    format!("Understanding {cause3}"),
                    format!("Why {cause3} is so often overlooked in {name}."),
                    12,
                ),
                L::video(
                    format!("Spotting {cause3} in Everyday Life"),
                    format!("The daily routines and habits that reveal {cause3}."),
                    10,
                ),
                L::video(
                    format!("Coaching Strategies for {cause3}"),
                    format!("Sustainable changes that reduce the impact of {cause3}."),
                    12,
                ),
                L::text(
                    format!("Case Study: {cause3}"),
                    format!("A real-world example of {cause3} driving {problem}."),
                    8,
                ),
                L::video(
                    "Building a Root Cause Map",
                    format!("Bringing {cause1}, {cause2} and {cause3} together into one client picture."),
                    10,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            6,
            "Assessment Fundamentals",
            format!("How to gather the information you need to support {audience}."),
            vec![
                L::video(
                    "Principles of Client Assessment",
                    "Why thorough assessment comes before any recommendation.",
                    10,
                ),
                L::video(
                    format!("Using {method1}"),
                    format!("A step-by-step walkthrough of {method1} with a new client."),
                    14,
                ),
                L::video(
                    "Interpreting What You Find",
                    format!("Turning {method1} results into clear coaching priorities."),
                    12,
                ),
                L::text(
                    "Red Flags and Referral Criteria",
                    "Findings that require a referral to a licensed medical professional.",
                    8,
                ),
                L::video(
                    "Documenting Client Progress",
                    "Simple record-keeping that keeps clients accountable and you organized.",
                    8,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            7,
            format!("Advanced Assessment: {method2}"),
            format!("Adding {method2} to your assessment toolkit."),
            vec![
                L::video(
                    format!("Introduction to {method2}"),
                    format!("When {method2} adds value and how it complements {method1}."),
                    10,
                ),
                L::video(
                    format!("Running {method2} With Clients"),
                    format!("A practical guide to using {method2} in your sessions."),
                    12,
                ),
                L::video(
                    "Spotting Patterns Over Time",
                    format!("Using {method2} to track progress toward {benefit}."),
                    10,
                ),
                L::text(
                    "Assessment Templates",
                    "Ready-to-use intake and tracking templates for your practice.",
                    6,
                ),
                L::video(
                    "Assessment Case Walkthrough",
                    format!("A complete assessment of a client presenting with {problem}."),
                    14,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            8,
            format!("Intervention Strategy: {approach1}"),
            format!("Applying {approach1} to help clients overcome {problem}."),
            vec![
                L::video(
                    format!("The Foundations of {approach1}"),
                    format!("The principles behind {approach1} and why it works."),
                    12,
                ),
                L::video(
                    format!("Designing {approach1} for Each Client"),
                    "Personalizing recommendations to a client's history and goals.",
                    12,
                ),
                L::video(
                    "Implementation Step by Step",
                    format!("Introducing {approach1} gradually so clients stay consistent."),
                    10,
                ),
                L::text(
                    format!("{approach1} Resource Guide"),
                    format!("Handouts and checklists to support {approach1} between sessions."),
                    6,
                ),
                L::video(
                    "Troubleshooting Plateaus",
                    format!("What to adjust when {approach1} stops producing results."),
                    10,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            9,
            format!("Intervention Strategy: {approach2}"),
            format!("Using {approach2} to create lasting change."),
            vec![
                L::video(
                    format!("The Foundations of {approach2}"),
                    format!("How {approach2} supports {benefit}."),
                    12,
                ),
                L::video(
                    format!("Combining {approach1} and {approach2}"),
                    "Layering interventions without overwhelming the client.",
                    12,
                ),
                L::video(
                    format!("Coaching Clients Through {approach2}"),
                    format!("Conversations and check-ins that keep {approach2} on track."),
                    10,
                ),
                L::text(
                    format!("{approach2} Action Plans"),
                    format!("Sample action plans built around {approach2}."),
                    6,
                ),
                L::video(
                    "Measuring Results",
                    "Tracking outcomes so clients can see their progress.",
                    8,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            10,
            "Nutrition and Lifestyle Foundations",
            format!("Everyday foundations that support {benefit}."),
            vec![
                L::video(
                    format!("Nutrition Principles for {name}"),
                    format!("Core nutrition principles that matter most for {audience}."),
                    14,
                ),
                L::video(
                    "Sleep, Stress and Recovery",
                    format!("How sleep and stress influence {problem}."),
                    12,
                ),
                L::video(
                    "Movement and Daily Rhythms",
                    "Using movement and daily routines to support lasting results.",
                    10,
                ),
                L::text(
                    "Environmental Factors",
                    "Home, work and environmental influences worth reviewing with clients.",
                    8,
                ),
                L::video(
                    "Creating a Foundations Checklist",
                    "A simple checklist you can use with every new client.",
                    8,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            11,
            "Mindset, Habits and Behavior Change",
            "Helping clients turn knowledge into consistent action.",
            vec![
                L::video(
                    "The Psychology of Change",
                    format!("Why {audience} often know what to do but struggle to do it."),
                    12,
                ),
                L::video(
                    "Habit Stacking and Small Wins",
                    "Building momentum with changes clients can sustain.",
                    10,
                ),
                L::video(
                    "Overcoming Resistance",
                    "Coaching techniques for clients who feel stuck or discouraged.",
                    10,
                ),
                L::text(
                    "Motivational Interviewing Basics",
                    "Question frameworks that help clients find their own motivation.",
                    8,
                ),
                L::video(
                    "Celebrating Progress",
                    format!("Keeping clients engaged on the journey to {benefit}."),
                    6,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            12,
            format!("Working With {population}"),
            format!("Adapting {name} coaching for {population}."),
            vec![
                L::video(
                    format!("Unique Needs of {population}"),
                    format!("How {problem} presents differently in {population}."),
                    12,
                ),
                L::video(
                    format!("Adjusting Assessment for {population}"),
                    format!("Modifying {method1} and {method2} for this group."),
                    10,
                ),
                L::video(
                    "Safe and Appropriate Recommendations",
                    format!("Which strategies to adapt or avoid when working with {population}."),
                    12,
                ),
                L::text(
                    format!("Case Study: {population}"),
                    format!("Supporting a client from {population} toward {benefit}."),
                    8,
                ),
                L::video(
                    "Collaborating With Other Providers",
                    "Working alongside physicians and specialists as part of a care team.",
                    8,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            13,
            "Building a Client Protocol",
            "Bringing assessment and intervention together into a personalized plan.",
            vec![
                L::video(
                    "Protocol Design Principles",
                    "Sequencing recommendations so clients are never overwhelmed.",
                    12,
                ),
                L::video(
                    "The First 30 Days",
                    format!("A sample first-month protocol for a client with {problem}."),
                    12,
                ),
                L::video(
                    "Adjusting the Protocol",
                    "Using follow-up data to refine your recommendations.",
                    10,
                ),
                L::text(
                    "Protocol Templates",
                    format!("Customizable {name} protocol templates for your practice."),
                    6,
                ),
                L::video(
                    "Full Protocol Walkthrough",
                    format!("From intake to results: a complete {name} client journey."),
                    14,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            14,
            "Client Communication and Coaching Skills",
            "The conversation skills that make clients feel heard and supported.",
            vec![
                L::video(
                    "Active Listening",
                    "Techniques for understanding what clients really need.",
                    10,
                ),
                L::video(
                    "Explaining Complex Ideas Simply",
                    format!("Translating {category} science into plain language."),
                    10,
                ),
                L::video(
                    "Running Effective Sessions",
                    "A session structure that keeps clients moving forward.",
                    12,
                ),
                L::text(
                    "Handling Difficult Conversations",
                    "Scripts for setbacks, missed goals and sensitive topics.",
                    8,
                ),
                L::video(
                    "Building Long-Term Client Relationships",
                    "Creating trust that leads to renewals and referrals.",
                    8,
                ),
            ],
        ),
        ModuleTemplate::new(
            "Certification and Next Steps",
            format!("Complete your final exam and become a certified {name} coach."),
            vec![
                L::video(
                    "Putting It All Together",
                    format!("A guided review of the complete {name} coaching framework."),
                    12,
                ),
                L::video(
                    "Your First Client Roadmap",
                    format!("Practical steps for enrolling and supporting your first {name} clients."),
                    10,
                ),
                L::text(
                    "Foundation Certificate Review",
                    "Key concepts from every module, summarized for exam preparation.",
                    15,
                ),
                L::quiz(
                    "Foundation Certificate Final Exam",
                    format!("A comprehensive exam covering all fifteen modules of the {name} Foundation Certificate."),
                ),
                L::text(
                    "Access Your Foundation Certificate",
                    format!("Download your {name} Foundation Certificate™ and add your credential to your profiles."),
                    2,
                ),
                L::video(
                    "Next Steps: The Practitioner Path",
                    format!("How the {name} Practitioner Bundle extends your skills to advanced and master level."),
                    8,
                ),
            ],
        ),
    ];

    CourseOutline { course, modules }
}
