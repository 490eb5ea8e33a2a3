//! Practitioner bundle template: advanced and master levels in one product
//!
//! Modules 1-10 form the advanced practitioner level, 11-20 the master
//! level, and module 21 is the combined certification. Advanced topics are
//! only referenced in modules 2-6 and 14.

use super::TierTemplate;
use crate::course::{CourseInfo, CourseOutline, LessonTemplate as L, ModuleTemplate, Tier};
use crate::defaults::TierDefaults;
use crate::niche::NicheDefinition;
use crate::resolve::{resolve_bundle, resolve_positional, BundleConfig};

const PRICE: u32 = 997;
const DURATION: u32 = 75600;

/// Practitioner bundle template - 21 modules, 105 lessons
pub struct PractitionerBundleTemplate;

impl TierTemplate for PractitionerBundleTemplate {
    fn tier(&self) -> Tier {
        Tier::PractitionerBundle
    }

    fn render(&self, niche: &NicheDefinition, defaults: &TierDefaults) -> CourseOutline {
        practitioner_bundle(&resolve_bundle(niche, &defaults.bundle))
    }
}

pub fn practitioner_bundle(config: &BundleConfig) -> CourseOutline {
    let n = config.niche;
    let name = &n.name;
    let category = &n.category;
    let audience = &n.target_audience;
    let benefit = &n.key_benefit;
    let problem = &n.primary_problem;

    let adv1 = resolve_positional(config.advanced_topics, 0, "Advanced Protocols");
    let adv2 = resolve_positional(config.advanced_topics, 1, "Complex Presentations");
    let master1 = resolve_positional(config.master_topics, 0, "Clinical Mastery");
    let master2 = resolve_positional(config.master_topics, 1, "Program Architecture");
    let spec1 = resolve_positional(config.specializations, 0, "Hormonal Health");
    let spec2 = resolve_positional(config.specializations, 1, "Performance Nutrition");
    let spec3 = resolve_positional(config.specializations, 2, "Longevity");

    let course = CourseInfo {
        title: format!("{name} Advanced & Master Practitioner Bundle™"),
        slug: Tier::PractitionerBundle.course_slug(&n.slug),
        description: format!(
            "Take your {name} practice to the highest level. This bundle combines the Advanced \
             Practitioner and Master Practitioner programs, with three specialization tracks, so \
             you can confidently support {audience} with even the most complex cases of {problem}."
        ),
        short_description: format!(
            "Advanced and master-level {name} training with specialization tracks."
        ),
        price: PRICE,
        duration: DURATION,
    };

    let modules = vec![
        // Advanced practitioner level
        ModuleTemplate::assessed(
            1,
            format!("Welcome to the {name} Practitioner Bundle"),
            "How the advanced and master levels fit together, and how to plan your studies.",
            vec![
                L::video(
                    "Welcome and Program Overview",
                    format!("What sets an advanced {name} practitioner apart, and what you will master here."),
                    12,
                ),
                L::video(
                    "From Coach to Practitioner",
                    "The mindset and skill shifts required to work with complex clients.",
                    10,
                ),
                L::text(
                    "Advanced Scope of Practice",
                    "Professional boundaries and referral pathways at the practitioner level.",
                    8,
                ),
                L::video(
                    "Your Study and Case Log Plan",
                    "Setting up the case log you will build throughout this bundle.",
                    8,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            2,
            format!("Advanced Foundations: {adv1}"),
            format!("The science and practice of {adv1} in {name}."),
            vec![
                L::video(
                    format!("Deep Dive: {adv1}"),
                    format!("An in-depth look at {adv1} and its role in {problem}."),
                    16,
                ),
                L::video(
                    format!("Mechanisms Behind {adv1}"),
                    format!("The underlying mechanisms that make {adv1} so important."),
                    14,
                ),
                L::video(
                    format!("Recognizing {adv1} in Practice"),
                    format!("Clinical clues that point toward {adv1}."),
                    12,
                ),
                L::text(
                    format!("{adv1} Research Summary"),
                    format!("Key research findings on {adv1}, summarized for practitioners."),
                    10,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            3,
            format!("{adv1} in Practice"),
            format!("Applying {adv1} with real clients."),
            vec![
                L::video(
                    format!("Assessment Strategies for {adv1}"),
                    format!("How to evaluate whether {adv1} is a factor for a client."),
                    14,
                ),
                L::video(
                    format!("Intervention Planning for {adv1}"),
                    format!("Building a staged support plan around {adv1}."),
                    14,
                ),
                L::video(
                    "Monitoring and Adjusting",
                    format!("Tracking client response as you address {adv1}."),
                    12,
                ),
                L::text(
                    format!("Case Study: {adv1}"),
                    format!("A detailed case where addressing {adv1} restored progress."),
                    10,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            4,
            format!("Advanced Foundations: {adv2}"),
            format!("The science and practice of {adv2} in {name}."),
            vec![
                L::video(
                    format!("Deep Dive: {adv2}"),
                    format!("An in-depth look at {adv2} and how it complicates {problem}."),
                    16,
                ),
                L::video(
                    format!("Mechanisms Behind {adv2}"),
                    format!("Why {adv2} develops and how it sustains symptoms."),
                    14,
                ),
                L::video(
                    format!("Recognizing {adv2} in Practice"),
                    format!("History, symptom and lifestyle patterns linked to {adv2}."),
                    12,
                ),
                L::text(
                    format!("{adv2} Research Summary"),
                    format!("Key research findings on {adv2}, summarized for practitioners."),
                    10,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            5,
            format!("{adv2} in Practice"),
            format!("Applying {adv2} with real clients."),
            vec![
                L::video(
                    format!("Assessment Strategies for {adv2}"),
                    format!("Structured questioning and tracking for {adv2}."),
                    14,
                ),
                L::video(
                    format!("Intervention Planning for {adv2}"),
                    format!("Sequencing support for clients affected by {adv2}."),
                    14,
                ),
                L::video(
                    "When Progress Stalls",
                    format!("Troubleshooting cases where {adv2} resists intervention."),
                    12,
                ),
                L::text(
                    format!("Case Study: {adv2}"),
                    format!("A detailed case built around {adv2}."),
                    10,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            6,
            format!("Integrating {adv1} and {adv2}"),
            format!("Working with clients who present with both {adv1} and {adv2}."),
            vec![
                L::video(
                    "How Advanced Factors Interact",
                    format!("The ways {adv1} and {adv2} reinforce each other."),
                    14,
                ),
                L::video(
                    "Prioritizing Multiple Factors",
                    format!("Deciding whether to address {adv1} or {adv2} first."),
                    12,
                ),
                L::video(
                    "Integrated Protocol Design",
                    format!("One coherent plan that covers {adv1} and {adv2}."),
                    14,
                ),
                L::text(
                    "Integration Case Study",
                    "A multi-factor case followed from intake to resolution.",
                    10,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            7,
            "Advanced Case Assessment",
            format!("A practitioner-level assessment process for {audience}."),
            vec![
                L::video(
                    "The Advanced Intake",
                    "Extending your intake to capture complex histories.",
                    14,
                ),
                L::video(
                    "Timeline and Pattern Mapping",
                    "Mapping symptoms against life events to reveal root causes.",
                    12,
                ),
                L::video(
                    "Working With Lab Results and Reports",
                    "Reviewing client-provided reports within your scope of practice.",
                    14,
                ),
                L::text(
                    "Advanced Assessment Forms",
                    "Intake, timeline and tracking forms for complex cases.",
                    8,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            8,
            "Designing Advanced Protocols",
            format!("Multi-phase protocols that move complex clients toward {benefit}."),
            vec![
                L::video(
                    "Phased Protocol Design",
                    "Stabilize, restore and maintain: structuring a long-term plan.",
                    14,
                ),
                L::video(
                    "Personalization at Depth",
                    "Tailoring protocols to genetics, history and preferences.",
                    12,
                ),
                L::video(
                    "Managing Sensitive Clients",
                    "Adjusting pace and intensity for clients who react easily.",
                    12,
                ),
                L::text(
                    "Advanced Protocol Library",
                    format!("A library of advanced {name} protocol templates."),
                    10,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            9,
            "Working With Complex Clients",
            "Supporting clients with long histories, multiple conditions or past setbacks.",
            vec![
                L::video(
                    "Understanding Complex Histories",
                    format!("Why some clients have struggled with {problem} for years."),
                    12,
                ),
                L::video(
                    "Collaborative Care",
                    "Coordinating with physicians, therapists and other practitioners.",
                    12,
                ),
                L::video(
                    "Rebuilding Client Trust",
                    "Helping discouraged clients believe progress is possible.",
                    10,
                ),
                L::text(
                    "Complex Case Checklist",
                    "A checklist for approaching every complex case consistently.",
                    6,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            10,
            "Advanced Practitioner Case Review",
            "Consolidating the advanced level through supervised case review.",
            vec![
                L::video(
                    "Case Review Methodology",
                    "How to present and review a case like an experienced practitioner.",
                    12,
                ),
                L::video(
                    "Case Review: Early Intervention",
                    "Reviewing a case caught early and resolved quickly.",
                    14,
                ),
                L::video(
                    "Case Review: Long-Term Support",
                    "Reviewing a case that required months of phased support.",
                    14,
                ),
                L::text(
                    "Advanced Level Summary",
                    "The essential takeaways from the advanced practitioner level.",
                    10,
                ),
            ],
        ),
        // Master practitioner level
        ModuleTemplate::assessed(
            11,
            "Master Practitioner Orientation",
            format!("What mastery looks like in {category}."),
            vec![
                L::video(
                    "Welcome to the Master Level",
                    format!("The responsibilities and opportunities of a master {name} practitioner."),
                    10,
                ),
                L::video(
                    "Thinking Like a Master Practitioner",
                    "Moving from protocols to principles-based reasoning.",
                    12,
                ),
                L::video(
                    "Leadership in Your Field",
                    format!("How master practitioners shape the {category} profession."),
                    10,
                ),
                L::text(
                    "Master Level Roadmap",
                    "Milestones and case requirements for master certification.",
                    6,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            12,
            format!("Master Topic: {master1}"),
            format!("Mastering {master1} for {name}."),
            vec![
                L::video(
                    format!("Foundations of {master1}"),
                    format!("The core ideas of {master1} at master level."),
                    16,
                ),
                L::video(
                    format!("{master1} in Complex Cases"),
                    format!("Applying {master1} when standard approaches fall short."),
                    14,
                ),
                L::video(
                    format!("Teaching {master1} to Others"),
                    format!("Explaining {master1} clearly to clients and peers."),
                    12,
                ),
                L::text(
                    format!("{master1} Reference Guide"),
                    format!("A concise master-level reference on {master1}."),
                    10,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            13,
            format!("Master Topic: {master2}"),
            format!("Mastering {master2} for {name}."),
            vec![
                L::video(
                    format!("Foundations of {master2}"),
                    format!("The core ideas of {master2} at master level."),
                    16,
                ),
                L::video(
                    format!("{master2} in Practice"),
                    format!("Using {master2} to deliver consistent client outcomes."),
                    14,
                ),
                L::video(
                    format!("Combining {master1} and {master2}"),
                    "Bringing both master topics together in a single case.",
                    12,
                ),
                L::text(
                    format!("{master2} Reference Guide"),
                    format!("A concise master-level reference on {master2}."),
                    10,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            14,
            "Master-Level Case Reasoning",
            format!("Applying {adv1} and {adv2} with master-level clinical reasoning."),
            vec![
                L::video(
                    "Hypothesis-Driven Case Work",
                    "Forming and testing hypotheses about what drives a client's symptoms.",
                    14,
                ),
                L::video(
                    format!("Revisiting {adv1} at Master Level"),
                    format!("Subtle presentations of {adv1} that advanced practitioners miss."),
                    14,
                ),
                L::video(
                    format!("Revisiting {adv2} at Master Level"),
                    format!("Resolving stubborn cases of {adv2}."),
                    14,
                ),
                L::text(
                    "Master Case Reasoning Worksheet",
                    "A structured worksheet for documenting your clinical reasoning.",
                    8,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            15,
            format!("Specialization: {spec1}"),
            format!("Applying {name} expertise to {spec1}."),
            vec![
                L::video(
                    format!("Introduction to {spec1}"),
                    format!("Why {spec1} is a valuable specialization for {name} practitioners."),
                    12,
                ),
                L::video(
                    format!("Assessment in {spec1}"),
                    format!("Adapting your assessment process for {spec1} clients."),
                    12,
                ),
                L::video(
                    format!("Protocols for {spec1}"),
                    format!("Specialized protocols for {spec1}."),
                    14,
                ),
                L::text(
                    format!("{spec1} Case Study"),
                    format!("A complete {spec1} case from intake to results."),
                    10,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            16,
            format!("Specialization: {spec2}"),
            format!("Applying {name} expertise to {spec2}."),
            vec![
                L::video(
                    format!("Introduction to {spec2}"),
                    format!("The opportunity and challenges of specializing in {spec2}."),
                    12,
                ),
                L::video(
                    format!("Assessment in {spec2}"),
                    format!("Assessment considerations unique to {spec2}."),
                    12,
                ),
                L::video(
                    format!("Protocols for {spec2}"),
                    format!("Specialized protocols for {spec2}."),
                    14,
                ),
                L::text(
                    format!("{spec2} Case Study"),
                    format!("A complete {spec2} case from intake to results."),
                    10,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            17,
            format!("Specialization: {spec3}"),
            format!("Applying {name} expertise to {spec3}."),
            vec![
                L::video(
                    format!("Introduction to {spec3}"),
                    format!("How {spec3} intersects with {problem}."),
                    12,
                ),
                L::video(
                    format!("Assessment in {spec3}"),
                    format!("Assessment considerations unique to {spec3}."),
                    12,
                ),
                L::video(
                    format!("Protocols for {spec3}"),
                    format!("Specialized protocols for {spec3}."),
                    14,
                ),
                L::text(
                    format!("{spec3} Case Study"),
                    format!("A complete {spec3} case from intake to results."),
                    10,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            18,
            "Leading Group Programs",
            format!("Delivering master-level {name} support to groups."),
            vec![
                L::video(
                    "Designing a Group Program",
                    "Structure, pacing and curriculum for group delivery.",
                    12,
                ),
                L::video(
                    "Facilitating Group Sessions",
                    "Keeping group sessions engaging, safe and productive.",
                    12,
                ),
                L::video(
                    "Individualizing Within a Group",
                    "Giving each participant personal attention at scale.",
                    10,
                ),
                L::text(
                    "Group Program Toolkit",
                    "Session plans, worksheets and onboarding materials.",
                    8,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            19,
            "Mentoring and Supervising Coaches",
            "Sharing your expertise with the next generation of practitioners.",
            vec![
                L::video(
                    "The Mentor's Role",
                    format!("How master practitioners support newer {name} coaches."),
                    10,
                ),
                L::video(
                    "Running Case Supervision",
                    "A repeatable format for supervising other coaches' cases.",
                    12,
                ),
                L::video(
                    "Giving Constructive Feedback",
                    "Feedback techniques that build skill and confidence.",
                    10,
                ),
                L::text(
                    "Mentorship Agreements",
                    "Templates for structuring paid and peer mentorship.",
                    6,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            20,
            "Research Literacy and Continuing Education",
            format!("Staying current as {category} research evolves."),
            vec![
                L::video(
                    "Reading Research Critically",
                    "Evaluating study design, sample size and relevance.",
                    14,
                ),
                L::video(
                    "Translating Research Into Practice",
                    format!("Deciding when new findings should change how you support {audience}."),
                    12,
                ),
                L::video(
                    "Building Your Professional Library",
                    "Sources, journals and communities worth following.",
                    8,
                ),
                L::text(
                    "Continuing Education Plan",
                    "A template for planning your ongoing professional development.",
                    6,
                ),
            ],
        ),
        ModuleTemplate::new(
            "Master Practitioner Certification",
            format!("Complete your capstone and final exam to earn your {name} Master Practitioner credential."),
            vec![
                L::video(
                    "Capstone Case Presentation",
                    format!("Present a complete case demonstrating master-level {name} practice."),
                    20,
                ),
                L::text(
                    "Practitioner Bundle Review",
                    "A structured review of the advanced and master levels for exam preparation.",
                    20,
                ),
                L::quiz(
                    "Master Practitioner Final Exam",
                    format!("A comprehensive exam covering all twenty-one modules of the {name} Practitioner Bundle."),
                ),
                L::text(
                    "Access Your Practitioner Certificates",
                    format!("Download your {name} Advanced Practitioner and Master Practitioner certificates."),
                    2,
                ),
                L::video(
                    "Next Steps: Growing Your Practice",
                    format!("How the {name} Coach Income Accelerator helps you turn expertise into a thriving business."),
                    8,
                ),
            ],
        ),
    ];

    CourseOutline { course, modules }
}
