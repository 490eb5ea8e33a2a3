//! Income accelerator template: the business and monetization course

use super::TierTemplate;
use crate::course::{CourseInfo, CourseOutline, LessonTemplate as L, ModuleTemplate, Tier};
use crate::defaults::TierDefaults;
use crate::niche::NicheDefinition;
use crate::resolve::{join_or, resolve_income, resolve_positional, IncomeConfig};

const PRICE: u32 = 497;
const DURATION: u32 = 32400;

/// Income accelerator template - 15 modules, 85 lessons
pub struct IncomeAcceleratorTemplate;

impl TierTemplate for IncomeAcceleratorTemplate {
    fn tier(&self) -> Tier {
        Tier::IncomeAccelerator
    }

    fn render(&self, niche: &NicheDefinition, defaults: &TierDefaults) -> CourseOutline {
        income_accelerator(&resolve_income(niche, &defaults.income))
    }
}

pub fn income_accelerator(config: &IncomeConfig) -> CourseOutline {
    let n = config.niche;
    let name = &n.name;
    let audience = &n.target_audience;
    let benefit = &n.key_benefit;
    let problem = &n.primary_problem;
    // Scalars are substituted verbatim, currency and range formatting included
    let price = config.average_client_price;
    let income = config.potential_monthly_income;
    let client_problems = join_or(
        config.typical_client_problems,
        "the problems your clients face most",
    );

    let format1 = resolve_positional(config.service_formats, 0, "1:1 Coaching Packages");
    let format2 = resolve_positional(config.service_formats, 1, "Group Coaching Programs");
    let format3 = resolve_positional(config.service_formats, 2, "Digital Products");

    let course = CourseInfo {
        title: format!("{name} Coach Income Accelerator"),
        slug: Tier::IncomeAccelerator.course_slug(&n.slug),
        description: format!(
            "Turn your {name} expertise into a thriving business. Learn to package, price and \
             sell your services at {price} per client, attract {audience}, and build a clear \
             path to {income} per month."
        ),
        short_description: format!(
            "Build a profitable {name} coaching business earning {income} per month."
        ),
        price: PRICE,
        duration: DURATION,
    };

    let modules = vec![
        ModuleTemplate::assessed(
            1,
            format!("The {name} Business Opportunity"),
            format!("Why demand for {name} coaching is growing and where you fit in."),
            vec![
                L::video(
                    "Welcome to the Income Accelerator",
                    format!("How this program takes you from certified coach to a {income} per month practice."),
                    10,
                ),
                L::video(
                    format!("The Market for {name} Coaching"),
                    format!("Why {audience} are actively searching for help with {problem}."),
                    12,
                ),
                L::video(
                    format!("What {name} Coaches Really Earn"),
                    format!("Realistic income at {price} per client, and what drives the difference."),
                    10,
                ),
                L::text(
                    "Your Business Readiness Assessment",
                    "Identify your strengths, gaps and starting point as a business owner.",
                    8,
                ),
                L::video(
                    "Setting Your Income Goal",
                    format!("Working backward from {income} per month to a weekly client target."),
                    10,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            2,
            "Defining Your Niche Offer",
            format!("Crafting an offer that {audience} immediately understand."),
            vec![
                L::video(
                    "Who You Serve Best",
                    format!("Narrowing your focus within {audience}."),
                    10,
                ),
                L::video(
                    "The Problems Clients Pay to Solve",
                    format!("Positioning around {client_problems}."),
                    12,
                ),
                L::video(
                    "Crafting Your Transformation Statement",
                    format!("Describing the journey from {problem} to {benefit} in one sentence."),
                    10,
                ),
                L::text(
                    "Offer Design Worksheet",
                    "A worksheet for defining your core offer.",
                    6,
                ),
                L::video(
                    "Validating Your Offer",
                    "Testing demand before you build anything.",
                    10,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            3,
            "Pricing With Confidence",
            format!("Setting and holding prices around {price} per client."),
            vec![
                L::video(
                    format!("Pricing Your Services at {price}"),
                    format!("Why {price} is a sustainable rate for {name} coaching, and how to justify it."),
                    12,
                ),
                L::video(
                    "Value-Based Pricing",
                    format!("Pricing the outcome, {benefit}, rather than your time."),
                    10,
                ),
                L::video(
                    "Packages Versus Sessions",
                    "Why packages serve clients better than pay-per-session.",
                    10,
                ),
                L::text(
                    "Pricing Calculator",
                    format!("Calculate how many clients at {price} you need to reach {income}."),
                    6,
                ),
                L::video(
                    "Overcoming Money Mindset Blocks",
                    "Getting comfortable charging what your work is worth.",
                    10,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            4,
            format!("Service Format: {format1}"),
            format!("Building and delivering {format1}."),
            vec![
                L::video(
                    format!("Designing {format1}"),
                    format!("Structure, length and deliverables for {format1}."),
                    12,
                ),
                L::video(
                    format!("Pricing {format1}"),
                    format!("Setting prices for {format1} starting from {price} per client."),
                    10,
                ),
                L::video(
                    format!("Delivering {format1}"),
                    format!("Running {format1} smoothly from onboarding to completion."),
                    12,
                ),
                L::text(
                    format!("{format1} Templates"),
                    format!("Agreements, onboarding forms and session outlines for {format1}."),
                    6,
                ),
                L::video(
                    format!("Selling {format1}"),
                    format!("How to present {format1} so clients say yes."),
                    10,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            5,
            format!("Service Format: {format2}"),
            format!("Building and delivering {format2}."),
            vec![
                L::video(
                    format!("Designing {format2}"),
                    format!("Curriculum, cohort size and schedule for {format2}."),
                    12,
                ),
                L::video(
                    format!("Pricing {format2}"),
                    format!("Pricing {format2} so they add to your {income} target."),
                    10,
                ),
                L::video(
                    format!("Running {format2}"),
                    format!("Facilitation and community management for {format2}."),
                    12,
                ),
                L::text(
                    format!("{format2} Launch Checklist"),
                    format!("Everything you need to launch {format2}."),
                    6,
                ),
                L::video(
                    format!("Filling {format2}"),
                    format!("Enrollment strategies that fill {format2} consistently."),
                    10,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            6,
            format!("Service Format: {format3}"),
            format!("Building and delivering {format3}."),
            vec![
                L::video(
                    format!("Designing {format3}"),
                    format!("Choosing the right scope and content for {format3}."),
                    12,
                ),
                L::video(
                    format!("Pricing {format3}"),
                    format!("Where {format3} fit in your pricing ladder."),
                    10,
                ),
                L::video(
                    format!("Creating {format3}"),
                    format!("An efficient production process for {format3}."),
                    12,
                ),
                L::text(
                    format!("{format3} Planning Guide"),
                    format!("Outlines and checklists for planning {format3}."),
                    6,
                ),
                L::video(
                    "Building Your Offer Ladder",
                    format!("Connecting {format1}, {format2} and {format3} into one client journey."),
                    12,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            7,
            "Marketing Foundations",
            format!("Getting in front of {audience} consistently."),
            vec![
                L::video(
                    "Your Marketing Message",
                    format!("Speaking directly to {audience} about {problem}."),
                    12,
                ),
                L::video(
                    "Choosing Your Channels",
                    "Selecting the one or two platforms worth your time.",
                    10,
                ),
                L::video(
                    "Building Your Email List",
                    "Why an email list is your most valuable business asset.",
                    12,
                ),
                L::text(
                    "Marketing Plan Template",
                    "A 30-day marketing plan you can reuse every month.",
                    6,
                ),
                L::video(
                    "Lead Magnets That Convert",
                    format!("Creating a free resource that attracts {audience}."),
                    10,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            8,
            "Content That Attracts Clients",
            "Creating content that builds trust and generates inquiries.",
            vec![
                L::video(
                    "Content Pillars",
                    format!("Planning content around {client_problems}."),
                    10,
                ),
                L::video(
                    "Educational Content That Sells",
                    format!("Teaching about {problem} in a way that leads to enrollment."),
                    12,
                ),
                L::video(
                    "Client Stories and Testimonials",
                    "Collecting and sharing results ethically.",
                    10,
                ),
                L::text(
                    "Content Calendar",
                    "A ready-made content calendar for your first 90 days.",
                    6,
                ),
                L::video(
                    "Repurposing Content",
                    "Turning one idea into a week of content.",
                    8,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            9,
            "Discovery Calls and Enrollment",
            "Converting interested prospects into paying clients.",
            vec![
                L::video(
                    "The Discovery Call Framework",
                    "A structured call that helps prospects decide with confidence.",
                    14,
                ),
                L::video(
                    format!("Presenting Your {price} Offer"),
                    format!("Presenting your offer at {price} clearly and without pressure."),
                    12,
                ),
                L::video(
                    "Handling Objections",
                    "Responding to time, money and skepticism objections.",
                    12,
                ),
                L::text(
                    "Discovery Call Script",
                    "A word-for-word script you can adapt to your style.",
                    8,
                ),
                L::video(
                    "Following Up",
                    "Follow-up sequences that convert undecided prospects.",
                    8,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            10,
            "Client Delivery and Retention",
            format!("Delivering results that keep clients coming back until they reach {benefit}."),
            vec![
                L::video(
                    "Onboarding New Clients",
                    "Creating a first week that sets clients up to succeed.",
                    10,
                ),
                L::video(
                    "Tracking Client Results",
                    "Measuring outcomes that prove the value of your work.",
                    10,
                ),
                L::video(
                    "Renewals and Continuation Offers",
                    "Offering ongoing support when a package ends.",
                    10,
                ),
                L::text(
                    "Client Experience Checklist",
                    "Touchpoints that make clients feel cared for.",
                    6,
                ),
                L::video(
                    "Turning Clients Into Advocates",
                    "Encouraging reviews and word-of-mouth referrals.",
                    8,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            11,
            "Referral Partnerships",
            "Building relationships that send clients your way.",
            vec![
                L::video(
                    "Identifying Referral Partners",
                    format!("Professionals who already serve {audience}."),
                    10,
                ),
                L::video(
                    "Pitching a Partnership",
                    "Approaching potential partners with a clear value proposition.",
                    10,
                ),
                L::video(
                    "Maintaining Partner Relationships",
                    "Keeping referrals flowing with simple, regular contact.",
                    8,
                ),
                L::text(
                    "Partnership Outreach Templates",
                    "Email and message templates for partner outreach.",
                    6,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            12,
            "Business Systems and Tools",
            "The systems that let you serve more clients with less effort.",
            vec![
                L::video(
                    "Scheduling and Payments",
                    "Automating bookings, reminders and payments.",
                    10,
                ),
                L::video(
                    "Client Management Systems",
                    "Keeping notes, plans and communication organized.",
                    10,
                ),
                L::video(
                    "Automating Your Marketing",
                    "Email sequences that nurture leads while you coach.",
                    10,
                ),
                L::text(
                    "Tool Stack Recommendations",
                    "Affordable tools for every stage of your business.",
                    6,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            13,
            "Legal, Ethical and Financial Basics",
            "Protecting yourself and your clients as you grow.",
            vec![
                L::video(
                    "Business Structure and Insurance",
                    "Choosing a structure and the coverage you need.",
                    10,
                ),
                L::video(
                    "Client Agreements and Disclaimers",
                    format!("Essential agreements for {name} coaching clients."),
                    10,
                ),
                L::video(
                    "Managing Your Finances",
                    format!("Budgeting, taxes and reinvesting as you grow toward {income}."),
                    12,
                ),
                L::text(
                    "Legal Document Checklist",
                    "The documents every coaching business should have in place.",
                    6,
                ),
            ],
        ),
        ModuleTemplate::assessed(
            14,
            format!("Scaling to {income} per Month"),
            format!("Growing beyond one-to-one capacity to reach {income} per month."),
            vec![
                L::video(
                    "Your Scaling Roadmap",
                    format!("Combining {format1}, {format2} and {format3} to reach {income}."),
                    14,
                ),
                L::video(
                    "Raising Your Prices",
                    format!("When and how to move beyond {price} per client."),
                    10,
                ),
                L::video(
                    "Hiring Your First Support",
                    "Delegating admin and marketing so you can focus on clients.",
                    10,
                ),
                L::text(
                    "Scaling Scorecard",
                    "A scorecard for deciding your next growth move.",
                    6,
                ),
            ],
        ),
        ModuleTemplate::new(
            "Your 90-Day Income Plan",
            format!("Commit to a concrete plan and earn your {name} Income Accelerator certificate."),
            vec![
                L::video(
                    "Building Your 90-Day Plan",
                    format!("Turning everything you have learned into weekly actions toward {income} per month."),
                    14,
                ),
                L::text(
                    "Income Accelerator Review",
                    "A summary of the business frameworks from every module.",
                    12,
                ),
                L::quiz(
                    "Income Accelerator Final Exam",
                    format!("Demonstrate your readiness to run a profitable {name} coaching business."),
                ),
                L::text(
                    "Access Your Income Accelerator Certificate",
                    format!("Download your {name} Coach Income Accelerator certificate of completion."),
                    2,
                ),
                L::video(
                    "Next Steps: Launching Your Business",
                    format!("Your first actions this week, and how to keep growing toward {income} per month."),
                    8,
                ),
            ],
        ),
    ];

    CourseOutline { course, modules }
}
