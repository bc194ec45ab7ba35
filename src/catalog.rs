//! Fixed option catalogs for the workspace form
//!
//! The structural section menu offered per creation intent, plus the
//! suggestion lists backing the form's autocomplete fields. The form layer
//! renders these; the core only treats the chosen values as opaque strings.

/// Personas offered by the identity field
pub const IDENTITY_SUGGESTIONS: &[&str] = &[
    "Student",
    "Content Creator",
    "Student + Content Creator",
    "Competitive Aspirant",
    "Teacher",
    "Entrepreneur",
    "Business Professional",
    "Freelancer",
    "Marketer",
];

/// Content types offered by the creation intent field
pub const CREATION_INTENT_SUGGESTIONS: &[&str] = &[
    "Academic Assignment",
    "Exam Answer",
    "Topic Explanation",
    "Research Paper",
    "Debate Speech",
    "Blog Post",
    "Instagram Script",
    "Instagram Caption",
    "YouTube Script",
    "Storytelling Post",
    "Podcast Script",
    "Article",
    "SEO Article",
    "Cold Email",
    "Sales Page",
    "Landing Page",
    "Startup Pitch",
];

/// Audiences offered by the target audience field
pub const AUDIENCE_SUGGESTIONS: &[&str] = &[
    "Students",
    "Teenagers",
    "Professionals",
    "Instagram audience",
    "Youtube audience",
    "Medium users",
    "LinkedIn users",
    "Founders",
    "Entrepreneurs",
    "Content creators",
    "Beginners",
    "Advanced learners",
    "General",
    "Parents",
    "Teachers",
    "Me / Myself",
    "Business professionals",
];

/// Platforms offered by the platform field
pub const PLATFORM_SUGGESTIONS: &[&str] = &[
    "Instagram",
    "Facebook",
    "Twitter / X",
    "LinkedIn",
    "YouTube",
    "Personal blog",
    "Website",
    "Meeting",
    "Classroom",
    "Medium",
    "Email",
    "WhatsApp",
    "Telegram",
    "Academic paper",
    "General",
    "Me / Myself",
    "Presentation",
];

/// Structural section menu for a creation intent
///
/// Returns `None` for intents without a predefined menu; the form shows a
/// placeholder in that case and the request carries no structure selections.
pub fn structure_options(creation_intent: &str) -> Option<&'static [&'static str]> {
    let options: &'static [&'static str] = match creation_intent {
        "Blog Post" => &["Introduction", "Key Points", "Conclusion", "Examples", "Summary"],
        "Instagram Script" => &["Hook", "Story Arc", "Call to Action", "Hashtags"],
        "YouTube Script" => &["Hook", "Main Content", "Transitions", "Outro"],
        "Academic Assignment" => &["Introduction", "Body", "Conclusion", "References"],
        "Article" => &[
            "Headline",
            "Introduction",
            "Background",
            "Main Discussion",
            "Expert Insight",
            "Conclusion",
        ],
        "SEO Article" => &[
            "Meta Title",
            "Meta Description",
            "Introduction",
            "Subheadings",
            "FAQs",
            "Conclusion",
        ],
        "Instagram Caption" => &[
            "Hook Line",
            "Story/Value",
            "Engagement Question",
            "Call to Action",
            "Hashtags",
        ],
        "Podcast Script" => &[
            "Opening Hook",
            "Introduction",
            "Main Discussion",
            "Guest Segment",
            "Key Takeaways",
            "Closing",
        ],
        "Cold Email" => &[
            "Subject Line",
            "Personalization",
            "Problem",
            "Solution",
            "Call to Action",
            "Closing",
        ],
        "Sales Page" => &[
            "Headline",
            "Subheadline",
            "Problem",
            "Solution",
            "Benefits",
            "Testimonials",
            "Offer",
            "CTA",
        ],
        "Landing Page" => &[
            "Hero Section",
            "Problem",
            "Solution",
            "Features",
            "Benefits",
            "Social Proof",
            "CTA",
        ],
        "Topic Explanation" => &[
            "Definition",
            "Core Concept",
            "Examples",
            "Applications",
            "Summary",
        ],
        "Research Paper" => &[
            "Abstract",
            "Introduction",
            "Methodology",
            "Results",
            "Discussion",
            "Conclusion",
            "References",
        ],
        "Debate Speech" => &[
            "Opening Statement",
            "Arguments",
            "Supportive Pointas",
            "Against Points",
            "Rebuttal",
            "Conclusion",
        ],
        "Startup Pitch" => &[
            "Problem",
            "Solution",
            "Market Opportunity",
            "Product",
            "Business Model",
            "Traction",
            "Ask",
        ],
        "Storytelling Post" => &[
            "Hook",
            "Setup",
            "Conflict",
            "Turning Point",
            "Resolution",
            "Lesson",
        ],
        "Exam Answer" => &["Direct Answer", "Explanation", "Examples", "Summary"],
        _ => return None,
    };
    Some(options)
}
