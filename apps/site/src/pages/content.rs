//! Static page copy. Nothing here is computed.

use serde::Serialize;

use crate::pages::PageId;

pub const SITE_TITLE: &str = "Zhou Zhou | Portfolio";
pub const SITE_ICON: &str = "🧠";

/// Sidebar identity block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub education: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Zhou Zhou",
    role: "Data Scientist",
    education: "GMU – M.S. in Data Analytics Engineering",
};

// ── Home ───────────────────────────────────────────────────────────────────

pub const HOME_TITLE: &str = "👋 Hi, I'm Zhou Zhou";
pub const HOME_SUBTITLE: &str = "Data Scientist | AI, NLP & Predictive Analytics";
pub const HOME_INTRO: &str = "I’m a Data Scientist and Master’s student at George Mason University. \
    My focus is AI, NLP, and machine learning, and I build applied projects that turn data into useful products.";
pub const HOME_HINT: &str = "Open a project card below, or use the left sidebar to navigate.";

/// What a project card's button does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum CardAction {
    Open(PageId),
    /// Rendered as a disabled button.
    ComingSoon,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub slug: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    /// Card image path; a placeholder is drawn when absent.
    pub image: Option<&'static str>,
    pub action: CardAction,
}

pub static PROJECT_CARDS: [ProjectCard; 3] = [
    ProjectCard {
        slug: "ai-resume-optimizer",
        title: "⭐ AI Resume Optimizer",
        subtitle: "NLP · Semantic Similarity · LLMs",
        description: "An AI-powered tool that analyzes how well a resume matches a job description \
            using NLP & semantic similarity, then generates optimization suggestions with LLMs.",
        image: None,
        action: CardAction::Open(PageId::ResumeOptimizerDemo),
    },
    ProjectCard {
        slug: "public-safety-housing",
        title: "📊 Public Safety & Housing Dashboard",
        subtitle: "Data Visualization · Predictive Analytics",
        description: "An interactive dashboard relating neighborhood public-safety incidents \
            to housing prices and affordability trends.",
        image: None,
        action: CardAction::Open(PageId::PublicSafetyHousing),
    },
    ProjectCard {
        slug: "next-project",
        title: "🚧 Next Project",
        subtitle: "In progress",
        description: "A new applied machine learning project is on the way.",
        image: None,
        action: CardAction::ComingSoon,
    },
];

pub fn find_card(slug: &str) -> Option<&'static ProjectCard> {
    PROJECT_CARDS.iter().find(|card| card.slug == slug)
}

// ── Resume optimizer ───────────────────────────────────────────────────────

pub const DEMO_TITLE: &str = "🧠 AI Resume Optimizer — Demo UI";
pub const DEMO_INTRO: &str =
    "Upload a resume and paste a job description to see a simulated analysis and suggestions.";
pub const DEMO_UPLOAD_LABEL: &str = "Upload resume (PDF/DOC/DOCX)";
pub const DEMO_JD_LABEL: &str = "Paste job description";
pub const ANALYZE_BUTTON: &str = "🔍 Analyze Match";
pub const SUGGEST_BUTTON: &str = "✨ Generate Suggestions";

// ── Public safety & housing ────────────────────────────────────────────────

pub const DASHBOARD_TITLE: &str = "📊 Public Safety & Housing Dashboard";
pub const DASHBOARD_SUMMARY: &str = "A data dashboard exploring how public-safety incidents \
    relate to housing prices and affordability across neighborhoods.";
pub const DASHBOARD_HIGHLIGHTS: [&str; 4] = [
    "Cleaned and joined open incident reports with housing sale records by neighborhood.",
    "Built time-series and geographic views of incident rates and median prices.",
    "Fitted regression models to estimate the association between safety and prices.",
    "Published the findings as an interactive dashboard for non-technical readers.",
];
pub const DASHBOARD_TOOLS: [&str; 5] = ["Python", "pandas", "SQL", "scikit-learn", "Tableau"];

// ── Coming soon ────────────────────────────────────────────────────────────

pub const COMING_SOON_TITLE: &str = "🚧 Coming Soon";
pub const COMING_SOON_BODY: &str = "This project is still being built. Check back soon.";

// ── Contact ────────────────────────────────────────────────────────────────

pub const CONTACT_TITLE: &str = "📫 Contact";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactDetails {
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub work_authorization: &'static str,
}

pub const CONTACT: ContactDetails = ContactDetails {
    email: "zoezhou314@gmail.com",
    linkedin: "https://linkedin.com/in/your-link",
    github: "https://github.com/your-github",
    work_authorization: "U.S. Permanent Resident (Green Card)",
};
