// Page catalogue: the closed set of navigable views, their menu labels,
// and the static copy each page handler emits.

pub mod content;
pub mod view;

use serde::{Deserialize, Serialize};

/// Identifier for one of the five navigable views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    #[default]
    Home,
    #[serde(rename = "resume-optimizer")]
    ResumeOptimizerDemo,
    PublicSafetyHousing,
    ComingSoon,
    Contact,
}

/// Menu order as shown in the sidebar.
pub const MENU: [PageId; 5] = [
    PageId::Home,
    PageId::ResumeOptimizerDemo,
    PageId::PublicSafetyHousing,
    PageId::ComingSoon,
    PageId::Contact,
];

impl PageId {
    /// URL path segment, stable across releases.
    pub fn slug(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::ResumeOptimizerDemo => "resume-optimizer",
            PageId::PublicSafetyHousing => "public-safety-housing",
            PageId::ComingSoon => "coming-soon",
            PageId::Contact => "contact",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        MENU.into_iter().find(|page| page.slug() == slug)
    }

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            PageId::Home => "🏠 Home",
            PageId::ResumeOptimizerDemo => "🧠 AI Resume Optimizer (Demo)",
            PageId::PublicSafetyHousing => "📊 Public Safety & Housing Dashboard",
            PageId::ComingSoon => "🚧 Coming Soon",
            PageId::Contact => "📫 Contact",
        }
    }
}
