//! View descriptions — what a screen shows, independent of HTML.
//!
//! `render` is pure: the same `RenderRequest` always yields the same `View`.

use serde::Serialize;

use crate::demo::{DemoInputs, DemoOutput, DemoSubmission};
use crate::pages::content::{
    self, ContactDetails, Profile, ProjectCard, CONTACT, PROFILE, PROJECT_CARDS,
};
use crate::pages::{PageId, MENU};

/// One user interaction, frozen: which page to show and the demo form, if submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderRequest {
    pub page: PageId,
    pub demo: Option<DemoSubmission>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuEntry {
    pub page: PageId,
    pub label: &'static str,
    pub selected: bool,
}

/// A whole screen: sidebar plus the current page body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub title: &'static str,
    pub profile: Profile,
    pub menu: Vec<MenuEntry>,
    pub page: PageView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum PageView {
    Home {
        title: &'static str,
        subtitle: &'static str,
        intro: &'static str,
        hint: &'static str,
        cards: &'static [ProjectCard],
    },
    #[serde(rename = "resume-optimizer")]
    ResumeOptimizerDemo {
        title: &'static str,
        intro: &'static str,
        inputs: DemoInputs,
        outputs: Vec<DemoOutput>,
    },
    PublicSafetyHousing {
        title: &'static str,
        summary: &'static str,
        highlights: &'static [&'static str],
        tools: &'static [&'static str],
    },
    ComingSoon {
        title: &'static str,
        body: &'static str,
    },
    Contact {
        title: &'static str,
        details: ContactDetails,
    },
}

impl PageView {
    pub fn page_id(&self) -> PageId {
        match self {
            PageView::Home { .. } => PageId::Home,
            PageView::ResumeOptimizerDemo { .. } => PageId::ResumeOptimizerDemo,
            PageView::PublicSafetyHousing { .. } => PageId::PublicSafetyHousing,
            PageView::ComingSoon { .. } => PageId::ComingSoon,
            PageView::Contact { .. } => PageId::Contact,
        }
    }
}

pub fn render(request: &RenderRequest) -> View {
    let menu = MENU
        .into_iter()
        .map(|page| MenuEntry {
            page,
            label: page.label(),
            selected: page == request.page,
        })
        .collect();

    let page = match request.page {
        PageId::Home => home(),
        PageId::ResumeOptimizerDemo => resume_optimizer(request.demo.as_ref()),
        PageId::PublicSafetyHousing => public_safety_housing(),
        PageId::ComingSoon => coming_soon(),
        PageId::Contact => contact(),
    };

    View {
        title: content::SITE_TITLE,
        profile: PROFILE,
        menu,
        page,
    }
}

fn home() -> PageView {
    PageView::Home {
        title: content::HOME_TITLE,
        subtitle: content::HOME_SUBTITLE,
        intro: content::HOME_INTRO,
        hint: content::HOME_HINT,
        cards: &PROJECT_CARDS,
    }
}

fn resume_optimizer(demo: Option<&DemoSubmission>) -> PageView {
    let (inputs, outputs) = match demo {
        Some(submission) => (submission.inputs.clone(), submission.outputs()),
        None => (DemoInputs::default(), Vec::new()),
    };
    PageView::ResumeOptimizerDemo {
        title: content::DEMO_TITLE,
        intro: content::DEMO_INTRO,
        inputs,
        outputs,
    }
}

fn public_safety_housing() -> PageView {
    PageView::PublicSafetyHousing {
        title: content::DASHBOARD_TITLE,
        summary: content::DASHBOARD_SUMMARY,
        highlights: &content::DASHBOARD_HIGHLIGHTS,
        tools: &content::DASHBOARD_TOOLS,
    }
}

fn coming_soon() -> PageView {
    PageView::ComingSoon {
        title: content::COMING_SOON_TITLE,
        body: content::COMING_SOON_BODY,
    }
}

fn contact() -> PageView {
    PageView::Contact {
        title: content::CONTACT_TITLE,
        details: CONTACT,
    }
}
