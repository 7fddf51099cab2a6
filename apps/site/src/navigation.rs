//! Navigation controller — the single piece of long-lived UI state.
//!
//! Lives in `AppState` behind a lock; one interaction holds it for one
//! select/render step.

use tracing::{debug, info};

use crate::demo::DemoSubmission;
use crate::errors::AppError;
use crate::pages::content::{find_card, CardAction};
use crate::pages::view::{render, RenderRequest, View};
use crate::pages::PageId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    current: PageId,
}

impl Navigator {
    /// Starts on the home page.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> PageId {
        self.current
    }

    /// Every page is reachable from every other page in one step.
    pub fn select_page(&mut self, page: PageId) {
        if self.current != page {
            info!(from = self.current.slug(), to = page.slug(), "Page selected");
        }
        self.current = page;
    }

    /// A home-page card's "open project" button.
    /// Disabled cards leave the current page untouched.
    pub fn open_project(&mut self, card_slug: &str) -> Result<PageId, AppError> {
        let card = find_card(card_slug)
            .ok_or_else(|| AppError::NotFound(format!("Project '{card_slug}' not found")))?;

        match card.action {
            CardAction::Open(page) => {
                debug!(card = card.slug, "Opening project card");
                self.select_page(page);
                Ok(page)
            }
            CardAction::ComingSoon => Err(AppError::Validation(format!(
                "Project '{card_slug}' is coming soon and cannot be opened yet"
            ))),
        }
    }

    /// Renders the current page. A demo submission only affects the demo page.
    pub fn render(&self, demo: Option<DemoSubmission>) -> View {
        let view = render(&RenderRequest {
            page: self.current,
            demo,
        });
        debug_assert_eq!(view.page.page_id(), self.current);
        view
    }
}
