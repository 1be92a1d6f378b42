//! Home section content loading.
//!
//! The loader fetches the home content document from its [`ContentSource`].
//! If that fails for any reason it parses the copy embedded in the page
//! markup, and if that fails too it leaves the authored placeholders alone.
//! None of these failures reach the visitor; they are logged as warnings.
//!
//! # Modules
//!
//! - [`model`]: the [`HomeContent`] document
//! - [`source`]: HTTP, file and embedded sources
//! - [`populate`]: writing a document into the page

pub mod model;
pub mod populate;
pub mod source;

use std::sync::Arc;

use tracing::{info, warn};

pub use model::{Hero, HomeContent, Profile};
pub use populate::populate;
pub use source::{
    ContentSource, FileContentSource, HOME_CONTENT_PATH, HttpContentSource, embedded_content,
};

use crate::dom::{Document, NodeId};
use crate::page::ids;
use crate::session::{EventHandler, PageContext, PageEvent};
use crate::tabs::TabController;

/// Which document ended up on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The primary document was fetched and applied.
    Primary,
    /// The fetch failed; the embedded copy was applied.
    Embedded,
    /// Both failed; the authored placeholders remain.
    Placeholder,
}

/// Runs the home content load for a page.
#[derive(Debug, Clone)]
pub struct ContentLoader {
    source: Arc<dyn ContentSource>,
}

impl ContentLoader {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Load the home content into the page and wire the call-to-action buttons.
    pub async fn load_home_content(
        &self,
        ctx: &PageContext,
        tabs: Arc<TabController>,
    ) -> LoadOutcome {
        // Fetch without holding the document lock.
        let fetched = self.source.fetch().await;

        let outcome = {
            let mut doc = ctx.document().lock().await;
            match fetched {
                Ok(content) => {
                    populate(&mut doc, &content);
                    info!(
                        name: "content.loaded",
                        source = %self.source.location(),
                        "Home content loaded"
                    );
                    LoadOutcome::Primary
                }
                Err(e) => {
                    warn!(
                        name: "content.fetch.failed",
                        source = %self.source.location(),
                        error = %e,
                        "Could not load home content; trying embedded copy"
                    );
                    match embedded_content(&doc) {
                        Ok(content) => {
                            populate(&mut doc, &content);
                            LoadOutcome::Embedded
                        }
                        Err(e) => {
                            warn!(
                                name: "content.embedded.failed",
                                error = %e,
                                "Embedded home content unusable; keeping placeholders"
                            );
                            LoadOutcome::Placeholder
                        }
                    }
                }
            }
        };

        let actions = {
            let doc = ctx.document().lock().await;
            CallToActions::bind(&doc, tabs)
        };
        ctx.subscribe(Arc::new(actions)).await;

        outcome
    }
}

/// Hero buttons that jump to another tab.
#[derive(Debug)]
pub struct CallToActions {
    bindings: Vec<(NodeId, &'static str)>,
    tabs: Arc<TabController>,
}

impl CallToActions {
    /// Target tab of each call-to-action button.
    pub const TARGETS: &'static [(&'static str, &'static str)] = &[
        (ids::CTA_PROJECTS, "projects"),
        (ids::CTA_CONTACT, "contact"),
    ];

    /// Resolve the buttons present in `doc`; absent ones are skipped.
    pub fn bind(doc: &Document, tabs: Arc<TabController>) -> Self {
        let bindings = Self::TARGETS
            .iter()
            .filter_map(|&(id, tab)| doc.element_by_id(id).map(|node| (node, tab)))
            .collect();
        Self { bindings, tabs }
    }
}

impl EventHandler for CallToActions {
    fn handle(&self, _ctx: &PageContext, doc: &mut Document, event: &PageEvent) {
        let PageEvent::Click(target) = event else {
            return;
        };
        if let Some(&(_, tab)) = self.bindings.iter().find(|(node, _)| node == target) {
            self.tabs.show_tab(doc, tab);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ContentError, Result};
    use crate::page::{EMBEDDED_HOME_CONTENT, build_portfolio_page};
    use async_trait::async_trait;

    #[derive(Debug)]
    struct Fixed(Option<HomeContent>);

    #[async_trait]
    impl ContentSource for Fixed {
        async fn fetch(&self) -> Result<HomeContent> {
            self.0.clone().ok_or(ContentError::Status {
                status: 503,
                url: "fixed".into(),
            })
        }

        fn location(&self) -> String {
            "fixed".into()
        }
    }

    async fn load(page: Document, source: Fixed) -> (PageContext, LoadOutcome) {
        let tabs = Arc::new(TabController::discover(&page));
        let ctx = PageContext::new(page);
        let outcome = ContentLoader::new(Arc::new(source))
            .load_home_content(&ctx, tabs)
            .await;
        (ctx, outcome)
    }

    fn intro(doc: &Document) -> Option<String> {
        let node = doc.element_by_id(ids::HOME_INTRO)?;
        doc.text(node).map(str::to_string)
    }

    #[tokio::test]
    async fn primary_document_wins() {
        let content = HomeContent {
            intro: Some("primary".into()),
            ..HomeContent::default()
        };
        let page = build_portfolio_page("Portfolio", Some(r#"{"intro":"embedded"}"#));
        let (ctx, outcome) = load(page, Fixed(Some(content))).await;
        assert_eq!(outcome, LoadOutcome::Primary);
        assert_eq!(intro(&*ctx.document().lock().await).as_deref(), Some("primary"));
    }

    #[tokio::test]
    async fn null_section_keeps_rest_of_primary_document() {
        let content = HomeContent::from_json(r#"{"hero":null,"intro":"x"}"#).unwrap();
        let page = build_portfolio_page("Portfolio", Some(r#"{"intro":"embedded"}"#));
        let (ctx, outcome) = load(page, Fixed(Some(content))).await;
        assert_eq!(outcome, LoadOutcome::Primary);
        assert_eq!(intro(&*ctx.document().lock().await).as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn fetch_failure_uses_embedded_copy() {
        let page = build_portfolio_page("Portfolio", Some(EMBEDDED_HOME_CONTENT));
        let expected = HomeContent::from_json(EMBEDDED_HOME_CONTENT).unwrap();
        let (ctx, outcome) = load(page, Fixed(None)).await;
        assert_eq!(outcome, LoadOutcome::Embedded);
        assert_eq!(intro(&*ctx.document().lock().await), expected.intro);
    }

    #[tokio::test]
    async fn double_failure_leaves_page_untouched() {
        let page = build_portfolio_page("Portfolio", Some("{ broken"));
        let authored = page.clone();
        let (ctx, outcome) = load(page, Fixed(None)).await;
        assert_eq!(outcome, LoadOutcome::Placeholder);
        assert_eq!(*ctx.document().lock().await, authored);
    }

    #[tokio::test]
    async fn call_to_action_shows_target_tab() {
        let page = build_portfolio_page("Portfolio", None);
        let (ctx, _) = load(page, Fixed(Some(HomeContent::default()))).await;
        let button = ctx
            .document()
            .lock()
            .await
            .element_by_id(ids::CTA_PROJECTS)
            .unwrap();
        ctx.dispatch(PageEvent::Click(button)).await;

        let doc = ctx.document().lock().await;
        let projects = doc.element_by_id("projects").unwrap();
        assert!(!doc.has_attribute(projects, "hidden"));
    }
}
