//! An opened portfolio page.

use std::sync::Arc;

use tracing::info;

use super::{EventHandler, Key, PageContext, PageEvent};
use crate::chat::{CannedResponder, ChatMessage, ChatStub};
use crate::content::{ContentLoader, ContentSource, LoadOutcome};
use crate::dom::{Document, NodeId};
use crate::tabs::TabController;

/// Options applied when a page is opened.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Tab to show on open. `None` keeps the tab the markup leaves visible.
    pub initial_tab: Option<String>,
}

/// One opened page with its components wired up.
#[derive(Debug)]
pub struct PageSession {
    ctx: PageContext,
    tabs: Arc<TabController>,
    chat: Arc<ChatStub>,
    outcome: LoadOutcome,
}

impl PageSession {
    /// Open `document`: bind the tab controller and chat stub, apply the
    /// initial tab, then run the home content load.
    pub async fn open(
        document: Document,
        source: Arc<dyn ContentSource>,
        options: SessionOptions,
    ) -> Self {
        let (tabs, chat) = (
            Arc::new(TabController::discover(&document)),
            Arc::new(ChatStub::discover(&document, Arc::new(CannedResponder))),
        );
        let ctx = PageContext::new(document);
        ctx.subscribe(Arc::clone(&tabs) as Arc<dyn EventHandler>).await;
        ctx.subscribe(Arc::clone(&chat) as Arc<dyn EventHandler>).await;

        if let Some(tab) = &options.initial_tab {
            tabs.show_tab(&mut *ctx.document().lock().await, tab);
        }

        let outcome = ContentLoader::new(source)
            .load_home_content(&ctx, Arc::clone(&tabs))
            .await;

        let active_tab = tabs.active_tab(&*ctx.document().lock().await);
        info!(
            name: "page.ready",
            outcome = ?outcome,
            active_tab = ?active_tab,
            "Portfolio loaded successfully"
        );

        Self {
            ctx,
            tabs,
            chat,
            outcome,
        }
    }

    /// The page context.
    pub fn context(&self) -> &PageContext {
        &self.ctx
    }

    /// Which content document ended up on the page.
    pub fn outcome(&self) -> LoadOutcome {
        self.outcome
    }

    /// Dispatch a raw event.
    pub async fn dispatch(&self, event: PageEvent) {
        self.ctx.dispatch(event).await;
    }

    /// Click an element.
    pub async fn click(&self, node: NodeId) {
        self.dispatch(PageEvent::Click(node)).await;
    }

    /// Click the element with the given id. Returns `false` if there is none.
    pub async fn click_id(&self, id: &str) -> bool {
        let node = self.ctx.document().lock().await.element_by_id(id);
        match node {
            Some(node) => {
                self.click(node).await;
                true
            }
            None => false,
        }
    }

    /// Click the control of the tab called `name`. Returns `false` if there is none.
    pub async fn click_tab(&self, name: &str) -> bool {
        let control = self.tabs.control_for(&*self.ctx.document().lock().await, name);
        match control {
            Some(control) => {
                self.click(control).await;
                true
            }
            None => false,
        }
    }

    /// Press a key while the page has focus.
    pub async fn key_down(&self, key: impl Into<Key>) {
        self.dispatch(PageEvent::KeyDown(key.into())).await;
    }

    /// Give focus to an element.
    pub async fn focus(&self, node: NodeId) {
        self.ctx.document().lock().await.focus(node);
    }

    /// Replace the value of the form control with the given id.
    pub async fn type_into(&self, id: &str, text: &str) {
        let mut doc = self.ctx.document().lock().await;
        if let Some(node) = doc.element_by_id(id) {
            doc.set_value(node, text);
        }
    }

    /// Submit the form with the given id. Returns `false` if there is none.
    pub async fn submit_id(&self, id: &str) -> bool {
        let node = self.ctx.document().lock().await.element_by_id(id);
        match node {
            Some(node) => {
                self.dispatch(PageEvent::Submit(node)).await;
                true
            }
            None => false,
        }
    }

    /// Show a tab directly, as a call-to-action would.
    pub async fn show_tab(&self, name: &str) {
        self.tabs.show_tab(&mut *self.ctx.document().lock().await, name);
    }

    /// Name of the active tab.
    pub async fn active_tab(&self) -> Option<String> {
        self.tabs.active_tab(&*self.ctx.document().lock().await)
    }

    /// Tab controls in order.
    pub fn tab_controls(&self) -> &[NodeId] {
        self.tabs.controls()
    }

    /// Chat messages currently shown.
    pub async fn chat_messages(&self) -> Vec<ChatMessage> {
        self.chat.messages(&*self.ctx.document().lock().await)
    }

    /// A copy of the current document.
    pub async fn snapshot(&self) -> Document {
        self.ctx.document().lock().await.clone()
    }

    /// Render the current document to HTML.
    pub async fn render(&self) -> String {
        self.ctx.document().lock().await.render()
    }

    /// Wait for every pending timer (such as a chat reply) to fire.
    pub async fn settle(&self) {
        self.ctx.settle().await;
    }

    /// Navigate away from the page, dropping pending timers.
    pub fn unload(&self) {
        self.ctx.unload();
    }
}
