//! Explicit page context shared by all components.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use super::{EventHandler, PageEvent};
use crate::dom::Document;

/// The page document, shared between event dispatch and deferred callbacks.
pub type SharedDocument = Arc<Mutex<Document>>;

/// Context constructed once per page and handed to every component.
///
/// Cloning is cheap; clones refer to the same page.
#[derive(Debug, Clone)]
pub struct PageContext {
    inner: Arc<ContextInner>,
}

#[derive(Debug)]
struct ContextInner {
    document: SharedDocument,
    handlers: Mutex<Vec<Arc<dyn EventHandler>>>,
    timers: TaskTracker,
    unload: CancellationToken,
}

impl PageContext {
    /// Wrap an authored document.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self {
            inner: Arc::new(ContextInner {
                document: Arc::new(Mutex::new(document)),
                handlers: Mutex::new(Vec::new()),
                timers: TaskTracker::new(),
                unload: CancellationToken::new(),
            }),
        }
    }

    /// The shared document.
    pub fn document(&self) -> &SharedDocument {
        &self.inner.document
    }

    /// Register a component's event handler.
    pub async fn subscribe(&self, handler: Arc<dyn EventHandler>) {
        self.inner.handlers.lock().await.push(handler);
    }

    /// Deliver an event to every subscribed handler, in subscription order.
    ///
    /// Events arriving after [`unload`](Self::unload) are dropped.
    pub async fn dispatch(&self, event: PageEvent) {
        if self.is_unloaded() {
            return;
        }
        let handlers = self.inner.handlers.lock().await.clone();
        let mut doc = self.inner.document.lock().await;
        for handler in &handlers {
            handler.handle(self, &mut doc, &event);
        }
    }

    /// Run `callback` against the document once `delay` has elapsed.
    ///
    /// The callback is fire-and-forget: nothing awaits it and it cannot be
    /// cancelled on its own. Unloading the page drops it.
    pub fn schedule<F>(&self, delay: Duration, callback: F)
    where
        F: FnOnce(&mut Document) + Send + 'static,
    {
        let document = Arc::clone(&self.inner.document);
        let unload = self.inner.unload.clone();
        self.inner.timers.spawn(async move {
            tokio::select! {
                () = unload.cancelled() => {}
                () = tokio::time::sleep(delay) => {
                    let mut doc = document.lock().await;
                    callback(&mut doc);
                }
            }
        });
    }

    /// Wait until every callback scheduled so far has run or been dropped.
    ///
    /// Used by renderers that want the page as it looks once its timers have
    /// fired; the components themselves never wait on their callbacks.
    pub async fn settle(&self) {
        self.inner.timers.close();
        self.inner.timers.wait().await;
        self.inner.timers.reopen();
    }

    /// Navigate away: drop pending timers and stop accepting events.
    pub fn unload(&self) {
        self.inner.unload.cancel();
    }

    /// Whether [`unload`](Self::unload) has been called.
    pub fn is_unloaded(&self) -> bool {
        self.inner.unload.is_cancelled()
    }
}
