//! Page session management.
//!
//! A page session is one opened copy of the portfolio page. It owns the
//! explicit [`PageContext`] every component works through: the shared
//! document, the per-component event subscriptions and the timers scheduled
//! on behalf of the page.
//!
//! # Architecture
//!
//! - [`PageContext`]: shared document, subscriptions and deferred callbacks
//! - [`PageEvent`] / [`EventHandler`]: the subscription contract components implement
//! - [`PageSession`]: opens a page, wires the components and drives user input
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use portfolio_site::content::FileContentSource;
//! use portfolio_site::page::{build_portfolio_page, EMBEDDED_HOME_CONTENT};
//! use portfolio_site::session::{PageSession, SessionOptions};
//!
//! # async fn run() {
//! let page = build_portfolio_page("Portfolio", Some(EMBEDDED_HOME_CONTENT));
//! let source = Arc::new(FileContentSource::new("content/home.json"));
//! let session = PageSession::open(page, source, SessionOptions::default()).await;
//! session.click_tab("projects").await;
//! assert_eq!(session.active_tab().await.as_deref(), Some("projects"));
//! # }
//! ```

mod context;
mod events;
mod page;

pub use context::{PageContext, SharedDocument};
pub use events::{EventHandler, Key, PageEvent};
pub use page::{PageSession, SessionOptions};
