//! End-to-end behavior of an opened portfolio page.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use portfolio_site::chat::{ACKNOWLEDGEMENT, ChatMessage, REPLY_DELAY};
use portfolio_site::content::{ContentSource, HomeContent, LoadOutcome};
use portfolio_site::error::{ContentError, Result};
use portfolio_site::page::{EMBEDDED_HOME_CONTENT, build_portfolio_page, ids};
use portfolio_site::session::{Key, PageSession, SessionOptions};

// =============================================================================
// Test Utilities
// =============================================================================

/// Source that always fails, as if the network were down.
#[derive(Debug)]
struct Offline;

#[async_trait]
impl ContentSource for Offline {
    async fn fetch(&self) -> Result<HomeContent> {
        Err(ContentError::Status {
            status: 503,
            url: "offline".to_string(),
        })
    }

    fn location(&self) -> String {
        "offline".to_string()
    }
}

/// Source serving a fixed document.
#[derive(Debug)]
struct Static(HomeContent);

#[async_trait]
impl ContentSource for Static {
    async fn fetch(&self) -> Result<HomeContent> {
        Ok(self.0.clone())
    }

    fn location(&self) -> String {
        "static".to_string()
    }
}

async fn open_with(source: Arc<dyn ContentSource>, embedded: Option<&str>) -> PageSession {
    let page = build_portfolio_page("Portfolio", embedded);
    PageSession::open(page, source, SessionOptions::default()).await
}

async fn open() -> PageSession {
    open_with(Arc::new(Offline), Some(EMBEDDED_HOME_CONTENT)).await
}

async fn text_of(session: &PageSession, id: &str) -> String {
    let doc = session.snapshot().await;
    let node = doc.element_by_id(id).expect(id);
    doc.text(node).unwrap_or_default().to_string()
}

// =============================================================================
// Tabs
// =============================================================================

#[tokio::test]
async fn clicking_each_tab_activates_only_that_tab() {
    let session = open().await;
    for name in ["projects", "experience", "contact", "home"] {
        assert!(session.click_tab(name).await);
        assert_eq!(session.active_tab().await.as_deref(), Some(name));

        let doc = session.snapshot().await;
        let visible = doc
            .elements_by_class("tab-content")
            .into_iter()
            .filter(|&p| !doc.has_attribute(p, "hidden"))
            .count();
        assert_eq!(visible, 1);
    }
}

#[tokio::test]
async fn show_unknown_tab_hides_everything() {
    let session = open().await;
    session.show_tab("nope").await;
    assert_eq!(session.active_tab().await, None);
    assert!(!session.click_tab("nope").await);
}

#[tokio::test]
async fn arrow_keys_wrap_around() {
    let session = open().await;
    let controls = session.tab_controls().to_vec();
    let last = *controls.last().unwrap();

    session.click(last).await;
    assert_eq!(session.active_tab().await.as_deref(), Some("contact"));

    session.key_down("ArrowRight").await;
    assert_eq!(session.active_tab().await.as_deref(), Some("home"));
    assert_eq!(session.snapshot().await.active_element(), Some(controls[0]));

    session.key_down(Key::ArrowLeft).await;
    assert_eq!(session.active_tab().await.as_deref(), Some("contact"));
    assert_eq!(session.snapshot().await.active_element(), Some(last));
}

#[tokio::test]
async fn arrow_keys_need_a_focused_control() {
    let session = open().await;
    session.key_down("ArrowRight").await;
    assert_eq!(session.active_tab().await.as_deref(), Some("home"));

    let input = session.snapshot().await.element_by_id(ids::CHAT_INPUT).unwrap();
    session.focus(input).await;
    session.key_down("ArrowLeft").await;
    assert_eq!(session.active_tab().await.as_deref(), Some("home"));
}

#[tokio::test]
async fn explicit_initial_tab_overrides_markup() {
    let page = build_portfolio_page("Portfolio", None);
    let options = SessionOptions {
        initial_tab: Some("experience".to_string()),
    };
    let session = PageSession::open(page, Arc::new(Offline), options).await;
    assert_eq!(session.active_tab().await.as_deref(), Some("experience"));
}

#[tokio::test]
async fn call_to_actions_switch_tabs() {
    let session = open().await;
    assert!(session.click_id(ids::CTA_CONTACT).await);
    assert_eq!(session.active_tab().await.as_deref(), Some("contact"));
    assert!(session.click_id(ids::CTA_PROJECTS).await);
    assert_eq!(session.active_tab().await.as_deref(), Some("projects"));
}

// =============================================================================
// Content
// =============================================================================

#[tokio::test]
async fn primary_content_is_rendered() {
    let content = HomeContent::from_json(
        r#"{"hero":{"title":"T","subtitle":"S","kicker":"K"},"intro":"I","highlights":["a","b","c"]}"#,
    )
    .unwrap();
    let session = open_with(Arc::new(Static(content)), Some(EMBEDDED_HOME_CONTENT)).await;

    assert_eq!(session.outcome(), LoadOutcome::Primary);
    assert_eq!(text_of(&session, ids::HERO_TITLE).await, "T");
    assert_eq!(text_of(&session, ids::HERO_SUBTITLE).await, "S");
    assert_eq!(text_of(&session, ids::HERO_KICKER).await, "K");
    assert_eq!(text_of(&session, ids::HOME_INTRO).await, "I");

    let doc = session.snapshot().await;
    let list = doc.element_by_id(ids::HOME_HIGHLIGHTS).unwrap();
    assert_eq!(doc.children(list).len(), 3);
}

#[tokio::test]
async fn embedded_fallback_matches_embedded_document() {
    let session = open().await;
    let expected = HomeContent::from_json(EMBEDDED_HOME_CONTENT).unwrap();

    assert_eq!(session.outcome(), LoadOutcome::Embedded);
    assert_eq!(
        Some(text_of(&session, ids::HERO_TITLE).await),
        expected.hero.title
    );
    assert_eq!(
        Some(text_of(&session, ids::PROFILE_NAME).await),
        expected.profile.name
    );
    assert_eq!(Some(text_of(&session, ids::HOME_INTRO).await), expected.intro);
    assert_eq!(
        Some(text_of(&session, ids::HERO_SUBTITLE).await),
        expected.hero.subtitle
    );
    assert_eq!(
        Some(text_of(&session, ids::HERO_KICKER).await),
        expected.hero.kicker
    );
    assert_eq!(
        Some(text_of(&session, ids::PROFILE_EMAIL).await),
        expected.profile.email
    );

    let doc = session.snapshot().await;
    let attr = |id: &str, name: &str| {
        let node = doc.element_by_id(id).expect(id);
        doc.attribute(node, name).map(str::to_string)
    };
    let email = expected.profile.email.as_deref().unwrap();
    assert_eq!(attr(ids::PROFILE_EMAIL, "href"), Some(format!("mailto:{email}")));
    assert_eq!(attr(ids::PROFILE_LINKEDIN, "href"), expected.profile.linkedin);
    assert_eq!(attr(ids::PROFILE_PHOTO, "src"), expected.profile.photo);

    let header = doc.element_by_id(ids::SITE_HEADER).unwrap();
    let bg = expected.profile.header_bg.as_deref().unwrap();
    assert_eq!(
        doc.style_property(header, "--header-bg"),
        Some(format!("url('{bg}')").as_str())
    );

    let list = doc.element_by_id(ids::HOME_HIGHLIGHTS).unwrap();
    let highlights: Vec<String> = doc
        .children(list)
        .iter()
        .map(|&c| doc.text(c).unwrap_or_default().to_string())
        .collect();
    assert_eq!(Some(highlights), expected.highlights);
}

#[tokio::test]
async fn double_failure_keeps_authored_page() {
    let authored = build_portfolio_page("Portfolio", Some("not json"));
    let session = PageSession::open(
        authored.clone(),
        Arc::new(Offline),
        SessionOptions::default(),
    )
    .await;

    assert_eq!(session.outcome(), LoadOutcome::Placeholder);
    assert_eq!(session.snapshot().await, authored);
}

// =============================================================================
// Chat
// =============================================================================

#[tokio::test(start_paused = true)]
async fn chat_hello_gets_one_acknowledgement() {
    let session = open().await;
    session.type_into(ids::CHAT_INPUT, "Hello").await;
    assert!(session.submit_id(ids::CHAT_FORM).await);

    assert_eq!(
        session.chat_messages().await,
        vec![ChatMessage::user("Hello")]
    );
    let doc = session.snapshot().await;
    let input = doc.element_by_id(ids::CHAT_INPUT).unwrap();
    assert_eq!(doc.value(input), Some(""));

    tokio::time::sleep(REPLY_DELAY + Duration::from_millis(50)).await;
    assert_eq!(
        session.chat_messages().await,
        vec![
            ChatMessage::user("Hello"),
            ChatMessage::bot("Thanks — I received your message. I will reply shortly."),
        ]
    );

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(session.chat_messages().await.len(), 2);
    assert_eq!(session.chat_messages().await[1].text, ACKNOWLEDGEMENT);
}

#[tokio::test(start_paused = true)]
async fn whitespace_chat_input_is_ignored() {
    let session = open().await;
    session.type_into(ids::CHAT_INPUT, "  \t ").await;
    session.submit_id(ids::CHAT_FORM).await;

    tokio::time::sleep(REPLY_DELAY * 2).await;
    assert!(session.chat_messages().await.is_empty());

    let doc = session.snapshot().await;
    let input = doc.element_by_id(ids::CHAT_INPUT).unwrap();
    assert_eq!(doc.value(input), Some("  \t "));
}

#[tokio::test(start_paused = true)]
async fn unload_drops_pending_reply() {
    let session = open().await;
    session.type_into(ids::CHAT_INPUT, "bye").await;
    session.submit_id(ids::CHAT_FORM).await;
    session.unload();

    tokio::time::sleep(REPLY_DELAY * 2).await;
    assert_eq!(session.chat_messages().await, vec![ChatMessage::user("bye")]);
}

#[tokio::test(start_paused = true)]
async fn contact_cta_opens_chat_and_focuses_input() {
    let session = open().await;
    session.click_id(ids::CTA_CONTACT).await;
    assert_eq!(session.active_tab().await.as_deref(), Some("contact"));

    tokio::time::sleep(Duration::from_millis(150)).await;
    let doc = session.snapshot().await;
    assert_eq!(doc.active_element(), doc.element_by_id(ids::CHAT_INPUT));
}
