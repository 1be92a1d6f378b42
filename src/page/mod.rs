//! Portfolio page markup.
//!
//! Builds the authored page as a [`Document`]: header, tab bar, one panel per
//! tab, the home section placeholders, the chat widget and the embedded
//! fallback copy of the home content.

use crate::chat::OPENER_ATTRIBUTE;
use crate::dom::{Document, Element, NodeId};
use crate::tabs::{ACTIVE_CLASS, CONTROL_CLASS, PANEL_CLASS, TAB_ATTRIBUTE};

/// Stable element identifiers shared by the page markup and its components.
pub mod ids {
    pub const SITE_HEADER: &str = "site-header";
    pub const HERO_KICKER: &str = "hero-kicker";
    pub const HERO_TITLE: &str = "hero-title";
    pub const HERO_SUBTITLE: &str = "hero-subtitle";
    pub const PROFILE_NAME: &str = "profile-name";
    pub const PROFILE_EMAIL: &str = "profile-email";
    pub const PROFILE_LINKEDIN: &str = "profile-linkedin";
    pub const PROFILE_PHOTO: &str = "profile-photo";
    pub const HOME_INTRO: &str = "home-intro";
    pub const HOME_HIGHLIGHTS: &str = "home-highlights";
    pub const CTA_PROJECTS: &str = "cta-projects";
    pub const CTA_CONTACT: &str = "cta-contact";
    pub const CHAT_FORM: &str = "chat-form";
    pub const CHAT_INPUT: &str = "chat-input";
    pub const CHAT_MESSAGES: &str = "chat-messages";
    pub const HOME_DATA: &str = "home-data";
}

/// Embedded copy of the home content, inlined into the page markup.
pub const EMBEDDED_HOME_CONTENT: &str = include_str!("../../content/home.json");

/// Route the chat form posts to.
pub const CHAT_ACTION: &str = "/chat";
/// Form field carrying the chat input.
pub const CHAT_FIELD: &str = "message";

/// Link that opens the page with tab `name` selected.
pub fn tab_href(name: &str) -> String {
    format!("/?tab={name}")
}

/// Tabs in display order: `(name, label)`.
pub const TABS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("projects", "Projects"),
    ("experience", "Experience"),
    ("contact", "Contact"),
];

/// Build the authored portfolio page.
///
/// `embedded_json` is written verbatim into the `#home-data` script element;
/// pass `None` to author a page without an embedded fallback.
#[must_use]
pub fn build_portfolio_page(title: &str, embedded_json: Option<&str>) -> Document {
    let mut doc = Document::new();
    let root = doc.root();

    let head = doc.append(root, Element::new("head"));
    doc.append(head, Element::new("meta").attr("charset", "utf-8"));
    doc.append(
        head,
        Element::new("meta")
            .attr("name", "viewport")
            .attr("content", "width=device-width, initial-scale=1"),
    );
    doc.append(head, Element::new("title").text(title));
    doc.append(
        head,
        Element::new("link")
            .attr("rel", "stylesheet")
            .attr("href", "/static/app.css"),
    );

    let body = doc.append(root, Element::new("body"));
    header(&mut doc, body);

    let main = doc.append(body, Element::new("main").id("app").class("container"));
    let active = TABS.first().map(|(name, _)| *name);
    for &(name, label) in TABS {
        let panel = doc.append(
            main,
            Element::new("section")
                .id(name)
                .class(PANEL_CLASS)
                .attr("role", "tabpanel")
                .attr("aria-label", label),
        );
        if Some(name) == active {
            doc.add_class(panel, ACTIVE_CLASS);
        } else {
            doc.set_attribute(panel, "hidden", "");
        }
        match name {
            "home" => home_panel(&mut doc, panel),
            "projects" => projects_panel(&mut doc, panel),
            "experience" => experience_panel(&mut doc, panel),
            "contact" => contact_panel(&mut doc, panel),
            _ => {}
        }
    }

    if let Some(json) = embedded_json {
        doc.append(
            body,
            Element::new("script")
                .id(ids::HOME_DATA)
                .attr("type", "application/json")
                .text(json),
        );
    }

    doc
}

fn header(doc: &mut Document, body: NodeId) {
    let header = doc.append(body, Element::new("header").id(ids::SITE_HEADER).class("site-header"));
    let brand = doc.append(header, Element::new("div").class("brand"));
    doc.append(
        brand,
        Element::new("img")
            .id(ids::PROFILE_PHOTO)
            .class("avatar")
            .attr("src", "/static/img/placeholder.png")
            .attr("alt", "Profile photo"),
    );
    doc.append(
        brand,
        Element::new("span")
            .id(ids::PROFILE_NAME)
            .class("brand-name")
            .text("Your Name"),
    );

    let nav = doc.append(
        header,
        Element::new("nav")
            .class("tab-bar")
            .attr("role", "tablist")
            .attr("aria-label", "Sections"),
    );
    let active = TABS.first().map(|(name, _)| *name);
    for &(name, label) in TABS {
        let selected = Some(name) == active;
        let control = doc.append(
            nav,
            Element::new("a")
                .class(CONTROL_CLASS)
                .attr("href", tab_href(name))
                .attr("role", "tab")
                .attr(TAB_ATTRIBUTE, name)
                .attr("aria-controls", name)
                .attr("aria-selected", if selected { "true" } else { "false" })
                .text(label),
        );
        if selected {
            doc.add_class(control, ACTIVE_CLASS);
        }
    }
    doc.append(
        header,
        Element::new("a")
            .class("chat-toggle")
            .attr("href", format!("{}#{}", tab_href("contact"), ids::CHAT_INPUT))
            .attr(OPENER_ATTRIBUTE, "")
            .text("Chat"),
    );
}

fn home_panel(doc: &mut Document, panel: NodeId) {
    let hero = doc.append(panel, Element::new("div").class("hero"));
    doc.append(
        hero,
        Element::new("p")
            .id(ids::HERO_KICKER)
            .class("kicker")
            .text("Portfolio"),
    );
    doc.append(hero, Element::new("h1").id(ids::HERO_TITLE).text("Welcome"));
    doc.append(
        hero,
        Element::new("p")
            .id(ids::HERO_SUBTITLE)
            .class("subtitle")
            .text("Loading…"),
    );
    let actions = doc.append(hero, Element::new("div").class("hero-actions"));
    doc.append(
        actions,
        Element::new("a")
            .id(ids::CTA_PROJECTS)
            .class("btn btn-primary")
            .attr("href", tab_href("projects"))
            .text("See my work"),
    );
    doc.append(
        actions,
        Element::new("a")
            .id(ids::CTA_CONTACT)
            .class("btn btn-outline")
            .attr("href", tab_href("contact"))
            .attr(OPENER_ATTRIBUTE, "")
            .text("Get in touch"),
    );

    doc.append(
        panel,
        Element::new("p")
            .id(ids::HOME_INTRO)
            .class("intro")
            .text("A short introduction will appear here."),
    );
    let highlights = doc.append(
        panel,
        Element::new("ul")
            .id(ids::HOME_HIGHLIGHTS)
            .class("highlights gallery"),
    );
    doc.append(
        highlights,
        Element::new("li")
            .class("highlight-card")
            .text("Highlights are on their way."),
    );
}

fn projects_panel(doc: &mut Document, panel: NodeId) {
    doc.append(panel, Element::new("h2").text("Projects"));
    doc.append(
        panel,
        Element::new("p").text("Selected work, with write-ups and source links."),
    );
}

fn experience_panel(doc: &mut Document, panel: NodeId) {
    doc.append(panel, Element::new("h2").text("Experience"));
    doc.append(
        panel,
        Element::new("p").text("Roles, teams and the systems I owned."),
    );
}

fn contact_panel(doc: &mut Document, panel: NodeId) {
    doc.append(panel, Element::new("h2").text("Contact"));
    let details = doc.append(panel, Element::new("p").class("contact-links"));
    doc.append(
        details,
        Element::new("a")
            .id(ids::PROFILE_EMAIL)
            .attr("href", "mailto:you@example.com")
            .text("you@example.com"),
    );
    doc.append(
        details,
        Element::new("a")
            .id(ids::PROFILE_LINKEDIN)
            .attr("href", "https://www.linkedin.com/")
            .attr("rel", "noopener")
            .text("LinkedIn"),
    );

    let chat = doc.append(
        panel,
        Element::new("div")
            .class("chat-widget")
            .attr("aria-label", "Chat"),
    );
    doc.append(
        chat,
        Element::new("div")
            .id(ids::CHAT_MESSAGES)
            .class("chat-messages")
            .attr("aria-live", "polite"),
    );
    let form = doc.append(
        chat,
        Element::new("form")
            .id(ids::CHAT_FORM)
            .class("chat-form")
            .attr("method", "post")
            .attr("action", CHAT_ACTION),
    );
    doc.append(
        form,
        Element::new("input")
            .id(ids::CHAT_INPUT)
            .attr("type", "text")
            .attr("name", CHAT_FIELD)
            .attr("placeholder", "Type a message…")
            .attr("autocomplete", "off")
            .attr("value", ""),
    );
    doc.append(
        form,
        Element::new("button")
            .class("btn btn-primary")
            .attr("type", "submit")
            .text("Send"),
    );
}
