//! Writing a [`HomeContent`] document into the page.

use super::HomeContent;
use crate::dom::{Document, Element};
use crate::page::ids;

/// Hero title used when the document has none.
pub const DEFAULT_HERO_TITLE: &str = "Hi, I'm a software engineer";
/// Hero subtitle used when the document has none.
pub const DEFAULT_HERO_SUBTITLE: &str = "I build reliable systems and friendly interfaces.";
/// CSS custom property carrying the header background image.
pub const HEADER_BG_PROPERTY: &str = "--header-bg";
/// Class of each rebuilt highlight item.
pub const HIGHLIGHT_CLASS: &str = "highlight-card";

/// Populate the page's fixed destinations from `content`.
///
/// Absent fields leave their destination as authored, except the hero title
/// and subtitle which fall back to defaults. Safe to call repeatedly.
pub fn populate(doc: &mut Document, content: &HomeContent) {
    let hero = &content.hero;
    set_text(
        doc,
        ids::HERO_TITLE,
        hero.title.as_deref().unwrap_or(DEFAULT_HERO_TITLE),
    );
    set_text(
        doc,
        ids::HERO_SUBTITLE,
        hero.subtitle.as_deref().unwrap_or(DEFAULT_HERO_SUBTITLE),
    );
    if let Some(kicker) = &hero.kicker {
        set_text(doc, ids::HERO_KICKER, kicker);
    }

    let profile = &content.profile;
    if let Some(name) = &profile.name {
        set_text(doc, ids::PROFILE_NAME, name);
        set_attribute(doc, ids::PROFILE_PHOTO, "alt", name);
    }
    if let Some(email) = &profile.email {
        set_text(doc, ids::PROFILE_EMAIL, email);
        set_attribute(doc, ids::PROFILE_EMAIL, "href", &format!("mailto:{email}"));
    }
    if let Some(linkedin) = &profile.linkedin {
        set_attribute(doc, ids::PROFILE_LINKEDIN, "href", linkedin);
    }
    if let Some(photo) = &profile.photo {
        set_attribute(doc, ids::PROFILE_PHOTO, "src", photo);
    }
    if let Some(bg) = &profile.header_bg {
        if let Some(header) = doc.element_by_id(ids::SITE_HEADER) {
            doc.set_style_property(header, HEADER_BG_PROPERTY, format!("url('{bg}')"));
        }
    }

    if let Some(intro) = &content.intro {
        set_text(doc, ids::HOME_INTRO, intro);
    }

    if let Some(highlights) = &content.highlights {
        if let Some(list) = doc.element_by_id(ids::HOME_HIGHLIGHTS) {
            doc.clear_children(list);
            for highlight in highlights {
                doc.append(
                    list,
                    Element::new("li").class(HIGHLIGHT_CLASS).text(highlight.as_str()),
                );
            }
        }
    }
}

fn set_text(doc: &mut Document, id: &str, text: &str) {
    if let Some(node) = doc.element_by_id(id) {
        doc.set_text(node, text);
    }
}

fn set_attribute(doc: &mut Document, id: &str, name: &str, value: &str) {
    if let Some(node) = doc.element_by_id(id) {
        doc.set_attribute(node, name, value);
    }
}
