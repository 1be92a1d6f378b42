//! HTML serialization of a [`Document`].

use std::fmt::Write;

use super::{Document, NodeId};

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Elements whose text is emitted raw rather than entity-escaped.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

impl Document {
    /// Serialize the whole document, prefixed with the HTML5 doctype.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n");
        self.render_node(self.root(), &mut out);
        out
    }

    /// Serialize a single subtree.
    #[must_use]
    pub fn render_fragment(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.render_node(node, &mut out);
        out
    }

    fn render_node(&self, node: NodeId, out: &mut String) {
        let Some(element) = self.get(node) else {
            return;
        };

        out.push('<');
        out.push_str(&element.tag);

        // id first, then the remaining attributes in name order
        if let Some(id) = element.element_id() {
            push_attribute(out, "id", id);
        }
        if !element.classes.is_empty() {
            push_attribute(out, "class", &element.classes.join(" "));
        }
        if !element.styles.is_empty() {
            let style = element
                .styles
                .iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect::<Vec<_>>()
                .join("; ");
            push_attribute(out, "style", &style);
        }
        for (name, value) in &element.attributes {
            if name == "id" {
                continue;
            }
            push_attribute(out, name, value);
        }
        out.push('>');

        let tag = element.tag.as_str();
        if VOID_ELEMENTS.contains(&tag) {
            return;
        }

        if RAW_TEXT_ELEMENTS.contains(&tag) {
            out.push_str(&element.text.replace("</", "<\\/"));
        } else {
            out.push_str(&escape_text(&element.text));
        }

        for &child in &element.children {
            self.render_node(child, out);
        }

        let _ = write!(out, "</{tag}>");
    }
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    if value.is_empty() {
        let _ = write!(out, " {name}");
    } else {
        let _ = write!(out, " {name}=\"{}\"", escape_attribute(value));
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;

    #[test]
    fn renders_attributes_classes_and_styles() {
        let mut doc = Document::new();
        let root = doc.root();
        let header = doc.append(
            root,
            Element::new("header")
                .id("site-header")
                .class("site-header sticky")
                .style("--header-bg", "url('a.jpg')")
                .attr("hidden", ""),
        );
        doc.append(header, Element::new("h1").text("Tom & Jerry <3"));

        let html = doc.render_fragment(header);
        assert_eq!(
            html,
            "<header id=\"site-header\" class=\"site-header sticky\" \
             style=\"--header-bg: url('a.jpg')\" hidden><h1>Tom &amp; Jerry &lt;3</h1></header>"
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let mut doc = Document::new();
        let root = doc.root();
        let img = doc.append(root, Element::new("img").attr("src", "me.png"));
        assert_eq!(doc.render_fragment(img), "<img src=\"me.png\">");
    }

    #[test]
    fn script_text_is_not_entity_escaped() {
        let mut doc = Document::new();
        let root = doc.root();
        let script = doc.append(
            root,
            Element::new("script")
                .attr("type", "application/json")
                .text(r#"{"intro":"a & b </script>"}"#),
        );
        let html = doc.render_fragment(script);
        assert!(html.contains(r#"{"intro":"a & b <\/script>"}"#));
    }

    #[test]
    fn render_starts_with_doctype() {
        let doc = Document::new();
        assert!(doc.render().starts_with("<!DOCTYPE html>\n<html"));
    }
}
