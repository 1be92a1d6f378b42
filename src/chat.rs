//! Client-only chat widget.
//!
//! Submitted lines are echoed into the message list and answered, after a
//! fixed delay, by a [`Responder`]. The only responder shipped is
//! [`CannedResponder`]; there is no backend behind the widget.

use std::sync::Arc;
use std::time::Duration;

use crate::dom::{Document, Element, NodeId};
use crate::page::ids;
use crate::session::{EventHandler, PageContext, PageEvent};

/// Delay before the bot reply is appended.
pub const REPLY_DELAY: Duration = Duration::from_millis(600);
/// Delay before an opener click moves focus to the input.
pub const FOCUS_DELAY: Duration = Duration::from_millis(100);
/// Attribute marking elements that open the chat.
pub const OPENER_ATTRIBUTE: &str = "data-chat-open";
/// Class carried by every rendered message.
pub const MESSAGE_CLASS: &str = "chat-message";
/// The canned bot acknowledgement.
pub const ACKNOWLEDGEMENT: &str = "Thanks — I received your message. I will reply shortly.";

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS class tagging a message with its origin.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// One line in the chat list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
        }
    }
}

/// Produces the bot's reply to a user line.
pub trait Responder: std::fmt::Debug + Send + Sync {
    fn reply(&self, message: &str) -> String;
}

/// Stub responder that acknowledges every message with [`ACKNOWLEDGEMENT`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedResponder;

impl Responder for CannedResponder {
    fn reply(&self, _message: &str) -> String {
        ACKNOWLEDGEMENT.to_string()
    }
}

/// The chat widget bound to its page elements.
#[derive(Debug)]
pub struct ChatStub {
    form: Option<NodeId>,
    input: Option<NodeId>,
    list: Option<NodeId>,
    openers: Vec<NodeId>,
    responder: Arc<dyn Responder>,
}

impl ChatStub {
    /// Bind to the chat elements in `doc`. Missing elements disable the
    /// behavior that needs them.
    pub fn discover(doc: &Document, responder: Arc<dyn Responder>) -> Self {
        Self {
            form: doc.element_by_id(ids::CHAT_FORM),
            input: doc.element_by_id(ids::CHAT_INPUT),
            list: doc.element_by_id(ids::CHAT_MESSAGES),
            openers: doc.elements_with_attribute(OPENER_ATTRIBUTE),
            responder,
        }
    }

    /// Handle a submission of the chat form.
    ///
    /// Returns the appended user message, or `None` if the input was blank.
    pub fn submit(&self, ctx: &PageContext, doc: &mut Document) -> Option<ChatMessage> {
        let input = self.input?;
        let text = doc.value(input).unwrap_or_default().trim().to_string();
        if text.is_empty() {
            return None;
        }

        let message = ChatMessage::user(text);
        if let Some(list) = self.list {
            append_message(doc, list, &message);
        }
        doc.set_value(input, "");

        let reply = ChatMessage::bot(self.responder.reply(&message.text));
        if let Some(list) = self.list {
            ctx.schedule(REPLY_DELAY, move |doc| append_message(doc, list, &reply));
        }
        Some(message)
    }

    /// Messages currently shown, in order.
    pub fn messages(&self, doc: &Document) -> Vec<ChatMessage> {
        let Some(list) = self.list else {
            return Vec::new();
        };
        doc.children(list)
            .iter()
            .filter_map(|&node| {
                let sender = if doc.has_class(node, Sender::Bot.class_name()) {
                    Sender::Bot
                } else if doc.has_class(node, Sender::User.class_name()) {
                    Sender::User
                } else {
                    return None;
                };
                Some(ChatMessage {
                    text: doc.text(node).unwrap_or_default().to_string(),
                    sender,
                })
            })
            .collect()
    }
}

fn append_message(doc: &mut Document, list: NodeId, message: &ChatMessage) {
    doc.append(
        list,
        Element::new("div")
            .class(MESSAGE_CLASS)
            .class(message.sender.class_name())
            .text(message.text.as_str()),
    );
}

impl EventHandler for ChatStub {
    fn handle(&self, ctx: &PageContext, doc: &mut Document, event: &PageEvent) {
        match event {
            PageEvent::Submit(target) if Some(*target) == self.form => {
                self.submit(ctx, doc);
            }
            PageEvent::Click(target) if self.openers.contains(target) => {
                if let Some(input) = self.input {
                    ctx.schedule(FOCUS_DELAY, move |doc| doc.focus(input));
                }
            }
            _ => {}
        }
    }
}
