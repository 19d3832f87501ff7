//! Uniform success/error wrapper returned for every invocation.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub content: Vec<ContentItem>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ResponseEnvelope {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// Error envelope; the message is rendered as `Error: <message>`.
    pub fn error(message: impl std::fmt::Display) -> Self {
        Self {
            content: vec![ContentItem::Text {
                text: format!("Error: {message}"),
            }],
            is_error: true,
        }
    }

    pub fn first_text(&self) -> Option<&str> {
        self.content.iter().find_map(|item| match item {
            ContentItem::Text { text } => Some(text.as_str()),
        })
    }
}

impl From<CoreResult<String>> for ResponseEnvelope {
    fn from(outcome: CoreResult<String>) -> Self {
        match outcome {
            Ok(text) => Self::text(text),
            Err(error) => Self::error(error),
        }
    }
}
