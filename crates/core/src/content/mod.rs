use std::fmt::Display;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::validation::{FieldRule, Schema};

/// Kind of content a user can consume and be recommended. Used as a path
/// segment, e.g. `user/{id}/article-interaction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Article,
    Audio,
    Video,
    Meditation,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Article => "article",
            ContentType::Audio => "audio",
            ContentType::Video => "video",
            ContentType::Meditation => "meditation",
        }
    }
}

impl Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Viewed,
    Started,
    Completed,
    Liked,
    Disliked,
    Saved,
    Shared,
}

impl InteractionKind {
    pub const ALL: [InteractionKind; 7] = [
        InteractionKind::Viewed,
        InteractionKind::Started,
        InteractionKind::Completed,
        InteractionKind::Liked,
        InteractionKind::Disliked,
        InteractionKind::Saved,
        InteractionKind::Shared,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InteractionKind::Viewed => "viewed",
            InteractionKind::Started => "started",
            InteractionKind::Completed => "completed",
            InteractionKind::Liked => "liked",
            InteractionKind::Disliked => "disliked",
            InteractionKind::Saved => "saved",
            InteractionKind::Shared => "shared",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentInteraction {
    pub content_id: String,
    pub interaction: InteractionKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub progress_seconds: Option<u32>,
}

impl ContentInteraction {
    pub fn new(content_id: impl Into<String>, interaction: InteractionKind) -> Self {
        Self { content_id: content_id.into(), interaction, rating: None, progress_seconds: None }
    }
}

pub static CONTENT_INTERACTION_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::object()
        .field("content_id", FieldRule::string().required())
        .field(
            "interaction",
            FieldRule::string()
                .required()
                .valid(&InteractionKind::ALL.map(InteractionKind::as_str)),
        )
        .field("rating", FieldRule::integer().min(1).max(5))
        .field("progress_seconds", FieldRule::integer().min(0))
});
