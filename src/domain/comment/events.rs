// src/domain/comment/events.rs
use crate::domain::comment::entity::Comment;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Topic every comment mutation is announced on.
pub const COMMENT_CHANGED_TOPIC: &str = "comment.changed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentAction {
    Created,
    Updated,
}

impl CommentAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}

/// Flat copy of a persisted comment as it travels on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentSnapshot {
    pub id: String,
    pub entity_type: String,
    pub entity_id: String,
    pub author_id: String,
    pub text: String,
    #[serde(with = "rfc3339_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(with = "rfc3339_option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Comment> for CommentSnapshot {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            entity_type: comment.entity_type.to_string(),
            entity_id: comment.entity_id.to_string(),
            author_id: comment.author_id.to_string(),
            text: comment.text.to_string(),
            created_at: Some(comment.created_at),
            updated_at: Some(comment.updated_at),
        }
    }
}

/// Change notification for a single comment. Built fresh for each mutation
/// and dropped once the publish attempt returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentChangedEvent {
    pub event_name: &'static str,
    pub action: CommentAction,
    pub comment: CommentSnapshot,
    #[serde(serialize_with = "rfc3339_option::serialize_required")]
    pub published_at: DateTime<Utc>,
}

impl CommentChangedEvent {
    pub fn new(action: CommentAction, comment: &Comment, published_at: DateTime<Utc>) -> Self {
        Self {
            event_name: COMMENT_CHANGED_TOPIC,
            action,
            comment: CommentSnapshot::from(comment),
            published_at,
        }
    }

    /// Message key: the comment id.
    pub fn key(&self) -> &str {
        &self.comment.id
    }
}

mod rfc3339_option {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::Serializer;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_some(&dt.to_rfc3339_opts(SecondsFormat::Micros, true)),
            None => serializer.serialize_none(),
        }
    }

    pub fn serialize_required<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Micros, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comment::value_objects::{AuthorId, CommentId, CommentText, EntityId, EntityType};
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn serializes_to_wire_shape() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let comment = Comment::create(
            CommentId::new("c-1").unwrap(),
            EntityType::new("post").unwrap(),
            EntityId::new("42").unwrap(),
            AuthorId::new("u1").unwrap(),
            CommentText::new("hello").unwrap(),
            now,
        );
        let published = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 5).unwrap();
        let event = CommentChangedEvent::new(CommentAction::Created, &comment, published);

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({
                "event_name": "comment.changed",
                "action": "created",
                "comment": {
                    "id": "c-1",
                    "entity_type": "post",
                    "entity_id": "42",
                    "author_id": "u1",
                    "text": "hello",
                    "created_at": "2024-01-01T00:00:00.000000Z",
                    "updated_at": "2024-01-01T00:00:00.000000Z"
                },
                "published_at": "2024-01-01T00:00:05.000000Z"
            })
        );
        assert_eq!(event.key(), "c-1");
    }

    #[test]
    fn missing_timestamps_serialize_as_null() {
        let snapshot = CommentSnapshot {
            id: "c-2".into(),
            entity_type: "ticket".into(),
            entity_id: "7".into(),
            author_id: "u2".into(),
            text: "x".into(),
            created_at: None,
            updated_at: None,
        };
        let value = serde_json::to_value(&snapshot).unwrap();
        assert!(value["created_at"].is_null());
        assert!(value["updated_at"].is_null());
    }

    #[test]
    fn action_labels_match_serialized_form() {
        for action in [CommentAction::Created, CommentAction::Updated] {
            let value = serde_json::to_value(action).unwrap();
            assert_eq!(value, json!(action.as_str()));
        }
    }
}
