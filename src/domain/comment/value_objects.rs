use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Declares a string newtype that rejects empty or whitespace-only input.
/// The original value is kept as given; only the emptiness check trims.
macro_rules! non_blank_string {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::Validation(
                        concat!($label, " cannot be empty").into(),
                    ));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_blank_string!(
    /// Opaque comment identifier. Assigned once at creation.
    CommentId,
    "comment id"
);
non_blank_string!(
    /// Kind of the resource being commented on, e.g. `post` or `ticket`.
    EntityType,
    "entity type"
);
non_blank_string!(EntityId, "entity id");
non_blank_string!(AuthorId, "author id");
non_blank_string!(
    /// Comment body. Never empty or all-whitespace.
    CommentText,
    "comment text"
);
