use super::CommentQueryService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::{EntityId, EntityType},
};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ApplicationError::validation(format!(
                "sort must be 'asc' or 'desc', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListCommentsQuery {
    pub entity_type: String,
    pub entity_id: String,
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
    pub sort: SortOrder,
}

/// Offset pagination over an already ordered slice. A page past the end is
/// empty rather than an error.
pub fn paginate<T: Clone>(items: &[T], page: u32, limit: u32) -> Vec<T> {
    let limit = limit as usize;
    let start = (page.saturating_sub(1) as usize).saturating_mul(limit);
    let end = start.saturating_add(limit).min(items.len());
    if start >= end {
        return Vec::new();
    }
    items[start..end].to_vec()
}

impl CommentQueryService {
    pub async fn list_comments(&self, query: ListCommentsQuery) -> ApplicationResult<Vec<CommentDto>> {
        if query.page == 0 {
            return Err(ApplicationError::validation("page must be at least 1"));
        }
        if query.limit == 0 {
            return Err(ApplicationError::validation("limit must be at least 1"));
        }

        let entity_type = EntityType::new(query.entity_type)?;
        let entity_id = EntityId::new(query.entity_id)?;

        let mut comments = self.repo.list_by_entity(&entity_type, &entity_id).await?;
        if comments.is_empty() {
            return Err(ApplicationError::not_found(format!(
                "no comments found for entity {entity_type} with id {entity_id}"
            )));
        }

        comments.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        if query.sort == SortOrder::Desc {
            comments.reverse();
        }

        Ok(paginate(&comments, query.page, query.limit)
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
