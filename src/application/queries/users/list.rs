use super::UserQueryService;
use crate::application::{dto::UserDto, error::ApplicationResult};

pub const DEFAULT_LIMIT: u32 = 100;
const MAX_LIMIT: u32 = 1000;

pub struct ListUsersQuery {
    pub limit: u32,
    pub offset: u64,
}

impl Default for ListUsersQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl UserQueryService {
    pub async fn list_users(&self, query: ListUsersQuery) -> ApplicationResult<Vec<UserDto>> {
        let limit = query.limit.clamp(1, MAX_LIMIT);
        let users = self.user_repo.list(limit, query.offset).await?;
        Ok(users.into_iter().map(Into::into).collect())
    }
}
