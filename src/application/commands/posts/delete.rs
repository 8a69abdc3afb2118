// src/application/commands/posts/delete.rs
use super::PostCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::post::PostId,
};
use uuid::Uuid;

impl PostCommandService {
    /// Deletion is irreversible; a missing id fails with `NotFound`
    /// before any store delete is issued.
    pub async fn delete_post(&self, id: Uuid) -> ApplicationResult<()> {
        let id = PostId(id);
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("post not found: {id}")))?;

        self.posts.delete(id).await?;
        Ok(())
    }
}
