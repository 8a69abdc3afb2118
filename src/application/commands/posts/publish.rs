// src/application/commands/posts/publish.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostId,
};
use uuid::Uuid;

#[derive(Debug, Clone, Copy)]
pub struct SetPublishStateCommand {
    pub id: Uuid,
    pub publish: bool,
}

impl PostCommandService {
    pub async fn set_publish_state(
        &self,
        command: SetPublishStateCommand,
    ) -> ApplicationResult<PostDto> {
        let id = PostId(command.id);
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("post not found: {id}")))?;

        let now = self.clock.now();
        let transitioned = if command.publish {
            post.publish(now)
        } else {
            post.unpublish(now)
        };

        let saved = self.posts.update(id, transitioned).await?;
        Ok(saved.into())
    }
}
