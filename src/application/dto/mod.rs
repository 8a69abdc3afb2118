pub mod auth;
pub mod health;
pub mod pagination;
pub mod posts;
pub mod serde_time;

pub use auth::{AdminDto, SessionDto};
pub use health::HealthReportDto;
pub use pagination::PagedResult;
pub use posts::{
    PostCreateInput, PostDto, PostListItemDto, PostUpdateInput, SeoMetaDto, TagDto,
};
