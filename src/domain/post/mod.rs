pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Post, PostChanges};
pub use repository::{PostFilters, PostPage, PostRepository, TagRepository};
pub use value_objects::{PostId, PostStatus, SeoMeta, Slug, Tag, TagId};
