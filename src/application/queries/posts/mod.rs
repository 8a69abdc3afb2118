mod get_by_slug;
mod list_all;
mod list_published;
mod service;

pub use list_all::ListAllPostsQuery;
pub use list_published::ListPublishedPostsQuery;
pub use service::PostQueryService;
