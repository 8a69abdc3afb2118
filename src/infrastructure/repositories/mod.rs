mod error;
mod postgres_admin;
mod postgres_post;
mod postgres_tag;

pub use error::map_sqlx;
pub use postgres_admin::PostgresAdminRepository;
pub use postgres_post::PostgresPostRepository;
pub use postgres_tag::PostgresTagRepository;
