pub mod admin_posts;
pub mod auth;
pub mod health;
pub mod posts;
