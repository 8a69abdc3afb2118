pub mod password;
pub mod session_store;

pub use password::Argon2PasswordHasher;
pub use session_store::PgSessionStore;
