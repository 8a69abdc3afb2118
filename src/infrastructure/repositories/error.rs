use crate::domain::errors::DomainError;

const CNT_POST_SLUG: &str = "posts_slug_key";
const CNT_TAG_SLUG: &str = "tags_slug_key";
const CNT_ADMIN_EMAIL: &str = "admins_email_key";
const CNT_POST_PUBLISHED_CHECK: &str = "posts_published_requires_timestamp_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_POST_SLUG | CNT_TAG_SLUG => {
                        DomainError::DuplicateSlug("slug already exists".into())
                    }
                    CNT_ADMIN_EMAIL => DomainError::Validation("email already registered".into()),
                    CNT_POST_PUBLISHED_CHECK => {
                        DomainError::Validation("published posts require published_at".into())
                    }
                    other => {
                        DomainError::Repository(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Repository("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Repository(db_err.message().to_string())
        }
        _ => DomainError::Repository(err.to_string()),
    }
}
