use crate::domain::admin::entity::{Admin, NewAdmin};
use crate::domain::admin::value_objects::{AdminId, Email};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_by_id(&self, id: AdminId) -> DomainResult<Option<Admin>>;
    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Admin>>;
    /// Insert or refresh the credentials for an e-mail. Used by the
    /// startup bootstrap; identity is assigned by the store.
    async fn upsert(&self, admin: NewAdmin) -> DomainResult<Admin>;
}
