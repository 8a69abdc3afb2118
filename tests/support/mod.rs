#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{
    Mutex,
    atomic::{AtomicU32, AtomicU64, Ordering},
};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use balanza_core::application::ApplicationResult;
use balanza_core::application::ports::security::{IssuedSession, SessionStore};
use balanza_core::application::ports::time::Clock;
use balanza_core::application::ports::util::IdGenerator;
use balanza_core::domain::admin::{Admin, AdminId, AdminRepository, Email, NewAdmin};
use balanza_core::domain::errors::{DomainError, DomainResult};
use balanza_core::domain::post::{
    Post, PostFilters, PostId, PostPage, PostRepository, Slug, Tag, TagId, TagRepository,
};

/// Post store over a hash map, with call counters and a copy of the last
/// filter set so tests can observe what the service asked for.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Mutex<HashMap<Uuid, Post>>,
    pub create_calls: AtomicU32,
    pub update_calls: AtomicU32,
    pub delete_calls: AtomicU32,
    pub last_filters: Mutex<Option<PostFilters>>,
}

impl InMemoryPostRepository {
    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let repo = Self::default();
        {
            let mut map = repo.posts.lock().unwrap();
            for post in posts {
                map.insert(post.id.into(), post);
            }
        }
        repo
    }

    pub fn get(&self, id: Uuid) -> Option<Post> {
        self.posts.lock().unwrap().get(&id).cloned()
    }

    fn matches(post: &Post, filters: &PostFilters) -> bool {
        if let Some(status) = filters.status {
            if post.status != status {
                return false;
            }
        }

        if let Some(search) = filters.search.as_deref().filter(|s| !s.trim().is_empty()) {
            let needle = search.to_lowercase();
            let in_title = post.title.to_lowercase().contains(&needle);
            let in_excerpt = post
                .excerpt
                .as_deref()
                .is_some_and(|e| e.to_lowercase().contains(&needle));
            if !in_title && !in_excerpt {
                return false;
            }
        }

        if let Some(tag) = filters.tag.as_deref().filter(|s| !s.trim().is_empty()) {
            if !post.tags.iter().any(|t| t.slug.as_str() == tag) {
                return false;
            }
        }

        true
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.posts.lock().unwrap().get(&Uuid::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let map = self.posts.lock().unwrap();
        Ok(map.values().find(|p| p.slug == *slug).cloned())
    }

    async fn find_all(&self, filters: PostFilters) -> DomainResult<PostPage> {
        *self.last_filters.lock().unwrap() = Some(filters.clone());

        let map = self.posts.lock().unwrap();
        let mut items: Vec<Post> = map
            .values()
            .filter(|post| Self::matches(post, &filters))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        let total = items.len() as u64;
        let offset = filters.offset.unwrap_or(0) as usize;
        let limit = filters.limit.unwrap_or(10) as usize;
        let items = items.into_iter().skip(offset).take(limit).collect();

        Ok(PostPage { items, total })
    }

    async fn create(&self, post: Post) -> DomainResult<Post> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let mut map = self.posts.lock().unwrap();
        if map.values().any(|p| p.slug == post.slug) {
            return Err(DomainError::DuplicateSlug(post.slug.to_string()));
        }
        map.insert(post.id.into(), post.clone());
        Ok(post)
    }

    async fn update(&self, id: PostId, post: Post) -> DomainResult<Post> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        let mut map = self.posts.lock().unwrap();
        let id = Uuid::from(id);
        if !map.contains_key(&id) {
            return Err(DomainError::NotFound(format!("post not found: {id}")));
        }
        map.insert(id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        let mut map = self.posts.lock().unwrap();
        map.remove(&Uuid::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("post not found: {id}")))
    }

    async fn slug_exists(&self, slug: &Slug, exclude_id: Option<PostId>) -> DomainResult<bool> {
        let map = self.posts.lock().unwrap();
        Ok(map.values().any(|p| {
            p.slug == *slug && exclude_id.map(|id| id != p.id).unwrap_or(true)
        }))
    }
}

#[derive(Default)]
pub struct InMemoryTagRepository {
    tags: Mutex<HashMap<String, Tag>>,
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn find_or_create(&self, slug_text: &str) -> DomainResult<Tag> {
        let slug = Slug::from_text(slug_text)?;
        let mut map = self.tags.lock().unwrap();
        let tag = map.entry(slug.to_string()).or_insert_with(|| Tag {
            id: TagId(Uuid::new_v4()),
            name: slug_text.trim().to_owned(),
            slug,
        });
        Ok(tag.clone())
    }
}

#[derive(Default)]
pub struct InMemoryAdminRepository {
    admins: Mutex<HashMap<Uuid, Admin>>,
}

impl InMemoryAdminRepository {
    pub fn with_admins(admins: impl IntoIterator<Item = Admin>) -> Self {
        let repo = Self::default();
        {
            let mut map = repo.admins.lock().unwrap();
            for admin in admins {
                map.insert(admin.id.into(), admin);
            }
        }
        repo
    }
}

#[async_trait]
impl AdminRepository for InMemoryAdminRepository {
    async fn find_by_id(&self, id: AdminId) -> DomainResult<Option<Admin>> {
        Ok(self.admins.lock().unwrap().get(&Uuid::from(id)).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Admin>> {
        let map = self.admins.lock().unwrap();
        Ok(map.values().find(|a| a.email == *email).cloned())
    }

    async fn upsert(&self, admin: NewAdmin) -> DomainResult<Admin> {
        let mut map = self.admins.lock().unwrap();
        let existing = map.values().find(|a| a.email == admin.email).cloned();
        let stored = match existing {
            Some(mut current) => {
                current.password_hash = admin.password_hash;
                current
            }
            None => Admin {
                id: AdminId(Uuid::new_v4()),
                email: admin.email,
                password_hash: admin.password_hash,
                created_at: admin.created_at,
            },
        };
        map.insert(stored.id.into(), stored.clone());
        Ok(stored)
    }
}

/// Session store that keeps plain tokens in memory; good enough to test
/// the sign-in/sign-out flow without a database.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, (Uuid, DateTime<Utc>)>>,
    counter: AtomicU64,
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn issue(&self, admin_id: Uuid, now: DateTime<Utc>) -> ApplicationResult<IssuedSession> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        let token = format!("token-{n}");
        let expires_at = now + Duration::hours(1);
        self.sessions
            .lock()
            .unwrap()
            .insert(token.clone(), (admin_id, expires_at));
        Ok(IssuedSession { token, expires_at })
    }

    async fn resolve(&self, token: &str, now: DateTime<Utc>) -> ApplicationResult<Option<Uuid>> {
        let map = self.sessions.lock().unwrap();
        Ok(map
            .get(token)
            .filter(|(_, expires_at)| *expires_at > now)
            .map(|(admin_id, _)| *admin_id))
    }

    async fn revoke(&self, token: &str) -> ApplicationResult<()> {
        self.sessions.lock().unwrap().remove(token);
        Ok(())
    }
}

/// The instant every test starts from.
pub fn test_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(now) }
    }

    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += delta;
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::at(test_epoch())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Deterministic ids so assertions can name them.
#[derive(Default)]
pub struct SeqIdGenerator {
    counter: AtomicU64,
}

impl IdGenerator for SeqIdGenerator {
    fn generate(&self) -> Uuid {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        Uuid::from_u128(u128::from(n))
    }
}

pub fn tag(slug_text: &str) -> Tag {
    Tag {
        id: TagId(Uuid::new_v4()),
        name: slug_text.to_owned(),
        slug: Slug::from_text(slug_text).unwrap(),
    }
}

pub fn draft_post(id: u128, title: &str, updated_at: DateTime<Utc>) -> Post {
    Post::create(
        PostId(Uuid::from_u128(id)),
        title,
        "",
        "cuerpo del artículo",
        Some("resumen".into()),
        Vec::new(),
        None,
        updated_at,
    )
    .unwrap()
}

pub fn published_post(id: u128, title: &str, updated_at: DateTime<Utc>) -> Post {
    draft_post(id, title, updated_at).publish(updated_at)
}
