use std::sync::Arc;
use std::sync::atomic::Ordering;

use chrono::Duration;
use uuid::Uuid;

mod support;

use balanza_core::application::commands::posts::{PostCommandService, SetPublishStateCommand};
use balanza_core::application::dto::{PostCreateInput, PostUpdateInput, SeoMetaDto};
use balanza_core::application::error::ApplicationError;
use balanza_core::domain::errors::DomainError;
use balanza_core::domain::post::PostStatus;

use support::{
    FixedClock, InMemoryPostRepository, InMemoryTagRepository, SeqIdGenerator, draft_post,
};

struct Harness {
    posts: Arc<InMemoryPostRepository>,
    clock: Arc<FixedClock>,
    service: PostCommandService,
}

fn harness(repo: InMemoryPostRepository) -> Harness {
    let posts = Arc::new(repo);
    let tags = Arc::new(InMemoryTagRepository::default());
    let clock = Arc::new(FixedClock::default());
    let service = PostCommandService::new(
        Arc::clone(&posts) as _,
        tags as _,
        Arc::clone(&clock) as _,
        Arc::new(SeqIdGenerator::default()) as _,
    );
    Harness {
        posts,
        clock,
        service,
    }
}

fn create_input(title: &str) -> PostCreateInput {
    PostCreateInput {
        title: title.to_owned(),
        slug: None,
        excerpt: Some("resumen".into()),
        content_markdown: "## Sección\n\ncontenido".into(),
        cover_image_url: None,
        seo_meta: None,
        tag_slugs: Vec::new(),
    }
}

#[tokio::test]
async fn create_post_derives_slug_and_defaults_to_draft() {
    let h = harness(InMemoryPostRepository::default());

    let dto = h
        .service
        .create_post(None, create_input("Monotributo al día"))
        .await
        .unwrap();

    assert_eq!(dto.slug, "monotributo-al-dia");
    assert_eq!(dto.status, PostStatus::Draft);
    assert!(dto.published_at.is_none());
    assert_eq!(dto.reading_time_min, Some(1));
    assert!(h.posts.get(dto.id).is_some());
}

#[tokio::test]
async fn create_post_materializes_tags_and_seo_meta() {
    let h = harness(InMemoryPostRepository::default());

    let mut input = create_input("Cierre de balance");
    input.tag_slugs = vec!["Impuestos".into(), "pymes".into()];
    input.seo_meta = Some(SeoMetaDto {
        title: Some("Cierre de balance".into()),
        description: Some("Guía breve".into()),
        ..SeoMetaDto::default()
    });

    let dto = h.service.create_post(None, input).await.unwrap();

    let slugs: Vec<&str> = dto.tags.iter().map(|t| t.slug.as_str()).collect();
    assert_eq!(slugs, vec!["impuestos", "pymes"]);
    assert_eq!(
        dto.seo_meta.as_ref().and_then(|m| m.title.as_deref()),
        Some("Cierre de balance")
    );
}

#[tokio::test]
async fn create_post_with_taken_slug_fails_before_persisting() {
    let existing = draft_post(1, "Monotributo al día", support::test_epoch());
    let h = harness(InMemoryPostRepository::with_posts([existing]));

    let err = h
        .service
        .create_post(None, create_input("Monotributo al día"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::DuplicateSlug(_))
    ));
    assert_eq!(h.posts.create_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn create_post_rejects_unsluggable_title() {
    let h = harness(InMemoryPostRepository::default());

    let err = h
        .service
        .create_post(None, create_input("¡¡¡"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::InvalidSlug(_))
    ));
}

#[tokio::test]
async fn update_post_merges_fields_and_bumps_updated_at() {
    let post = draft_post(7, "Título original", support::test_epoch());
    let h = harness(InMemoryPostRepository::with_posts([post.clone()]));
    h.clock.advance(Duration::minutes(10));

    let dto = h
        .service
        .update_post(
            Uuid::from_u128(7),
            PostUpdateInput {
                title: Some("Título nuevo".into()),
                ..PostUpdateInput::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(dto.title, "Título nuevo");
    // update never changes publication state
    assert_eq!(dto.status, PostStatus::Draft);
    assert_eq!(dto.slug, post.slug.as_str());
    assert!(dto.updated_at > post.updated_at);
}

#[tokio::test]
async fn update_post_recomputes_reading_time_when_body_changes() {
    let post = draft_post(7, "Artículo", support::test_epoch());
    let h = harness(InMemoryPostRepository::with_posts([post]));

    let long_body = "palabra ".repeat(450);
    let dto = h
        .service
        .update_post(
            Uuid::from_u128(7),
            PostUpdateInput {
                content_markdown: Some(long_body),
                ..PostUpdateInput::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(dto.reading_time_min, Some(3));
}

#[tokio::test]
async fn update_post_missing_id_is_not_found() {
    let h = harness(InMemoryPostRepository::default());

    let err = h
        .service
        .update_post(Uuid::from_u128(99), PostUpdateInput::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
    assert_eq!(h.posts.update_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn update_post_to_taken_slug_is_rejected() {
    let a = draft_post(1, "Primero", support::test_epoch());
    let b = draft_post(2, "Segundo", support::test_epoch());
    let h = harness(InMemoryPostRepository::with_posts([a, b]));

    let err = h
        .service
        .update_post(
            Uuid::from_u128(2),
            PostUpdateInput {
                slug: Some("Primero".into()),
                ..PostUpdateInput::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::DuplicateSlug(_))
    ));
}

#[tokio::test]
async fn update_post_keeping_own_slug_passes_the_uniqueness_check() {
    let post = draft_post(3, "Mi artículo", support::test_epoch());
    let h = harness(InMemoryPostRepository::with_posts([post]));

    let dto = h
        .service
        .update_post(
            Uuid::from_u128(3),
            PostUpdateInput {
                slug: Some("mi-articulo".into()),
                excerpt: Some("otro resumen".into()),
                ..PostUpdateInput::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(dto.slug, "mi-articulo");
    assert_eq!(dto.excerpt.as_deref(), Some("otro resumen"));
}

#[tokio::test]
async fn publish_and_unpublish_round_trip() {
    let post = draft_post(5, "Por publicar", support::test_epoch());
    let h = harness(InMemoryPostRepository::with_posts([post]));
    h.clock.advance(Duration::minutes(1));

    let published = h
        .service
        .set_publish_state(SetPublishStateCommand {
            id: Uuid::from_u128(5),
            publish: true,
        })
        .await
        .unwrap();
    assert_eq!(published.status, PostStatus::Published);
    assert!(published.published_at.is_some());

    h.clock.advance(Duration::minutes(1));
    let draft = h
        .service
        .set_publish_state(SetPublishStateCommand {
            id: Uuid::from_u128(5),
            publish: false,
        })
        .await
        .unwrap();
    assert_eq!(draft.status, PostStatus::Draft);
    assert!(draft.published_at.is_none());
}

#[tokio::test]
async fn publish_missing_post_is_not_found() {
    let h = harness(InMemoryPostRepository::default());

    let err = h
        .service
        .set_publish_state(SetPublishStateCommand {
            id: Uuid::from_u128(404),
            publish: true,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn delete_post_removes_the_row() {
    let post = draft_post(9, "Efímero", support::test_epoch());
    let h = harness(InMemoryPostRepository::with_posts([post]));

    h.service.delete_post(Uuid::from_u128(9)).await.unwrap();
    assert!(h.posts.get(Uuid::from_u128(9)).is_none());
}

#[tokio::test]
async fn delete_missing_post_fails_without_touching_the_store() {
    let h = harness(InMemoryPostRepository::default());

    let err = h.service.delete_post(Uuid::from_u128(404)).await.unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
    assert_eq!(h.posts.delete_calls.load(Ordering::SeqCst), 0);
}
