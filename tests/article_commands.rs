// tests/article_commands.rs
mod support;

use chrono::Duration;
use pressroom::application::commands::articles::{
    CreateArticleCommand, CreateArticlePayload, DeleteArticleCommand, UpdateArticleCommand,
    UpdateArticlePayload,
};
use pressroom::application::error::ApplicationError;
use pressroom::application::queries::articles::{GetArticleQuery, GetArticlesQuery};
use pressroom::domain::user::Role;
use support::{FIXED_TIME, actor, harness};

fn create_payload(title: &str) -> CreateArticlePayload {
    CreateArticlePayload {
        title: Some(title.into()),
        content: Some("c".repeat(80)),
    }
}

fn update_payload(title: &str) -> UpdateArticlePayload {
    UpdateArticlePayload {
        title: Some(title.into()),
        content: Some("d".repeat(80)),
    }
}

#[tokio::test]
async fn author_creates_an_article_stamped_by_the_clock() {
    let h = harness();

    let command = CreateArticleCommand::from_api(
        actor(1, "ann@example.com", Role::Author),
        create_payload("An interesting headline"),
    )
    .unwrap();
    let id = h.services.command_bus().dispatch(command).await.unwrap();

    let stored = h.article_repo.get(i64::from(id)).unwrap();
    assert_eq!(stored.created_at, *FIXED_TIME);
    assert_eq!(stored.updated_at, *FIXED_TIME);
    assert_eq!(i64::from(stored.author_id), 1);
}

#[tokio::test]
async fn readers_cannot_create_articles() {
    let h = harness();

    let command = CreateArticleCommand::from_api(
        actor(2, "bob@example.com", Role::Reader),
        create_payload("An interesting headline"),
    )
    .unwrap();
    let err = h.services.command_bus().dispatch(command).await.unwrap_err();

    assert!(matches!(err, ApplicationError::Forbidden(msg)
        if msg == "User has no permission to create articles"));
    assert_eq!(h.article_repo.len(), 0);
}

#[tokio::test]
async fn duplicate_titles_conflict() {
    let h = harness();
    let ann = || actor(1, "ann@example.com", Role::Author);

    let first =
        CreateArticleCommand::from_api(ann(), create_payload("An interesting headline")).unwrap();
    h.services.command_bus().dispatch(first).await.unwrap();

    let second =
        CreateArticleCommand::from_api(ann(), create_payload("An interesting headline")).unwrap();
    let err = h.services.command_bus().dispatch(second).await.unwrap_err();

    assert!(matches!(err, ApplicationError::Conflict(msg)
        if msg == "Article with this title already exists"));
}

#[tokio::test]
async fn title_and_content_rules_are_reported_together() {
    let payload = CreateArticlePayload {
        title: Some("short".into()),
        content: Some("too little".into()),
    };

    let err =
        CreateArticleCommand::from_api(actor(1, "ann@example.com", Role::Author), payload)
            .unwrap_err();
    let ApplicationError::Validation(errors) = err else {
        panic!("expected validation error");
    };
    assert_eq!(errors.fields().len(), 2);
}

#[tokio::test]
async fn author_updates_own_article_and_updated_at_moves() {
    let h = harness();
    let ann = || actor(1, "ann@example.com", Role::Author);

    let create =
        CreateArticleCommand::from_api(ann(), create_payload("An interesting headline")).unwrap();
    let id = h.services.command_bus().dispatch(create).await.unwrap();

    h.clock.advance(Duration::minutes(5));

    let update = UpdateArticleCommand::from_api(
        ann(),
        i64::from(id),
        update_payload("A corrected headline"),
    )
    .unwrap();
    h.services.command_bus().dispatch(update).await.unwrap();

    let stored = h.article_repo.get(i64::from(id)).unwrap();
    assert_eq!(stored.title.as_str(), "A corrected headline");
    assert_eq!(stored.created_at, *FIXED_TIME);
    assert_eq!(stored.updated_at, *FIXED_TIME + Duration::minutes(5));
}

#[tokio::test]
async fn keeping_the_same_title_on_update_is_not_a_conflict() {
    let h = harness();
    let ann = || actor(1, "ann@example.com", Role::Author);

    let create =
        CreateArticleCommand::from_api(ann(), create_payload("An interesting headline")).unwrap();
    let id = h.services.command_bus().dispatch(create).await.unwrap();

    let update = UpdateArticleCommand::from_api(
        ann(),
        i64::from(id),
        update_payload("An interesting headline"),
    )
    .unwrap();
    h.services.command_bus().dispatch(update).await.unwrap();
}

#[tokio::test]
async fn authors_cannot_touch_each_others_articles() {
    let h = harness();

    let create = CreateArticleCommand::from_api(
        actor(1, "ann@example.com", Role::Author),
        create_payload("An interesting headline"),
    )
    .unwrap();
    let id = h.services.command_bus().dispatch(create).await.unwrap();

    let bob = actor(2, "bob@example.com", Role::Author);
    let delete = DeleteArticleCommand {
        actor: bob.clone(),
        id: i64::from(id),
    };
    let err = h.services.command_bus().dispatch(delete).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(msg)
        if msg == "User has no permission to modify this article"));

    let update =
        UpdateArticleCommand::from_api(bob, i64::from(id), update_payload("A stolen headline"))
            .unwrap();
    let err = h.services.command_bus().dispatch(update).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn admins_can_delete_any_article() {
    let h = harness();

    let create = CreateArticleCommand::from_api(
        actor(1, "ann@example.com", Role::Author),
        create_payload("An interesting headline"),
    )
    .unwrap();
    let id = h.services.command_bus().dispatch(create).await.unwrap();

    let delete = DeleteArticleCommand {
        actor: actor(9, "root@example.com", Role::Admin),
        id: i64::from(id),
    };
    h.services.command_bus().dispatch(delete).await.unwrap();
    assert_eq!(h.article_repo.len(), 0);
}

#[tokio::test]
async fn readers_are_refused_before_existence_is_revealed() {
    let h = harness();

    // id 42 does not exist; a reader still sees forbidden, not 404
    let command = UpdateArticleCommand::from_api(
        actor(2, "bob@example.com", Role::Reader),
        42,
        update_payload("A corrected headline"),
    )
    .unwrap();
    let err = h.services.command_bus().dispatch(command).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn authors_get_not_found_for_missing_articles() {
    let h = harness();

    let command = UpdateArticleCommand::from_api(
        actor(1, "ann@example.com", Role::Author),
        42,
        update_payload("A corrected headline"),
    )
    .unwrap();
    let err = h.services.command_bus().dispatch(command).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(msg)
        if msg == "Article with id 42 not found"));
}

#[tokio::test]
async fn articles_are_readable_without_authentication() {
    let h = harness();

    let create = CreateArticleCommand::from_api(
        actor(1, "ann@example.com", Role::Author),
        create_payload("An interesting headline"),
    )
    .unwrap();
    let id = h.services.command_bus().dispatch(create).await.unwrap();

    let list = h
        .services
        .query_bus()
        .dispatch(GetArticlesQuery)
        .await
        .unwrap();
    assert_eq!(list.len(), 1);

    let one = h
        .services
        .query_bus()
        .dispatch(GetArticleQuery { id: i64::from(id) })
        .await
        .unwrap();
    assert_eq!(one.title, "An interesting headline");

    let err = h
        .services
        .query_bus()
        .dispatch(GetArticleQuery { id: 404 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}
