mod common;

use grapevine::{AppError, db};

#[tokio::test]
async fn created_posts_can_be_found_and_previewed() {
    let pool = common::pool().await;
    let author = common::user(&pool, "Author").await;

    let post = db::posts::create(&pool, &author.id, "first!").await.unwrap();

    let found = db::posts::find(&pool, &post.id).await.unwrap().unwrap();
    assert_eq!(found.content, "first!");
    assert_eq!(found.author_id, author.id);

    let preview = db::posts::preview(&pool, &post.id).await.unwrap().unwrap();
    assert_eq!(preview.author_alias, "Author");
    assert_eq!(preview.like_count, 0);
}

#[tokio::test]
async fn the_author_can_edit_their_post() {
    let pool = common::pool().await;
    let author = common::user(&pool, "Author").await;
    let post = db::posts::create(&pool, &author.id, "draft").await.unwrap();

    db::posts::update(&pool, &post.id, &author.id, "final")
        .await
        .unwrap();

    let found = db::posts::find(&pool, &post.id).await.unwrap().unwrap();
    assert_eq!(found.content, "final");
}

#[tokio::test]
async fn a_non_author_edit_is_denied_and_changes_nothing() {
    let pool = common::pool().await;
    let author = common::user(&pool, "Author").await;
    let rando = common::user(&pool, "Rando").await;
    let post = db::posts::create(&pool, &author.id, "mine").await.unwrap();

    let err = db::posts::update(&pool, &post.id, &rando.id, "now it's mine")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::PermissionDenied(_)));

    let found = db::posts::find(&pool, &post.id).await.unwrap().unwrap();
    assert_eq!(found.content, "mine");
}

#[tokio::test]
async fn a_non_author_delete_is_denied() {
    let pool = common::pool().await;
    let author = common::user(&pool, "Author").await;
    let rando = common::user(&pool, "Rando").await;
    let post = db::posts::create(&pool, &author.id, "mine").await.unwrap();

    let err = db::posts::delete(&pool, &post.id, &rando.id).await.unwrap_err();
    assert!(matches!(err, AppError::PermissionDenied(_)));
    assert!(db::posts::find(&pool, &post.id).await.unwrap().is_some());
}

#[tokio::test]
async fn editing_a_missing_post_is_not_found() {
    let pool = common::pool().await;
    let author = common::user(&pool, "Author").await;

    let err = db::posts::update(&pool, "nope", &author.id, "x")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn deleting_a_post_takes_its_comments_and_likes_along() {
    let pool = common::pool().await;
    let author = common::user(&pool, "Author").await;
    let fan = common::user(&pool, "Fan").await;
    let post = db::posts::create(&pool, &author.id, "bye").await.unwrap();

    db::comments::create(&pool, &post.id, &fan.id, "nice").await.unwrap();
    db::likes::toggle(&pool, &post.id, &fan.id).await.unwrap();

    db::posts::delete(&pool, &post.id, &author.id).await.unwrap();

    assert!(db::posts::find(&pool, &post.id).await.unwrap().is_none());
    assert_eq!(db::comments::count_for_post(&pool, &post.id).await.unwrap(), 0);
    assert_eq!(db::likes::count(&pool, &post.id).await.unwrap(), 0);
}
