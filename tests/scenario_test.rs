mod common;

use grapevine::db;

/// The whole story in one sitting: publish, read, comment, and a pair of
/// toggles that cancel out.
#[tokio::test]
async fn a_post_lives_through_comments_and_likes() {
    let pool = common::pool().await;
    let alice = common::user(&pool, "Alice").await;
    let bob = common::user(&pool, "Bob").await;

    let p1 = db::posts::create(&pool, &alice.id, "hello").await.unwrap();

    // detail view: the post and no comments yet
    let detail = db::posts::preview(&pool, &p1.id).await.unwrap().unwrap();
    assert_eq!(detail.content, "hello");
    assert!(db::comments::latest_for_post(&pool, &p1.id, 5).await.unwrap().is_empty());

    // Bob comments
    db::comments::create(&pool, &p1.id, &bob.id, "hi").await.unwrap();
    let comments = db::comments::latest_for_post(&pool, &p1.id, 5).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].content, "hi");
    assert_eq!(comments[0].author_id, bob.id);

    // nobody has liked anything; an anonymous visitor can't (no user row to
    // attribute the edge to — the handler never reaches the toggle)
    assert_eq!(db::likes::count(&pool, &p1.id).await.unwrap(), 0);

    // Bob toggles twice in sequence and the edge set comes back unchanged
    assert!(db::likes::toggle(&pool, &p1.id, &bob.id).await.unwrap());
    assert!(!db::likes::toggle(&pool, &p1.id, &bob.id).await.unwrap());
    assert_eq!(db::likes::count(&pool, &p1.id).await.unwrap(), 0);

    // the comment is still there and the preview count agrees with the edges
    let detail = db::posts::preview(&pool, &p1.id).await.unwrap().unwrap();
    assert_eq!(detail.like_count, 0);
    assert_eq!(db::comments::count_for_post(&pool, &p1.id).await.unwrap(), 1);
}

#[tokio::test]
async fn comments_cap_at_five_newest_first() {
    let pool = common::pool().await;
    let alice = common::user(&pool, "Alice").await;
    let post = db::posts::create(&pool, &alice.id, "busy thread").await.unwrap();

    for i in 0..7 {
        let c = db::comments::create(&pool, &post.id, &alice.id, &format!("comment {i}"))
            .await
            .unwrap();
        sqlx::query("UPDATE comments SET published_at=? WHERE id=?")
            .bind(1_000 + i as i64)
            .bind(&c.id)
            .execute(&pool)
            .await
            .unwrap();
    }

    let latest = db::comments::latest_for_post(&pool, &post.id, 5).await.unwrap();
    assert_eq!(latest.len(), 5);
    assert_eq!(latest[0].content, "comment 6");
    assert_eq!(latest[4].content, "comment 2");
}
