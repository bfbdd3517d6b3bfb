mod common;

use grapevine::db;

#[tokio::test]
async fn top_ranks_by_like_count_and_caps_at_ten() {
    let pool = common::pool().await;
    let author = common::user(&pool, "Author").await;
    let fans = [
        common::user(&pool, "Fan One").await,
        common::user(&pool, "Fan Two").await,
        common::user(&pool, "Fan Three").await,
    ];

    // 12 posts; post i gets i % 4 likes
    for i in 0..12i64 {
        let post = db::posts::create(&pool, &author.id, &format!("post {i}"))
            .await
            .unwrap();
        common::backdate(&pool, &post.id, 1_000 + i).await;
        for fan in fans.iter().take((i % 4) as usize) {
            db::likes::toggle(&pool, &post.id, &fan.id).await.unwrap();
        }
    }

    let top = db::posts::top(&pool, 10).await.unwrap();
    assert_eq!(top.len(), 10);
    for pair in top.windows(2) {
        assert!(pair[0].like_count >= pair[1].like_count);
    }
    assert_eq!(top[0].like_count, 3);
}

#[tokio::test]
async fn friends_feed_shows_only_friends_posts_newest_first() {
    let pool = common::pool().await;
    let reader = common::user(&pool, "Reader").await;
    let friend = common::user(&pool, "Friend").await;
    let stranger = common::user(&pool, "Stranger").await;

    db::friends::toggle(&pool, &reader.id, &friend.id).await.unwrap();

    let old = db::posts::create(&pool, &friend.id, "older").await.unwrap();
    common::backdate(&pool, &old.id, 1_000).await;
    let new = db::posts::create(&pool, &friend.id, "newer").await.unwrap();
    common::backdate(&pool, &new.id, 2_000).await;
    db::posts::create(&pool, &stranger.id, "unrelated").await.unwrap();

    let feed = db::posts::friends_feed(&pool, &reader.id, 10).await.unwrap();
    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0].content, "newer");
    assert_eq!(feed[1].content, "older");
}

#[tokio::test]
async fn the_feed_is_not_reciprocal() {
    let pool = common::pool().await;
    let reader = common::user(&pool, "Reader").await;
    let friend = common::user(&pool, "Friend").await;

    db::friends::toggle(&pool, &reader.id, &friend.id).await.unwrap();
    db::posts::create(&pool, &reader.id, "my own post").await.unwrap();

    // the friend never friended the reader back
    let feed = db::posts::friends_feed(&pool, &friend.id, 10).await.unwrap();
    assert!(feed.is_empty());
}

#[tokio::test]
async fn unfriending_empties_the_feed_again() {
    let pool = common::pool().await;
    let reader = common::user(&pool, "Reader").await;
    let friend = common::user(&pool, "Friend").await;

    db::posts::create(&pool, &friend.id, "hi").await.unwrap();

    assert!(db::friends::toggle(&pool, &reader.id, &friend.id).await.unwrap());
    assert_eq!(db::posts::friends_feed(&pool, &reader.id, 10).await.unwrap().len(), 1);

    assert!(!db::friends::toggle(&pool, &reader.id, &friend.id).await.unwrap());
    assert!(db::posts::friends_feed(&pool, &reader.id, 10).await.unwrap().is_empty());
}
