//! Shared fixtures for service tests

use std::sync::Arc;

use agora_core::entities::{NewPublication, Publication, User};
use agora_core::traits::UnitOfWork;
use agora_db::MemoryDatabase;

use super::context::ServiceContext;
use super::publication;

/// A seeded store: one degree, one page, two tags, an author and one
/// publication carrying both tags.
pub struct Fixture {
    pub db: MemoryDatabase,
    pub ctx: ServiceContext,
    pub author: User,
    pub degree_id: i32,
    pub page_id: i32,
    pub tag_ids: Vec<i32>,
    pub publication: Publication,
}

pub async fn fixture() -> Fixture {
    let db = MemoryDatabase::new();
    let ctx = ServiceContext::new(Arc::new(db.clone()));

    let mut tx = ctx.begin().await.unwrap();
    let degree_id = tx.degrees().create("Computer Science").await.unwrap().id;
    let page_id = tx.pages().create("https://agora.test/home").await.unwrap().id;
    let mut tag_ids = Vec::new();
    for title in ["rust", "databases"] {
        let tag = tx.tags().create(Some(title), None).await.unwrap();
        tag_ids.push(tag.id);
    }
    let author = add_user(tx.as_mut(), degree_id, "author").await;

    let publication = publication::create(
        tx.as_mut(),
        NewPublication {
            title: "First post".into(),
            content: "Hello".into(),
            user_id: author.id,
            page_id,
            tag_ids: tag_ids.clone(),
        },
    )
    .await
    .unwrap()
    .publication;
    tx.commit().await.unwrap();

    Fixture {
        db,
        ctx,
        author,
        degree_id,
        page_id,
        tag_ids,
        publication,
    }
}

/// Insert a user whose mail is derived from `handle`
pub async fn add_user(tx: &mut dyn UnitOfWork, degree_id: i32, handle: &str) -> User {
    let user = User::new(
        handle.to_string(),
        "Tester".to_string(),
        format!("{handle}@agora.test"),
        degree_id,
    );
    tx.users().create(&user).await.unwrap();
    user
}

/// Publish on the fixture page as the fixture author
pub async fn publish(
    tx: &mut dyn UnitOfWork,
    fx: &Fixture,
    title: &str,
    tag_ids: Vec<i32>,
) -> Publication {
    publication::create(
        tx,
        NewPublication {
            title: title.to_string(),
            content: format!("{title} content"),
            user_id: fx.author.id,
            page_id: fx.page_id,
            tag_ids,
        },
    )
    .await
    .unwrap()
    .publication
}
