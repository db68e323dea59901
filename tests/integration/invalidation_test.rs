//! Integration tests for sync root invalidation after share changes.

mod helpers;

use pretty_assertions::assert_eq;
use serde_json::json;

use ocshare::{AppError, OcsReply, ShareEvent, SharePermissions, ShareType};

const NESTED_CONFIG: &str = r#"
[account]
id = "alice@cloud.example.com"
user = "alice"
url = "https://cloud.example.com/"

[[sync.roots]]
alias = "all"
local_path = "/tmp/ocshare/all"
remote_path = "/"

[[sync.roots]]
alias = "docs"
local_path = "/tmp/ocshare/docs"
remote_path = "/docs"

[[sync.roots]]
alias = "docs2"
local_path = "/tmp/ocshare/docs2"
remote_path = "/docs2"
"#;

#[tokio::test]
async fn test_create_notifies_every_containing_root() {
    let mut app = helpers::TestApp::with_config(NESTED_CONFIG);
    app.job.push_reply(
        "create_link_share",
        Ok(OcsReply::ok(json!({
            "id": 1,
            "share_type": 3,
            "path": "/docs/a/b.txt",
            "token": "t1",
        }))),
    );

    app.manager
        .create_link_share("/docs/a/b.txt", "", "")
        .await
        .unwrap();
    assert!(matches!(app.next_event().await, ShareEvent::LinkShareCreated(_)));

    let all = app.root("all");
    assert_eq!(all.sync_requests(), 1);
    assert_eq!(
        all.take_invalidated(),
        vec!["", "docs", "docs/a", "docs/a/b.txt"]
    );

    let docs = app.root("docs");
    assert_eq!(docs.sync_requests(), 1);
    assert_eq!(docs.take_invalidated(), vec!["", "a", "a/b.txt"]);

    let docs2 = app.root("docs2");
    assert_eq!(docs2.sync_requests(), 0);
    assert!(docs2.take_invalidated().is_empty());
}

#[tokio::test]
async fn test_delete_invalidates_share_path() {
    let mut app = helpers::TestApp::new();
    app.job.push_reply(
        "get_shares",
        Ok(OcsReply::ok(json!([{
            "id": 9,
            "share_type": 1,
            "path": "/photos/2024",
            "permissions": 1,
            "share_with": "family",
        }]))),
    );
    app.manager.fetch_shares("/photos/2024").await.unwrap();
    let ShareEvent::SharesFetched { shares, .. } = app.next_event().await else {
        panic!("expected SharesFetched");
    };
    assert_eq!(app.root("photos").sync_requests(), 0);

    let share = shares[0].clone();
    assert_eq!(share.share_type(), ShareType::Group);
    app.manager.delete_share(share.clone()).await.unwrap();

    let ShareEvent::ShareDeleted { share: deleted } = app.next_event().await else {
        panic!("expected ShareDeleted");
    };
    assert!(deleted.base().is_deleted());
    assert!(share.base().is_deleted());

    let photos = app.root("photos");
    assert_eq!(photos.sync_requests(), 1);
    assert!(photos.is_invalidated("2024"));
    assert_eq!(app.root("docs").sync_requests(), 0);
}

#[tokio::test]
async fn test_failed_delete_does_not_invalidate() {
    let mut app = helpers::TestApp::new();
    app.job.push_reply(
        "get_shares",
        Ok(OcsReply::ok(json!([{ "id": 9, "share_type": 0, "path": "/docs/x" }]))),
    );
    app.manager.fetch_shares("/docs/x").await.unwrap();
    let ShareEvent::SharesFetched { shares, .. } = app.next_event().await else {
        panic!("expected SharesFetched");
    };

    app.job
        .push_reply("delete_share", Err(AppError::transport(404, "Wrong share ID")));
    app.manager.delete_share(shares[0].clone()).await.unwrap();

    match app.next_event().await {
        ShareEvent::ServerError { share_id, code, .. } => {
            assert_eq!(share_id.as_deref(), Some("9"));
            assert_eq!(code, 404);
        }
        other => panic!("unexpected event: {}", other.name()),
    }
    assert!(!shares[0].base().is_deleted());
    assert_eq!(app.root("docs").sync_requests(), 0);
}

#[tokio::test]
async fn test_updates_do_not_invalidate() {
    let mut app = helpers::TestApp::new();
    app.job.push_reply(
        "get_shares",
        Ok(OcsReply::ok(json!([{ "id": 4, "share_type": 0, "path": "/docs", "permissions": 1 }]))),
    );
    app.manager.fetch_shares("/docs").await.unwrap();
    let ShareEvent::SharesFetched { shares, .. } = app.next_event().await else {
        panic!("expected SharesFetched");
    };

    app.manager
        .set_permissions(shares[0].clone(), SharePermissions::READ | SharePermissions::SHARE)
        .await
        .unwrap();
    assert!(matches!(app.next_event().await, ShareEvent::PermissionsSet { .. }));
    assert_eq!(app.root("docs").sync_requests(), 0);
}
