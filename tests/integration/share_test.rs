//! Integration tests for user/group share creation and listing.

mod helpers;

use pretty_assertions::assert_eq;
use serde_json::json;

use ocshare::{AppError, OcsReply, ShareEvent, ShareOperation, SharePermissions, ShareType};
use ocshare_service::mock::JobCall;

fn user_share(id: i64, path: &str, permissions: i64) -> serde_json::Value {
    json!({
        "id": id,
        "share_type": 0,
        "path": path,
        "permissions": permissions,
        "share_with": "bob",
        "share_with_displayname": "Bob Builder",
    })
}

#[tokio::test]
async fn test_create_share_inherits_received_permissions() {
    let mut app = helpers::TestApp::new();
    app.job.push_reply(
        "get_shared_with_me",
        Ok(OcsReply::ok(json!([
            { "file_target": "/docs/plans", "permissions": 31 },
            { "file_target": "/docs/plans", "permissions": 3 },
        ]))),
    );
    app.job.push_reply(
        "create_share",
        Ok(OcsReply::ok(user_share(21, "/docs/plans", 3))),
    );

    app.manager
        .create_share(
            "/docs/plans",
            ShareType::User,
            "bob",
            SharePermissions::DEFAULT,
        )
        .await
        .unwrap();

    let ShareEvent::ShareCreated(share) = app.next_event().await else {
        panic!("expected ShareCreated");
    };
    assert_eq!(share.id(), "21");
    assert_eq!(share.permissions(), SharePermissions::READ | SharePermissions::UPDATE);
    let sharee = share.share_with().expect("sharee");
    assert_eq!(sharee.share_with(), "bob");
    assert_eq!(sharee.display_name(), "Bob Builder");

    assert_eq!(
        app.calls(),
        vec![
            JobCall::GetSharedWithMe,
            JobCall::CreateShare {
                path: "/docs/plans".to_string(),
                share_type: ShareType::User,
                share_with: "bob".to_string(),
                permissions: SharePermissions::READ | SharePermissions::UPDATE,
            },
        ]
    );
    assert!(app.root("docs").is_invalidated("plans"));
}

#[tokio::test]
async fn test_create_share_unconstrained_keeps_desired() {
    let mut app = helpers::TestApp::new();
    app.job
        .push_reply("get_shared_with_me", Ok(OcsReply::ok(json!([]))));
    app.job.push_reply(
        "create_share",
        Ok(OcsReply::ok(user_share(22, "/docs/own", 13))),
    );

    let desired = SharePermissions::READ | SharePermissions::CREATE | SharePermissions::DELETE;
    app.manager
        .create_share("/docs/own", ShareType::Group, "staff", desired)
        .await
        .unwrap();

    assert!(matches!(app.next_event().await, ShareEvent::ShareCreated(_)));
    match &app.calls()[1] {
        JobCall::CreateShare { permissions, .. } => assert_eq!(*permissions, desired),
        other => panic!("unexpected call: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_share_server_error() {
    let mut app = helpers::TestApp::new();
    app.job
        .push_reply("get_shared_with_me", Ok(OcsReply::ok(json!([]))));
    app.job.push_reply(
        "create_share",
        Err(AppError::transport(404, "Please specify a valid user")),
    );

    app.manager
        .create_share("/docs", ShareType::User, "nobody", SharePermissions::READ)
        .await
        .unwrap();

    match app.next_event().await {
        ShareEvent::ServerError {
            operation,
            code,
            message,
            ..
        } => {
            assert_eq!(operation, ShareOperation::CreateShare);
            assert_eq!(code, 404);
            assert_eq!(message, "Please specify a valid user");
        }
        other => panic!("unexpected event: {}", other.name()),
    }
    assert_eq!(app.root("docs").sync_requests(), 0);
}

#[tokio::test]
async fn test_fetch_shares_mixed_listing() {
    let mut app = helpers::TestApp::new();
    app.job.push_reply(
        "get_shares",
        Ok(OcsReply::ok(json!([
            {
                "id": "5",
                "share_type": 3,
                "path": "/docs",
                "permissions": 1,
                "token": "tok5",
                "share_with": "***redacted***",
            },
            user_share(6, "/docs", 19),
        ]))),
    );

    app.manager.fetch_shares("/docs").await.unwrap();

    let ShareEvent::SharesFetched { path, shares } = app.next_event().await else {
        panic!("expected SharesFetched");
    };
    assert_eq!(path, "/docs");
    assert_eq!(shares.len(), 2);

    let link = shares[0].as_link().expect("first share is a link");
    assert_eq!(link.id(), "5");
    assert!(link.is_password_set());
    assert_eq!(
        link.link(),
        "https://cloud.example.com/owncloud/index.php/s/tok5"
    );

    let user = shares[1].as_share().expect("second share is a user share");
    assert_eq!(user.id(), "6");
    assert_eq!(user.share_type(), ShareType::User);

    assert_eq!(app.calls(), vec![JobCall::GetShares { path: "/docs".to_string() }]);
    assert_eq!(app.root("docs").sync_requests(), 0);
}

#[tokio::test]
async fn test_fetch_shares_empty() {
    let mut app = helpers::TestApp::new();
    app.job.push_reply("get_shares", Ok(OcsReply::ok(json!([]))));

    app.manager.fetch_shares("/photos").await.unwrap();

    let ShareEvent::SharesFetched { shares, .. } = app.next_event().await else {
        panic!("expected SharesFetched");
    };
    assert!(shares.is_empty());
}

#[tokio::test]
async fn test_set_permissions_on_user_share() {
    let mut app = helpers::TestApp::new();
    app.job.push_reply(
        "get_shares",
        Ok(OcsReply::ok(json!([user_share(6, "/docs", 1)]))),
    );
    app.manager.fetch_shares("/docs").await.unwrap();
    let ShareEvent::SharesFetched { shares, .. } = app.next_event().await else {
        panic!("expected SharesFetched");
    };

    let share = shares[0].clone();
    let wanted = SharePermissions::READ | SharePermissions::UPDATE;
    app.manager.set_permissions(share.clone(), wanted).await.unwrap();

    let ShareEvent::PermissionsSet { share: updated } = app.next_event().await else {
        panic!("expected PermissionsSet");
    };
    assert_eq!(updated.id(), "6");
    assert_eq!(share.permissions(), wanted);
}
