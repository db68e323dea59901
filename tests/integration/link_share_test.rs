//! Integration tests for public link shares.

mod helpers;

use std::sync::Arc;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;

use ocshare::{AppError, LinkShare, OcsReply, ShareEvent, ShareOperation, SharePermissions};
use ocshare_service::mock::JobCall;

const LEGACY_CONFIG: &str = r#"
[account]
id = "carol@legacy.example.com"
user = "carol"
url = "https://legacy.example.com/"
server_version = "7.0.4"
"#;

fn link_payload() -> serde_json::Value {
    json!({
        "id": 7,
        "share_type": 3,
        "path": "/docs/report.pdf",
        "permissions": 1,
        "name": "Doc Share",
        "token": "abc123",
        "expiration": "2031-05-17 00:00:00",
    })
}

async fn created_link(app: &mut helpers::TestApp) -> Arc<LinkShare> {
    app.job
        .push_reply("create_link_share", Ok(OcsReply::ok(link_payload())));
    app.manager
        .create_link_share("/docs/report.pdf", "Doc Share", "")
        .await
        .unwrap();
    let ShareEvent::LinkShareCreated(share) = app.next_event().await else {
        panic!("expected LinkShareCreated");
    };
    share
}

#[tokio::test]
async fn test_create_link_share() {
    let mut app = helpers::TestApp::new();
    let share = created_link(&mut app).await;

    assert_eq!(share.id(), "7");
    assert_eq!(share.path(), "/docs/report.pdf");
    assert_eq!(share.name(), "Doc Share");
    assert_eq!(share.token(), "abc123");
    assert!(!share.is_password_set());
    assert_eq!(share.expire_date(), NaiveDate::from_ymd_opt(2031, 5, 17));
    assert_eq!(
        share.direct_download_link(),
        "https://cloud.example.com/owncloud/index.php/s/abc123/download"
    );
    assert!(share.show_file_listing());
    assert!(!share.public_upload());

    assert_eq!(
        app.calls(),
        vec![JobCall::CreateLinkShare {
            path: "/docs/report.pdf".to_string(),
            name: "Doc Share".to_string(),
            password: String::new(),
        }]
    );
    let docs = app.root("docs");
    assert_eq!(docs.sync_requests(), 1);
    assert!(docs.is_invalidated("report.pdf"));
}

#[tokio::test]
async fn test_password_required() {
    let mut app = helpers::TestApp::new();
    app.job.push_reply(
        "create_link_share",
        Ok(OcsReply::with_status(403, "Password required", json!([]))),
    );

    app.manager
        .create_link_share("/docs", "Doc Share", "")
        .await
        .unwrap();

    match app.next_event().await {
        ShareEvent::LinkShareRequiresPassword { path, message } => {
            assert_eq!(path, "/docs");
            assert_eq!(message, "Password required");
        }
        other => panic!("unexpected event: {}", other.name()),
    }
    app.assert_no_event();
    assert_eq!(app.root("docs").sync_requests(), 0);
}

#[tokio::test]
async fn test_legacy_server_link() {
    let mut app = helpers::TestApp::with_config(LEGACY_CONFIG);
    app.job.push_reply(
        "create_link_share",
        Ok(OcsReply::ok(json!({
            "id": "3",
            "share_type": 3,
            "path": "/a.txt",
            "permissions": 1,
            "token": "legacy",
        }))),
    );

    app.manager.create_link_share("/a.txt", "", "").await.unwrap();

    let ShareEvent::LinkShareCreated(share) = app.next_event().await else {
        panic!("expected LinkShareCreated");
    };
    assert_eq!(
        share.link(),
        "https://legacy.example.com/public.php?service=files&t=legacy"
    );
}

#[tokio::test]
async fn test_malformed_reply_is_parse_error() {
    let mut app = helpers::TestApp::new();
    app.job.push_reply(
        "create_link_share",
        Ok(OcsReply::ok(json!({ "share_type": 3, "token": "t" }))),
    );

    app.manager.create_link_share("/docs", "", "").await.unwrap();

    assert!(matches!(
        app.next_event().await,
        ShareEvent::ParseError {
            operation: ShareOperation::CreateLinkShare,
            ..
        }
    ));
    assert_eq!(app.root("docs").sync_requests(), 0);
}

#[tokio::test]
async fn test_update_link_share_fields() {
    let mut app = helpers::TestApp::new();
    let share = created_link(&mut app).await;

    app.manager.set_name(&share, "Quarterly").await.unwrap();
    let ShareEvent::NameSet { share: renamed } = app.next_event().await else {
        panic!("expected NameSet");
    };
    assert_eq!(renamed.name(), "Quarterly");

    app.manager.set_password(&share, "hunter2").await.unwrap();
    assert!(matches!(app.next_event().await, ShareEvent::PasswordSet { .. }));
    assert!(share.is_password_set());

    app.manager.set_expire_date(&share, None).await.unwrap();
    assert!(matches!(app.next_event().await, ShareEvent::ExpireDateSet { .. }));
    assert_eq!(share.expire_date(), None);

    let upload = SharePermissions::READ | SharePermissions::CREATE;
    app.manager.set_permissions(share.clone(), upload).await.unwrap();
    assert!(matches!(app.next_event().await, ShareEvent::PermissionsSet { .. }));
    assert!(share.public_upload());

    let calls = app.calls();
    assert_eq!(
        calls[1..],
        [
            JobCall::SetName {
                id: "7".to_string(),
                name: "Quarterly".to_string(),
            },
            JobCall::SetPassword {
                id: "7".to_string(),
                password: "hunter2".to_string(),
            },
            JobCall::SetExpireDate {
                id: "7".to_string(),
                date: None,
            },
            JobCall::SetPermissions {
                id: "7".to_string(),
                permissions: upload,
            },
        ]
    );
}

#[tokio::test]
async fn test_password_error_channel() {
    let mut app = helpers::TestApp::new();
    let share = created_link(&mut app).await;
    app.job.push_reply(
        "set_password",
        Err(AppError::transport(400, "Password does not meet the policy")),
    );

    app.manager.set_password(&share, "x").await.unwrap();

    match app.next_event().await {
        ShareEvent::PasswordSetError {
            share: failed,
            code,
            message,
        } => {
            assert_eq!(failed.id(), "7");
            assert_eq!(code, 400);
            assert_eq!(message, "Password does not meet the policy");
        }
        other => panic!("unexpected event: {}", other.name()),
    }
    assert!(!share.is_password_set());
}

#[tokio::test]
async fn test_concurrent_updates_each_emit() {
    let mut app = helpers::TestApp::new();
    let share = created_link(&mut app).await;

    let handles = vec![
        app.manager.set_name(&share, "One"),
        app.manager.set_expire_date(&share, NaiveDate::from_ymd_opt(2032, 1, 1)),
        app.manager.set_password(&share, "pw"),
    ];
    for handle in handles {
        handle.await.unwrap();
    }

    let mut names = Vec::new();
    for _ in 0..3 {
        names.push(app.next_event().await.name());
    }
    names.sort_unstable();
    assert_eq!(names, vec!["expire_date_set", "name_set", "password_set"]);
    assert_eq!(share.name(), "One");
    assert_eq!(share.expire_date(), NaiveDate::from_ymd_opt(2032, 1, 1));
}
