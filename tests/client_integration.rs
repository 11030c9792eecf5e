//! Client behaviour against an in-memory transport: session gate,
//! response classification, endpoint paths and headers.
//!
//! Run: cargo test --test client_integration

mod common;

use chrono::TimeDelta;
use serde_json::json;

use common::*;
use neosvr_sdk::prelude::*;

// =============================================================================
// Auth
// =============================================================================

mod auth {
    use super::*;

    #[tokio::test]
    async fn test_login_posts_details_and_stores_session() {
        let h = harness();
        h.transport.push_json(200, login_response());

        let credentials = h.client.auth().login(&login_details()).await.unwrap();
        assert_eq!(credentials.user_id, "U-alice");
        assert_eq!(credentials.last_update, Some(t0()));

        let request = h.transport.last();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, h.url("/userSessions"));
        assert!(request.header_value("Authorization").is_none());
        match request.body {
            RequestBody::Json(body) => {
                assert_eq!(body["username"], "alice");
                assert_eq!(body["password"], "hunter2");
                assert_eq!(body["secretMachineId"], "machine");
            }
            other => panic!("unexpected body: {other:?}"),
        }
        assert_eq!(h.client.auth().state().await, AuthState::Authenticated);
    }

    #[tokio::test]
    async fn test_login_rejected_is_invalid_credentials() {
        let h = harness();
        h.transport
            .push(HttpResponse::new(400, "Invalid credentials for user alice"));

        let err = h.client.auth().login(&login_details()).await.unwrap_err();
        assert!(matches!(
            err,
            SdkError::Auth(AuthError::InvalidCredentials(ref body)) if body.contains("alice")
        ));
        assert_eq!(h.client.auth().state().await, AuthState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_authenticated_requests_carry_headers() {
        let h = harness().logged_in().await;
        h.transport.push(HttpResponse::new(200, ""));
        h.transport.push_json(200, json!([]));

        h.client.friends().list().await.unwrap();
        let requests = h.transport.requests();
        let request = requests.last().unwrap();
        assert_eq!(
            request.header_value("Authorization"),
            Some("neos U-alice:tok123")
        );
        assert!(request
            .header_value("User-Agent")
            .unwrap()
            .starts_with("neosvr-sdk/"));
    }

    #[tokio::test]
    async fn test_logout_deletes_session_and_clears_state() {
        let h = harness().logged_in().await;
        h.transport.push(HttpResponse::new(204, ""));

        h.client.auth().logout().await.unwrap();

        let request = h.transport.last();
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.url, h.url("/userSessions/U-alice/tok123"));
        assert_eq!(
            request.header_value("Authorization"),
            Some("neos U-alice:tok123")
        );
        assert_eq!(h.client.auth().state().await, AuthState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_logout_clears_state_even_when_server_fails() {
        let h = harness().logged_in().await;
        h.transport.push(HttpResponse::new(500, "boom"));

        let err = h.client.auth().logout().await.unwrap_err();
        assert!(matches!(err, SdkError::Api(ref e) if e.status == 500));
        assert!(h.client.auth().credentials().await.is_none());
    }

    #[tokio::test]
    async fn test_logout_without_session() {
        let h = harness();
        let err = h.client.auth().logout().await.unwrap_err();
        assert!(matches!(err, SdkError::Auth(AuthError::NotAuthenticated)));
        assert_eq!(h.transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_token_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth.token");

        let h = harness();
        let client = NeosClient::builder()
            .base_url(BASE_URL)
            .transport(h.transport.clone())
            .clock(h.clock.clone())
            .token_path(&path)
            .build()
            .unwrap();

        h.transport.push_json(200, login_response());
        client.auth().login(&login_details()).await.unwrap();
        client.auth().save_token().await.unwrap();

        let restored = NeosClient::builder()
            .base_url(BASE_URL)
            .transport(h.transport.clone())
            .clock(h.clock.clone())
            .token_path(&path)
            .build()
            .unwrap();
        let credentials = restored.auth().load_token().await.unwrap();
        assert_eq!(credentials.user_id, "U-alice");
        assert_eq!(credentials.secret_machine_id, "machine");
        assert!(credentials.last_update.is_none());

        // A restored session is not gated: no keep-alive is sent.
        h.transport.clear();
        h.transport.push_json(200, json!([]));
        restored.friends().list().await.unwrap();
        assert_eq!(h.transport.request_count(), 1);
        assert_eq!(
            h.transport.last().header_value("Authorization"),
            Some("neos U-alice:tok123")
        );
    }

    #[tokio::test]
    async fn test_load_expired_token_is_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth.token");
        std::fs::write(
            &path,
            json!({
                "userId": "U-alice",
                "expire": "2023-12-31T00:00:00Z",
                "token": "old",
                "secretMachineId": "machine"
            })
            .to_string(),
        )
        .unwrap();

        let h = harness();
        let client = NeosClient::builder()
            .transport(h.transport.clone())
            .clock(h.clock.clone())
            .token_path(&path)
            .build()
            .unwrap();
        let err = client.auth().load_token().await.unwrap_err();
        assert!(matches!(err, SdkError::Auth(AuthError::NoToken)));
        assert!(err.requires_login());
    }

    #[tokio::test]
    async fn test_save_token_requires_session() {
        let h = harness();
        let err = h.client.auth().save_token().await.unwrap_err();
        assert!(matches!(err, SdkError::Auth(AuthError::NotAuthenticated)));
    }
}

// =============================================================================
// Session gate
// =============================================================================

mod gate {
    use super::*;

    #[tokio::test]
    async fn test_keep_alive_inside_window() {
        let h = harness().logged_in().await;
        h.clock.advance(TimeDelta::hours(2));
        h.transport.push(HttpResponse::new(200, ""));
        h.transport.push_json(200, json!([]));

        h.client.friends().list().await.unwrap();

        let requests = h.transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, Method::Patch);
        assert_eq!(requests[0].url, h.url("/userSessions"));
        assert_eq!(requests[1].url, h.url("/users/U-alice/friends"));

        let credentials = h.client.auth().credentials().await.unwrap();
        assert_eq!(credentials.last_update, Some(t0() + TimeDelta::hours(2)));
    }

    #[tokio::test]
    async fn test_window_boundary_still_keeps_alive() {
        let h = harness().logged_in().await;
        h.clock.advance(TimeDelta::hours(24));
        h.transport.push(HttpResponse::new(200, ""));
        h.transport.push_json(200, json!([]));

        h.client.friends().list().await.unwrap();
        assert_eq!(h.transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_past_window_fails_without_network() {
        let h = harness().logged_in().await;
        h.clock.advance(TimeDelta::hours(24) + TimeDelta::seconds(1));

        let err = h.client.friends().list().await.unwrap_err();
        assert!(matches!(err, SdkError::Auth(AuthError::InvalidToken { .. })));
        assert!(err.requires_login());
        assert_eq!(h.transport.request_count(), 0);
        assert_eq!(h.client.auth().state().await, AuthState::Expired);
    }

    #[tokio::test]
    async fn test_relogin_after_expiry() {
        let h = harness().logged_in().await;
        h.clock.advance(TimeDelta::days(2));

        h.transport.push_json(200, login_response());
        h.client.auth().login(&login_details()).await.unwrap();
        assert_eq!(h.client.auth().state().await, AuthState::Authenticated);
    }

    #[tokio::test]
    async fn test_failed_keep_alive_aborts_request() {
        let h = harness().logged_in().await;
        h.clock.advance(TimeDelta::hours(1));
        h.transport.push(HttpResponse::new(403, ""));

        let err = h.client.friends().list().await.unwrap_err();
        assert!(matches!(err, SdkError::Auth(AuthError::InvalidToken { .. })));
        assert_eq!(h.transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_custom_renewal_window() {
        let transport = MockTransport::new();
        let clock = ManualClock::new(t0());
        let client = NeosClient::builder()
            .transport(transport.clone())
            .clock(clock.clone())
            .renewal_window(std::time::Duration::from_secs(60))
            .build()
            .unwrap();

        transport.push_json(200, login_response());
        client.auth().login(&login_details()).await.unwrap();
        clock.advance(TimeDelta::seconds(61));

        let err = client.users().get(None).await.unwrap_err();
        assert!(matches!(err, SdkError::Auth(AuthError::InvalidToken { .. })));
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_extend_session() {
        let h = harness().logged_in().await;
        h.clock.advance(TimeDelta::minutes(5));
        h.transport.push(HttpResponse::new(200, ""));

        h.client.auth().extend_session().await.unwrap();
        assert_eq!(h.transport.last().method, Method::Patch);
        assert_eq!(
            h.client.auth().credentials().await.unwrap().last_update,
            Some(t0() + TimeDelta::minutes(5))
        );
    }
}

// =============================================================================
// Response classification
// =============================================================================

mod classification {
    use super::*;

    #[tokio::test]
    async fn test_ok_with_message_is_api_error() {
        let h = harness();
        h.transport.push_json(200, json!({"message": "bad thing"}));

        let err = h.client.sessions().get("S-1").await.unwrap_err();
        match err {
            SdkError::Api(e) => {
                assert_eq!(e.status, 200);
                assert_eq!(e.message.as_deref(), Some("bad thing"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_forbidden_is_invalid_token_with_headers() {
        let h = harness();
        let mut response = HttpResponse::new(403, "");
        response
            .headers
            .push(("WWW-Authenticate".to_string(), "neos".to_string()));
        h.transport.push(response);

        let err = h.client.users().get(Some("U-bob")).await.unwrap_err();
        match err {
            SdkError::Auth(AuthError::InvalidToken { headers, .. }) => {
                assert_eq!(headers[0].0, "WWW-Authenticate");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_api_error() {
        let h = harness();
        h.transport.push(HttpResponse::new(404, "not here"));

        let err = h.client.sessions().get("S-1").await.unwrap_err();
        assert!(matches!(err, SdkError::Api(ref e) if e.status == 404 && e.body == "not here"));
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces() {
        let h = harness();
        let err = h.client.sessions().get("S-1").await.unwrap_err();
        assert!(matches!(err, SdkError::Http(HttpError::Transport(_))));
    }
}

// =============================================================================
// Endpoints
// =============================================================================

mod endpoints {
    use super::*;

    #[tokio::test]
    async fn test_user_defaults_to_logged_in_user() {
        let h = harness().logged_in().await;
        h.transport.push(HttpResponse::new(200, ""));
        h.transport.push_json(
            200,
            json!({
                "id": "U-alice",
                "username": "alice",
                "normalizedUsername": "alice",
                "registrationDate": "2020-01-01T00:00:00Z",
                "isVerified": true,
                "isLocked": false
            }),
        );
        let user = h.client.users().get(None).await.unwrap();
        assert_eq!(user.id, "U-alice");
        assert_eq!(h.transport.last().url, h.url("/users/U-alice"));
    }

    #[tokio::test]
    async fn test_user_requires_login_when_no_id_given() {
        let h = harness();
        let err = h.client.users().get(None).await.unwrap_err();
        assert!(matches!(err, SdkError::Auth(AuthError::NotAuthenticated)));
        assert_eq!(h.transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_status_and_search_paths() {
        let h = harness();
        h.transport.push_json(
            200,
            json!({
                "onlineStatus": "Online",
                "lastStatusChange": "2024-01-01T00:00:00Z",
                "currentSessionAccessLevel": 5,
                "currentSessionHidden": false,
                "currentHosting": false,
                "isMobile": true
            }),
        );
        let status = h.client.users().status(Some("U-bob")).await.unwrap();
        assert_eq!(status.current_session_access_level, CurrentSessionAccessLevel::Anyone);
        assert_eq!(h.transport.last().url, h.url("/users/U-bob/status/"));

        h.transport.push_json(200, json!([]));
        let users = h.client.users().search("bo").await.unwrap();
        assert!(users.is_empty());
        let request = h.transport.last();
        assert_eq!(request.url, h.url("/users"));
        assert_eq!(request.query, vec![("name".to_string(), "bo".to_string())]);
    }

    #[tokio::test]
    async fn test_inventory_lists_records_polymorphically() {
        let h = harness().logged_in().await;
        h.transport.push(HttpResponse::new(200, ""));
        h.transport.push_json(
            200,
            json!([
                record_json("R-1", "Stuff", "directory", "U-alice"),
                record_json("R-2", "Chair", "object", "U-alice"),
            ]),
        );

        let records = h.client.records().inventory().await.unwrap();
        assert_eq!(records[0].record_type(), RecordType::Directory);
        assert_eq!(records[1].record_type(), RecordType::Object);

        let request = h.transport.last();
        assert_eq!(request.url, h.url("/users/U-alice/records"));
        assert_eq!(
            request.query,
            vec![("path".to_string(), "Inventory".to_string())]
        );
    }

    #[tokio::test]
    async fn test_unknown_record_type_in_listing() {
        let h = harness().logged_in().await;
        h.transport.push(HttpResponse::new(200, ""));
        h.transport
            .push_json(200, json!([record_json("R-1", "X", "hologram", "U-alice")]));

        let err = h.client.records().inventory().await.unwrap_err();
        assert!(matches!(err, SdkError::UnknownRecordType(ref k) if k == "hologram"));
    }

    #[tokio::test]
    async fn test_directory_uses_content_path() {
        let h = harness();
        let directory = Record::try_from(record_json("R-1", "Foo", "directory", "G-team"))
            .unwrap()
            .into_directory()
            .unwrap();
        h.transport.push_json(200, json!([]));

        h.client.records().directory(&directory).await.unwrap();
        let request = h.transport.last();
        assert_eq!(request.url, h.url("/groups/G-team/records"));
        assert_eq!(
            request.query,
            vec![("path".to_string(), "Inventory\\Foo".to_string())]
        );
    }

    #[tokio::test]
    async fn test_resolve_link_fetches_target() {
        let h = harness();
        let mut link = record_json("R-link", "Shared", "link", "U-alice");
        link["assetUri"] = json!("neosrec:///U-abc/R-def");
        let record = Record::try_from(link).unwrap();
        h.transport
            .push_json(200, record_json("R-def", "Target", "directory", "U-abc"));

        let directory = h
            .client
            .records()
            .resolve_link(record.as_link().unwrap())
            .await
            .unwrap();
        assert_eq!(directory.base.id, "R-def");
        assert_eq!(h.transport.last().url, h.url("/users/U-abc/records/R-def"));
    }

    #[tokio::test]
    async fn test_resolve_link_to_non_directory() {
        let h = harness();
        let mut link = record_json("R-link", "Shared", "link", "U-alice");
        link["assetUri"] = json!("neosrec:///U-abc/R-def");
        let record = Record::try_from(link).unwrap();
        h.transport
            .push_json(200, record_json("R-def", "Chair", "object", "U-abc"));

        let err = h
            .client
            .records()
            .resolve_link(record.as_link().unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }

    #[tokio::test]
    async fn test_messages_from_time_is_unsupported() {
        let h = harness().logged_in().await;
        let query = MessageQuery::new().from_time(t0());

        let err = h.client.messages().list(&query).await.unwrap_err();
        assert!(matches!(err, SdkError::UnsupportedOperation(_)));
        assert_eq!(h.transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_messages_query_params() {
        let h = harness().logged_in().await;
        h.transport.push(HttpResponse::new(200, ""));
        h.transport.push_json(200, json!([]));

        let query = MessageQuery::new().user("U-bob");
        h.client.messages().list(&query).await.unwrap();

        let request = h.transport.last();
        assert_eq!(request.url, h.url("/users/U-alice/messages"));
        assert_eq!(
            request.query,
            vec![
                ("maxItems".to_string(), "100".to_string()),
                ("unreadOnly".to_string(), "false".to_string()),
                ("user".to_string(), "U-bob".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_send_text_message() {
        let h = harness().logged_in().await;
        h.transport.push(HttpResponse::new(200, ""));
        h.transport.push(HttpResponse::new(204, ""));

        let message = h.client.messages().send_text("U-bob", "hi").await.unwrap();
        assert!(message.id.starts_with("MSG-"));
        assert_eq!(message.sender_id, "U-alice");

        let request = h.transport.last();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, h.url("/users/U-bob/messages"));
        match request.body {
            RequestBody::Json(body) => {
                assert_eq!(body["messageType"], "Text");
                assert_eq!(body["ownerId"], "U-alice");
                assert_eq!(body["content"], "hi");
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_cloud_var_prefixes() {
        let h = harness();
        h.transport.push_json(200, json!([]));
        h.client.cloud_vars().list("U-alice").await.unwrap();
        assert_eq!(h.transport.last().url, h.url("/users/U-alice/vars"));

        h.transport.push(HttpResponse::new(200, ""));
        h.client
            .cloud_vars()
            .set("G-team", "G-team.score", "7")
            .await
            .unwrap();
        let request = h.transport.last();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.url, h.url("/groups/G-team/vars/G-team.score"));
        assert_eq!(
            request.body,
            RequestBody::Json(json!({"ownerId": "G-team", "path": "G-team.score", "value": "7"}))
        );

        h.transport.push_json(
            200,
            json!({
                "definitionOwnerId": "G-team",
                "subpath": "score",
                "typeHint": "int"
            }),
        );
        let def = h
            .client
            .cloud_vars()
            .definition("G-team", "G-team.score")
            .await
            .unwrap();
        assert_eq!(def.type_hint, "int");
        assert_eq!(h.transport.last().url, h.url("/groups/G-team/vardefs/G-team.score"));
    }

    #[tokio::test]
    async fn test_cloud_var_rejects_machine_owner() {
        let h = harness();
        let err = h.client.cloud_vars().get("M-box", "x").await.unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
        assert_eq!(h.transport.request_count(), 0);
    }
}
