//! Exact wire requests emitted by `ReqwestTransport` + `TodoClient`,
//! checked against an httpmock server.

use httpmock::prelude::*;
use serde_json::json;
use todo_core::{
    ClientConfig, HttpMethod, HttpRequest, ReqwestTransport, TodoClient, TodoUpdate, Transport,
};

fn client_for(server: &MockServer) -> TodoClient<ReqwestTransport> {
    TodoClient::new(ReqwestTransport::new(&server.base_url()))
}

#[tokio::test]
async fn list_sends_owner_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/todos").query_param("userId", "2048");
            then.status(200)
                .json_body(json!([{"id": 1, "title": "a", "completed": false, "userId": 2048}]));
        })
        .await;

    let todos = client_for(&server).list_todos().await.unwrap();

    mock.assert_async().await;
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].title, "a");
}

#[tokio::test]
async fn create_posts_json_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/todos")
                .header("content-type", "application/json")
                .json_body(json!({"userId": 2048, "title": "buy milk", "completed": false}));
            then.status(201)
                .json_body(json!({"id": 99, "userId": 2048, "title": "buy milk", "completed": false}));
        })
        .await;

    let created = client_for(&server).create_todo("buy milk").await.unwrap();

    mock.assert_async().await;
    assert_eq!(created.id, 99);
}

#[tokio::test]
async fn update_patches_by_id() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method("PATCH")
                .path("/todos/12")
                .json_body(json!({"title": "Renamed", "completed": true}));
            then.status(200)
                .json_body(json!({"id": 12, "userId": 2048, "title": "Renamed", "completed": true}));
        })
        .await;
    let update = TodoUpdate {
        id: 12,
        title: "Renamed".to_string(),
        completed: true,
    };

    let updated = client_for(&server).update_todo(&update).await.unwrap();

    mock.assert_async().await;
    assert!(updated.completed);
}

#[tokio::test]
async fn delete_hits_id_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/todos/7");
            then.status(200).json_body(json!({}));
        })
        .await;

    let deleted = client_for(&server).delete_todo(7).await.unwrap();

    mock.assert_async().await;
    assert!(deleted.is_empty());
}

#[tokio::test]
async fn error_status_becomes_status_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method("PATCH").path("/todos/404");
            then.status(404).body("missing");
        })
        .await;
    let update = TodoUpdate {
        id: 404,
        title: "ghost".to_string(),
        completed: false,
    };

    let err = client_for(&server).update_todo(&update).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(
        err,
        todo_core::TransportError::Status {
            status: 404,
            body: "missing".to_string()
        }
    );
}

#[tokio::test]
async fn config_base_url_and_owner_are_honored() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/todos").query_param("userId", "5");
            then.status(200).json_body(json!([]));
        })
        .await;
    let config = ClientConfig {
        user_id: 5,
        ..ClientConfig::default()
    }
    .with_base_url(&format!("{}/", server.base_url()))
    .unwrap();
    let transport = ReqwestTransport::from_config(&config).unwrap();

    let todos = TodoClient::with_user_id(transport, config.user_id)
        .list_todos()
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(todos.is_empty());
}

#[tokio::test]
async fn transport_returns_status_and_body_only() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/todos");
            then.status(201)
                .header("x-request-id", "abc")
                .body("[]");
        })
        .await;
    let client = client_for(&server);
    assert_eq!(client.transport().base_url(), server.base_url());

    let response = client
        .transport()
        .send(HttpRequest {
            method: HttpMethod::Get,
            path: "/todos".to_string(),
            headers: Vec::new(),
            body: None,
        })
        .await
        .unwrap();

    assert_eq!(response.status, 201);
    assert_eq!(response.body, "[]");
    assert!(response.headers.is_empty());
}
