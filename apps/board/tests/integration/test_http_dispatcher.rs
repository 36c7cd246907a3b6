use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::post};
use board::{
    domain::post::{
        dispatcher::{ActionDispatcher, DispatchError, DispatchRequest},
        entity::{PostId, UserId},
        gate::ActionIntent,
    },
    infrastructure::dispatch::http_dispatcher::HttpDispatcher,
};
use serde_json::json;
use std::time::Duration;

/// Minimal store: accepts likes, refuses unlikes, fails deletes.
async fn stub_store(Json(request): Json<DispatchRequest>) -> impl IntoResponse {
    match request.intent {
        ActionIntent::Like { .. } | ActionIntent::Edit { .. } => {
            (StatusCode::ACCEPTED, Json(json!({ "accepted": true })))
        }
        ActionIntent::Unlike { .. } => (
            StatusCode::CONFLICT,
            Json(json!({ "error": "no vote left to retract" })),
        ),
        ActionIntent::Delete { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "boom" })),
        ),
    }
}

async fn spawn_store() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub store");
    let addr = listener.local_addr().expect("missing local addr");
    let app = Router::new().route("/intents", post(stub_store));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub store crashed");
    });
    format!("http://{}", addr)
}

fn request(intent: ActionIntent) -> DispatchRequest {
    DispatchRequest::new(UserId::from("bob"), intent)
}

#[tokio::test]
async fn accepted_intent_yields_receipt() {
    let base = spawn_store().await;
    let dispatcher = HttpDispatcher::new(&base, Duration::from_secs(2)).unwrap();

    let req = request(ActionIntent::Like {
        post_id: PostId::new("p1"),
    });
    let dispatch_id = req.dispatch_id;
    let receipt = dispatcher.dispatch(req).await.expect("store should accept");

    assert_eq!(receipt.dispatch_id, dispatch_id);
    assert_eq!(receipt.intent.post_id().as_str(), "p1");
}

#[tokio::test]
async fn conflict_becomes_rejection_with_store_reason() {
    let base = spawn_store().await;
    let dispatcher = HttpDispatcher::new(&base, Duration::from_secs(2)).unwrap();

    let err = dispatcher
        .dispatch(request(ActionIntent::Unlike {
            post_id: PostId::new("p1"),
        }))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        DispatchError::Rejected {
            reason: "no vote left to retract".to_string()
        }
    );
}

#[tokio::test]
async fn server_error_is_unavailable() {
    let base = spawn_store().await;
    let dispatcher = HttpDispatcher::new(&base, Duration::from_secs(2)).unwrap();

    let err = dispatcher
        .dispatch(request(ActionIntent::Delete {
            post_id: PostId::new("p1"),
        }))
        .await
        .unwrap_err();
    assert!(matches!(err, DispatchError::Unavailable(_)));
}

#[tokio::test]
async fn unreachable_store_is_unavailable() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let dispatcher =
        HttpDispatcher::new(&format!("http://{}", addr), Duration::from_secs(1)).unwrap();
    let err = dispatcher
        .dispatch(request(ActionIntent::Like {
            post_id: PostId::new("p1"),
        }))
        .await
        .unwrap_err();
    assert!(matches!(err, DispatchError::Unavailable(_)));
}
