//! HTTP-level tests for [`CinemaApi`] against the in-process stub backend.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use cineweb_client::{ApiError, CinemaApi, Gateway};
use cineweb_core::models::{NewMovie, NewRoom, NewSession, NewTicket, TicketKind};
use common::{spawn_backend, unused_addr};
use serde_json::json;

fn dune() -> NewMovie {
    NewMovie {
        title: "Dune".into(),
        synopsis: "Sci-fi epic".into(),
        duration: 155.0,
        rating: None,
        genre: None,
        exhibition_start: None,
        exhibition_end: None,
    }
}

// ---------------------------------------------------------------------------
// Test: create then list round-trips with a server-assigned id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn room_round_trip_assigns_id() {
    let backend = spawn_backend().await;
    let api = CinemaApi::new(&backend.base_url);

    let created = api
        .create_room(&NewRoom {
            number: 5.0,
            capacity: 100.0,
        })
        .await
        .unwrap();
    assert!(!created.id.is_empty());

    let rooms = api.list_rooms().await.unwrap();
    assert!(rooms
        .iter()
        .any(|r| r.number == 5.0 && r.capacity == 100.0 && r.id == created.id));
}

#[tokio::test]
async fn movie_payload_omits_absent_optionals() {
    let backend = spawn_backend().await;
    let api = CinemaApi::new(&backend.base_url);

    let created = api.create_movie(&dune()).await.unwrap();
    assert_eq!(created.title, "Dune");

    let stored = backend.records("filmes").await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["titulo"], "Dune");
    assert_eq!(stored[0]["duracao"], 155.0);
    assert!(stored[0].get("genero").is_none());
    assert!(stored[0].get("classificacao").is_none());
}

#[tokio::test]
async fn fractional_duration_lists_without_error() {
    let backend = spawn_backend().await;
    let api = CinemaApi::new(&backend.base_url);

    api.create_movie(&NewMovie {
        duration: 90.5,
        ..dune()
    })
    .await
    .unwrap();

    let movies = api.list_movies().await.unwrap();
    assert_eq!(movies[0].duration, 90.5);
    assert_eq!(backend.records("filmes").await[0]["duracao"], 90.5);
}

#[tokio::test]
async fn session_and_ticket_use_backend_keys() {
    let backend = spawn_backend().await;
    let api = CinemaApi::new(format!("{}/", backend.base_url));

    let session = api
        .create_session(&NewSession {
            movie_id: "f1".into(),
            room_id: "r1".into(),
            date_time: "2999-01-01T20:00".into(),
        })
        .await
        .unwrap();
    let session_id = session.id.clone().unwrap();

    let ticket = api
        .create_ticket(&NewTicket {
            session_id: session_id.clone(),
            kind: TicketKind::Half,
            price: 20.0,
        })
        .await
        .unwrap();
    assert_eq!(ticket.kind, TicketKind::Half);

    let stored = backend.records("ingressos").await;
    assert_eq!(stored[0]["sessaoId"], session_id.as_str());
    assert_eq!(stored[0]["tipo"], "MEIA");
    assert_eq!(stored[0]["valor"], 20.0);

    let sessions = api.list_sessions().await.unwrap();
    assert_eq!(sessions[0].movie_id, "f1");
    assert_eq!(sessions[0].date_time, "2999-01-01T20:00");

    let tickets = api.list_tickets().await.unwrap();
    assert_eq!(tickets.len(), 1);
}

// ---------------------------------------------------------------------------
// Test: delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_removes_movie() {
    let backend = spawn_backend().await;
    let api = CinemaApi::new(&backend.base_url);

    let created = api.create_movie(&dune()).await.unwrap();
    api.delete_movie(&created.id).await.unwrap();

    assert!(api.list_movies().await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_missing_movie_is_a_server_error() {
    let backend = spawn_backend().await;
    let api = CinemaApi::new(&backend.base_url);
    api.create_movie(&dune()).await.unwrap();
    let before = api.list_movies().await.unwrap();

    let err = api.delete_movie("does-not-exist").await.unwrap_err();
    assert_matches!(err, ApiError::Status { status: 404, .. });
    assert_eq!(err.status(), Some(404));

    assert_eq!(api.list_movies().await.unwrap(), before);
}

// ---------------------------------------------------------------------------
// Test: failure classification
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_success_status_carries_code() {
    let backend = spawn_backend().await;
    backend.fail_with(StatusCode::INTERNAL_SERVER_ERROR).await;
    let api = CinemaApi::new(&backend.base_url);

    let err = api.list_rooms().await.unwrap_err();
    assert_eq!(err.status(), Some(500));

    let err = api
        .create_room(&NewRoom {
            number: 1.0,
            capacity: 10.0,
        })
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn success_with_wrong_body_shape_is_decode_error() {
    let backend = spawn_backend().await;
    backend.respond_with(json!({ "oops": 1 })).await;
    let api = CinemaApi::new(&backend.base_url);

    let err = api.list_movies().await.unwrap_err();
    assert_matches!(err, ApiError::Decode(_));
    assert_eq!(err.status(), None);

    let err = api.create_movie(&dune()).await.unwrap_err();
    assert_matches!(err, ApiError::Decode(_));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn connection_refused_is_transport_error_without_status() {
    let addr = unused_addr().await;
    let api = CinemaApi::new(format!("http://{addr}"));

    let err = api.list_movies().await.unwrap_err();
    assert_matches!(err, ApiError::Transport(_));
    assert_eq!(err.status(), None);
}
