use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::{error::AppError, gate::SubmitOutcome, state::AppState, view};

#[derive(Deserialize)]
pub struct UnlockPayload {
    passphrase: String,
}

pub async fn unlock_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UnlockPayload>,
) -> Result<Response, AppError> {
    match state.gate.submit(&payload.passphrase).await {
        SubmitOutcome::Ignored => Err(AppError::EmptyPassphrase),
        SubmitOutcome::Unlocked => Ok(StatusCode::NO_CONTENT.into_response()),
        SubmitOutcome::Denied(notice) => {
            Ok((StatusCode::UNAUTHORIZED, Json(notice)).into_response())
        }
    }
}

pub async fn gallery_handler(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    if !state.gate.is_unlocked() {
        return Err(AppError::Locked);
    }

    Ok(Json(view::render(&state.roster)).into_response())
}

pub async fn status_handler(State(state): State<Arc<AppState>>) -> Response {
    Json(state.gate.status()).into_response()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use roster::{Entry, Roster};

    use super::*;
    use crate::{config::Config, gate::Gate};

    fn test_state(passphrase: &str) -> Arc<AppState> {
        let config = Config {
            port: 0,
            roster_path: String::new(),
            review_delay_ms: 0,
            passphrase: passphrase.to_string(),
        };

        let roster = Roster::new(vec![Entry {
            id: 1,
            first_name: "Maja".to_string(),
            last_name: "Lind".to_string(),
            bio: "Keeps the group chat alive.".to_string(),
            image_url: None,
        }])
        .unwrap();

        let gate = Gate::new(passphrase.to_string(), Duration::ZERO);

        Arc::new(AppState {
            config,
            roster,
            gate,
        })
    }

    async fn unlock(state: Arc<AppState>, passphrase: &str) -> Response {
        unlock_handler(
            State(state),
            Json(UnlockPayload {
                passphrase: passphrase.to_string(),
            }),
        )
        .await
        .into_response()
    }

    #[tokio::test]
    async fn wrong_then_right_passphrase_swaps_the_views() {
        let state = test_state("opensesame");

        let denied = unlock(state.clone(), "wrong").await;
        assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);

        let still_locked = gallery_handler(State(state.clone())).await.into_response();
        assert_eq!(still_locked.status(), StatusCode::FORBIDDEN);

        let unlocked = unlock(state.clone(), "opensesame").await;
        assert_eq!(unlocked.status(), StatusCode::NO_CONTENT);

        let gallery = gallery_handler(State(state.clone())).await.into_response();
        assert_eq!(gallery.status(), StatusCode::OK);

        let body = axum::body::to_bytes(gallery.into_body(), usize::MAX)
            .await
            .unwrap();
        let cards: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(cards.as_array().unwrap().len(), 1);
        assert_eq!(cards[0]["firstName"], "Maja");
        assert_eq!(cards[0]["bio"], "Keeps the group chat alive.");
        assert_eq!(cards[0]["imageUrl"], roster::FALLBACK_IMAGE_URL);
    }

    #[tokio::test]
    async fn denial_carries_the_notice() {
        let state = test_state("opensesame");

        let denied = unlock(state, "wrong").await;
        assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);

        let body = axum::body::to_bytes(denied.into_body(), usize::MAX)
            .await
            .unwrap();
        let notice: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(notice["title"], "Access denied");
    }

    #[tokio::test]
    async fn empty_submission_is_rejected_without_a_notice() {
        let state = test_state("opensesame");
        let mut notices = state.gate.subscribe();

        let response = unlock(state.clone(), "").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(notices.try_recv().is_err());
        assert!(!state.gate.is_unlocked());
    }

    #[tokio::test]
    async fn status_reports_the_gate() {
        let state = test_state("opensesame");

        let response = status_handler(State(state.clone())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let status: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(status["unlocked"], false);
        assert_eq!(status["pending"], false);

        unlock(state.clone(), "opensesame").await;

        let response = status_handler(State(state)).await;
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let status: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(status["unlocked"], true);
    }
}
