use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::error::ServerError;
use crate::state::AppState;

/// GET /api/merkle/root
///
/// Returns the Merkle root over all users, or `null` when there are none.
pub async fn get_root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({ "merkleRoot": state.reserve.merkle_root() }))
}

/// GET /api/merkle/proof/{user_id}
///
/// Returns the user's balance and the sibling path from their leaf to the root.
pub async fn get_proof(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
    let user_id: u32 = user_id
        .parse()
        .map_err(|e| ServerError::BadRequest(format!("invalid user_id: {e}")))?;

    let proof = state.reserve.proof_for_user(user_id)?;

    tracing::debug!(user_id, elements = proof.proof_elements.len(), "proof served");

    Ok(Json(proof))
}

/// GET /api/merkle/users
///
/// Lists every user committed to the tree, in leaf order.
pub async fn list_users(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.reserve.users().to_vec())
}
