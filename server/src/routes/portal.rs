//! Portal API: public config and base-account co-signing.

#[cfg(test)]
#[path = "portal_test.rs"]
mod portal_test;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use base64::Engine as _;
use client::net::types::{ApiError, CosignRequest, CosignResponse, PortalConfig};
use program::cosign::{self, CosignRejection};

use crate::state::AppState;

type ApiFailure = (StatusCode, Json<ApiError>);

fn bad_request(error: String) -> ApiFailure {
    (StatusCode::BAD_REQUEST, Json(ApiError { error }))
}

/// `GET /api/config`: public settings the browser needs to reach the program.
pub async fn config(State(state): State<AppState>) -> Json<PortalConfig> {
    Json(state.portal.as_ref().clone())
}

/// `POST /api/base-account/cosign`: sign a lone `initialize` message with
/// the base account key.
///
/// The message is validated before signing; anything else is refused with
/// 400 so the key cannot authorize arbitrary transactions.
pub async fn cosign(
    State(state): State<AppState>,
    Json(body): Json<CosignRequest>,
) -> Result<Json<CosignResponse>, ApiFailure> {
    let message = base64::engine::general_purpose::STANDARD
        .decode(body.message.as_bytes())
        .map_err(|e| {
            tracing::warn!(error = %e, "cosign: message is not base64");
            bad_request(format!("message is not base64: {e}"))
        })?;

    match cosign::cosign_initialize(&state.base_signer, &state.portal.program_id, &message) {
        Ok(signature) => {
            tracing::info!(base_account = %state.portal.base_account, %signature, "co-signed initialize");
            Ok(Json(CosignResponse { signature }))
        }
        Err(rejection) => {
            log_rejection(&rejection);
            Err(bad_request(rejection.to_string()))
        }
    }
}

fn log_rejection(rejection: &CosignRejection) {
    match rejection {
        CosignRejection::Malformed(e) => tracing::warn!(error = %e, "cosign: malformed message"),
        other => tracing::warn!(reason = %other, "cosign: refused message"),
    }
}
