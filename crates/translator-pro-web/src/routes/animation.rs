//! Animation route - serves the Lottie JSON loaded at startup.

use axum::extract::State;
use axum::Json;
use serde_json::Value;
use std::sync::Arc;

use crate::helpers::{OptionExt, RouteResult};
use crate::state::AppState;

/// 404 when the animation is disabled or could not be fetched.
pub async fn get_animation(State(state): State<Arc<AppState>>) -> RouteResult<Json<Value>> {
    state
        .animation
        .clone()
        .map(Json)
        .or_not_found("No animation loaded")
}
