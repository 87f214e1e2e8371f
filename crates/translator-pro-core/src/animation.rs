//! Decorative Lottie animation shown next to the language picker.
//!
//! Purely cosmetic: every failure degrades to "no animation".

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::AnimationConfig;
use crate::error::{Error, Result};

/// Load the configured animation, or `None` when disabled or unavailable.
pub async fn load_animation(config: &AnimationConfig) -> Option<Value> {
    if !config.enabled {
        debug!("Animation disabled");
        return None;
    }

    let client = match Client::builder().timeout(Duration::from_secs(10)).build() {
        Ok(client) => client,
        Err(e) => {
            warn!("Animation unavailable: {}", e);
            return None;
        }
    };

    fetch_animation(&client, &config.url).await
}

/// Fetch the animation JSON at `url`.
///
/// Returns `None` on transport errors, non-success statuses and bodies that
/// are not JSON.
pub async fn fetch_animation(client: &Client, url: &str) -> Option<Value> {
    match try_fetch(client, url).await {
        Ok(value) => {
            debug!("Loaded animation from {}", url);
            Some(value)
        }
        Err(e) => {
            warn!("Animation unavailable: {}", e);
            None
        }
    }
}

async fn try_fetch(client: &Client, url: &str) -> Result<Value> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::AnimationFetch(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::AnimationFetch(format!("HTTP {status} from {url}")));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| Error::AnimationFetch(e.to_string()))
}
