use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};
use tracing::debug;

use crate::scores::PlayerIdentity;

pub const PLAYER_ID_HEADER: &str = "x-player-id";
pub const PLAYER_NAME_HEADER: &str = "x-player-name";
pub const PLAYER_EMAIL_HEADER: &str = "x-player-email";

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Reads the identity injected by the upstream identity provider.
/// Requests without a player id are anonymous.
pub fn identity_from_headers(headers: &HeaderMap) -> Option<PlayerIdentity> {
    let id = header_value(headers, PLAYER_ID_HEADER)?;
    Some(PlayerIdentity {
        id,
        username: header_value(headers, PLAYER_NAME_HEADER),
        email: header_value(headers, PLAYER_EMAIL_HEADER),
    })
}

/// Identity middleware - adds a PlayerIdentity extension for signed-in requests.
/// Usage: .layer(middleware::from_fn(api::identity::resolve_identity))
/// Handlers then extract `Option<Extension<PlayerIdentity>>`.
pub async fn resolve_identity(mut req: Request, next: Next) -> Response {
    match identity_from_headers(req.headers()) {
        Some(identity) => {
            debug!(player_id = %identity.id, "Signed-in request");
            req.extensions_mut().insert(identity);
        }
        None => debug!("Anonymous request"),
    }

    next.run(req).await
}
