#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests"
)]
#![allow(
    unused,
    reason = "Each test binary uses a different subset of these helpers"
)]

use gamestack_client_sdk::auth::AuthContext;
use gamestack_client_sdk::settings::{Settings, Url};
use httpmock::MockServer;
use serde_json::{Value, json};

pub const TITLE_ID: &str = "AB12";
pub const SESSION_TICKET: &str = "ticket-abc";
pub const ENTITY_TOKEN: &str = "entity-token-xyz";
pub const PLAYER_ID: &str = "P123";
pub const ENTITY_ID: &str = "E-77";
pub const ENTITY_TYPE: &str = "title_player_account";

/// Settings pointing every operation at the mock server.
#[must_use]
pub fn settings_for(server: &MockServer) -> Settings {
    Settings::builder()
        .title_id(TITLE_ID)
        .api_host(Url::parse(&server.base_url()).unwrap())
        .build()
}

/// A context as established by a plain (no entity token) login.
#[must_use]
pub fn player_context() -> AuthContext {
    AuthContext::builder()
        .session_ticket(SESSION_TICKET.to_owned())
        .player_id(PLAYER_ID)
        .build()
}

/// A context holding both credentials, as after threading an entity token
/// grant forward.
#[must_use]
pub fn entity_context() -> AuthContext {
    AuthContext::builder()
        .session_ticket(SESSION_TICKET.to_owned())
        .entity_token(ENTITY_TOKEN.to_owned())
        .player_id(PLAYER_ID)
        .entity_id(ENTITY_ID)
        .entity_type(ENTITY_TYPE)
        .build()
}

/// Wraps `data` in the outer response envelope.
#[must_use]
pub fn envelope(data: Value) -> Value {
    json!({ "code": 200, "status": "OK", "data": data })
}

/// The canned success body for login-class operations, entity token included.
#[must_use]
pub fn login_envelope() -> Value {
    envelope(json!({
        "SessionTicket": SESSION_TICKET,
        "PlayerId": PLAYER_ID,
        "NewlyCreated": false,
        "EntityToken": {
            "EntityToken": ENTITY_TOKEN,
            "TokenExpiration": "2026-09-01T00:00:00Z",
            "Entity": { "Id": ENTITY_ID, "Type": ENTITY_TYPE }
        },
        "LastLoginTime": "2026-08-29T10:00:00Z"
    }))
}

/// A documented-shape service error body.
#[must_use]
pub fn account_not_found_body() -> Value {
    json!({
        "code": 400,
        "status": "BadRequest",
        "error": "AccountNotFound",
        "errorCode": 1001,
        "errorMessage": "No account matches the given CustomId"
    })
}
