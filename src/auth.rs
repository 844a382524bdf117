//! Authentication contexts and per-operation credential resolution.
//!
//! Every operation belongs to exactly one [`AuthClass`], attached statically
//! to its [`Operation`](crate::operation::Operation) descriptor. Resolution
//! is one function, [`credential_header`]: pick the per-call override context
//! if supplied, otherwise the client's ambient context, then demand the
//! single credential the class mandates, failing fast, before any network
//! I/O, when it is absent.

use bon::Builder;
use reqwest::header::HeaderValue;
/// Secret string types that redact credentials in debug output.
pub use secrecy::{ExposeSecret, SecretString};

use crate::Result;
use crate::error::Error;
use crate::types::EntityTokenResult;

/// Header carrying the player session ticket.
pub const SESSION_TICKET_HEADER: &str = "X-Authorization";
/// Header carrying the entity token.
pub const ENTITY_TOKEN_HEADER: &str = "X-EntityToken";

/// The authentication class of an operation, fixed at descriptor
/// construction. Unauthenticated operations send no credential header;
/// title-scoped ones among them still require a title id from the request or
/// the settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthClass {
    /// No credential required.
    None,
    /// Requires the session ticket issued by a login operation.
    SessionTicket,
    /// Requires the entity token issued by `GetEntityToken`.
    EntityToken,
}

/// An immutable snapshot of established identity.
///
/// Contexts are values, not shared state: login operations return a fresh
/// context via `LoginResult::auth_context` and the caller threads it into
/// subsequent clients or individual calls. Nothing in this crate writes a
/// context behind the caller's back, so concurrent logins cannot race.
///
/// Credentials are held as [`SecretString`] so `Debug` output never leaks
/// tokens.
#[derive(Clone, Debug, Default, Builder)]
#[builder(on(String, into))]
pub struct AuthContext {
    #[builder(into)]
    session_ticket: Option<SecretString>,
    #[builder(into)]
    entity_token: Option<SecretString>,
    player_id: Option<String>,
    entity_id: Option<String>,
    entity_type: Option<String>,
}

impl AuthContext {
    /// The session ticket, if a login has established one.
    #[must_use]
    pub fn session_ticket(&self) -> Option<&SecretString> {
        self.session_ticket.as_ref()
    }

    /// The entity token, if one has been obtained.
    #[must_use]
    pub fn entity_token(&self) -> Option<&SecretString> {
        self.entity_token.as_ref()
    }

    /// The account identifier of the logged-in player.
    #[must_use]
    pub fn player_id(&self) -> Option<&str> {
        self.player_id.as_deref()
    }

    /// The identifier of the entity the entity token represents.
    #[must_use]
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// The type of the entity the entity token represents.
    #[must_use]
    pub fn entity_type(&self) -> Option<&str> {
        self.entity_type.as_deref()
    }

    #[must_use]
    pub fn has_session_ticket(&self) -> bool {
        self.session_ticket.is_some()
    }

    #[must_use]
    pub fn has_entity_token(&self) -> bool {
        self.entity_token.is_some()
    }

    /// Returns a copy of this context carrying the given entity token. Used
    /// to thread the result of `GetEntityToken` forward.
    #[must_use]
    pub fn with_entity_token(mut self, token: &EntityTokenResult) -> Self {
        self.entity_token = Some(SecretString::from(token.entity_token.clone()));
        if let Some(entity) = &token.entity {
            self.entity_id = Some(entity.id.clone());
            self.entity_type = entity.entity_type.clone();
        }
        self
    }
}

/// Resolves the credential header for one call.
///
/// `call_context` is the per-call override carried on the
/// [`Call`](crate::operation::Call); when present it takes precedence over
/// the client's `ambient` context for this call only.
pub(crate) fn credential_header(
    auth: AuthClass,
    call_context: Option<&AuthContext>,
    ambient: &AuthContext,
) -> Result<Option<(&'static str, HeaderValue)>> {
    let context = call_context.unwrap_or(ambient);

    match auth {
        AuthClass::None => Ok(None),
        AuthClass::SessionTicket => {
            let ticket = context
                .session_ticket()
                .ok_or_else(Error::not_authenticated)?;
            Ok(Some((SESSION_TICKET_HEADER, sensitive(ticket)?)))
        }
        AuthClass::EntityToken => {
            let token = context
                .entity_token()
                .ok_or_else(Error::entity_token_not_set)?;
            Ok(Some((ENTITY_TOKEN_HEADER, sensitive(token)?)))
        }
    }
}

fn sensitive(secret: &SecretString) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(secret.expose_secret())?;
    value.set_sensitive(true);
    Ok(value)
}
