use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

/// HTTP status code type, re-exported for use with error inspection.
pub use reqwest::StatusCode;
use reqwest::header;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A session-ticket-gated operation was called without a session ticket
    NotAuthenticated,
    /// An entity-token-gated operation was called without an entity token
    EntityTokenNotSet,
    /// A title-scoped operation had no title id on the request or settings
    MissingTitleId,
    /// Error related to invalid state within gamestack-client-sdk
    Validation,
    /// Internal error from dependencies, including malformed success payloads
    Internal,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Validation {
            reason: message.into(),
        }
        .into()
    }

    #[must_use]
    pub fn not_authenticated() -> Self {
        NotAuthenticated.into()
    }

    #[must_use]
    pub fn entity_token_not_set() -> Self {
        EntityTokenNotSet.into()
    }

    #[must_use]
    pub fn missing_title_id() -> Self {
        MissingTitleId.into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// Precondition failure: the resolved authentication context has no session
/// ticket, so a session-gated call was refused before any network I/O.
#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub struct NotAuthenticated;

impl fmt::Display for NotAuthenticated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "not authenticated: log in to obtain a session ticket before calling this operation"
        )
    }
}

impl StdError for NotAuthenticated {}

/// Precondition failure: the resolved authentication context has no entity
/// token, so an entity-gated call was refused before any network I/O.
#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub struct EntityTokenNotSet;

impl fmt::Display for EntityTokenNotSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entity token not set: call GetEntityToken before calling this operation"
        )
    }
}

impl StdError for EntityTokenNotSet {}

/// Precondition failure: neither the request nor the settings carry a title id.
#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub struct MissingTitleId;

impl fmt::Display for MissingTitleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "title id must be set on the request or in the settings")
    }
}

impl StdError for MissingTitleId {}

#[non_exhaustive]
#[derive(Debug)]
pub struct Validation {
    pub reason: String,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid: {}", self.reason)
    }
}

impl StdError for Validation {}

impl From<NotAuthenticated> for Error {
    fn from(err: NotAuthenticated) -> Self {
        Error::with_source(Kind::NotAuthenticated, err)
    }
}

impl From<EntityTokenNotSet> for Error {
    fn from(err: EntityTokenNotSet) -> Self {
        Error::with_source(Kind::EntityTokenNotSet, err)
    }
}

impl From<MissingTitleId> for Error {
    fn from(err: MissingTitleId) -> Self {
        Error::with_source(Kind::MissingTitleId, err)
    }
}

impl From<Validation> for Error {
    fn from(err: Validation) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<header::InvalidHeaderValue> for Error {
    fn from(e: header::InvalidHeaderValue) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}
