#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod auth;
#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "cloudscript")]
pub mod cloudscript;
#[cfg(feature = "entity")]
pub mod entity;
pub mod error;
pub mod observer;
pub mod operation;
#[cfg(any(feature = "client", feature = "cloudscript", feature = "entity"))]
pub(crate) mod serde_helpers;
pub mod settings;
pub mod types;

#[cfg(any(feature = "client", feature = "cloudscript", feature = "entity"))]
use {
    reqwest::header::{HeaderMap, HeaderValue},
    serde::Serialize,
    serde::de::DeserializeOwned,
    serde_json::Value,
    url::Url,
};

use crate::error::Error;
#[cfg(any(feature = "client", feature = "cloudscript", feature = "entity"))]
use crate::types::{ApiOutcome, Envelope, ServiceError};

pub type Result<T> = std::result::Result<T, Error>;

/// Domain under which title-scoped API hosts live. The default base address
/// for a title `AB12` is `https://ab12.gamestackapi.com`.
pub const PRODUCTION_DOMAIN: &str = "gamestackapi.com";

/// Issue one `POST` to `url` and map the outcome into an [`ApiOutcome`].
///
/// Transport-level and service-reported failures are recovered into the
/// `Failure` variant (after notifying the process-wide [`observer`]); a
/// malformed success payload is the only thing that propagates as `Err`.
/// The `custom_data` correlation value is carried unchanged into either
/// variant.
#[cfg(any(feature = "client", feature = "cloudscript", feature = "entity"))]
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(http, url, body, credential, extra_headers, custom_data),
        fields(path = url.path(), status_code)
    )
)]
pub(crate) async fn invoke<Req: Serialize, Resp: DeserializeOwned>(
    http: &reqwest::Client,
    url: Url,
    body: &Req,
    credential: Option<(&'static str, HeaderValue)>,
    extra_headers: Option<HeaderMap>,
    custom_data: Option<Value>,
) -> Result<ApiOutcome<Resp>> {
    #[cfg(feature = "tracing")]
    let path = url.path().to_owned();

    let mut builder = http.post(url).json(body);
    if let Some((name, value)) = credential {
        builder = builder.header(name, value);
    }
    if let Some(headers) = extra_headers {
        builder = builder.headers(headers);
    }

    let response = match builder.send().await {
        Ok(response) => response,
        Err(transport) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(path = %path, error = %transport, "transport error");

            let error = ServiceError::from_transport(&transport);
            observer::notify(&error);
            return Ok(ApiOutcome::Failure { error, custom_data });
        }
    };

    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    if !status_code.is_success() {
        let message = response.text().await.unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            path = %path,
            message = %message,
            "API request failed"
        );

        let error = ServiceError::from_error_body(status_code, &message);
        observer::notify(&error);
        return Ok(ApiOutcome::Failure { error, custom_data });
    }

    // Reading the body can still fail at the transport level (the peer may
    // close mid-stream); only decoding an obtained payload is a hard error.
    let body = match response.text().await {
        Ok(body) => body,
        Err(transport) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(path = %path, error = %transport, "transport error");

            let error = ServiceError::from_transport(&transport);
            observer::notify(&error);
            return Ok(ApiOutcome::Failure { error, custom_data });
        }
    };

    let json_value: Value = serde_json::from_str(&body)?;
    let envelope: Envelope<Resp> = serde_helpers::from_value(json_value)?;

    Ok(ApiOutcome::Success {
        data: envelope.data,
        custom_data,
    })
}
