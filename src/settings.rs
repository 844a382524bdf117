//! Target-service configuration.
//!
//! A [`Settings`] value carries the tenant (title) identifier and optional
//! host overrides. Fields left unset on an instance fall back to the
//! process-wide defaults registered with [`Settings::set_defaults`], so a
//! program talking to one title can configure it once.

use std::sync::RwLock;

use bon::Builder;
/// URL type for host overrides, re-exported for convenience.
pub use url::Url;

use crate::error::Error;
use crate::{PRODUCTION_DOMAIN, Result};

static DEFAULTS: RwLock<Option<Settings>> = RwLock::new(None);

/// Per-client configuration for the GameStack API.
///
/// # Example
///
/// ```
/// use gamestack_client_sdk::settings::Settings;
///
/// let settings = Settings::builder().title_id("AB12").build();
/// assert_eq!(
///     settings.endpoint("/Client/LoginWithCustomID").unwrap().as_str(),
///     "https://ab12.gamestackapi.com/Client/LoginWithCustomID"
/// );
/// ```
#[derive(Clone, Debug, Default, Builder)]
#[builder(on(String, into))]
pub struct Settings {
    /// The tenant identifier. Required unless `api_host` is set, since the
    /// production base address is derived from it.
    title_id: Option<String>,
    /// Full override of the API base address. Should be a bare origin; paths
    /// are joined onto it.
    api_host: Option<Url>,
    /// Override for CloudScript function execution only, e.g. a local
    /// functions host during development.
    functions_host: Option<Url>,
}

impl Settings {
    /// Registers process-wide default settings used as a fallback by every
    /// instance whose own fields are unset.
    pub fn set_defaults(settings: Settings) {
        if let Ok(mut slot) = DEFAULTS.write() {
            *slot = Some(settings);
        }
    }

    /// Clears the process-wide defaults.
    pub fn clear_defaults() {
        if let Ok(mut slot) = DEFAULTS.write() {
            *slot = None;
        }
    }

    /// Returns a copy of the process-wide defaults, if registered.
    #[must_use]
    pub fn defaults() -> Option<Settings> {
        DEFAULTS.read().ok().and_then(|slot| slot.clone())
    }

    /// The title id, falling back to the process-wide defaults.
    #[must_use]
    pub fn title_id(&self) -> Option<String> {
        self.title_id
            .clone()
            .or_else(|| Settings::defaults().and_then(|defaults| defaults.title_id))
    }

    #[must_use]
    fn api_host(&self) -> Option<Url> {
        self.api_host
            .clone()
            .or_else(|| Settings::defaults().and_then(|defaults| defaults.api_host))
    }

    #[must_use]
    fn functions_host(&self) -> Option<Url> {
        self.functions_host
            .clone()
            .or_else(|| Settings::defaults().and_then(|defaults| defaults.functions_host))
    }

    /// Resolves the full URL for an operation path.
    ///
    /// Uses the `api_host` override when present, otherwise derives
    /// `https://{title_id}.gamestackapi.com` and fails with
    /// [`Kind::MissingTitleId`](crate::error::Kind) when no title id is
    /// resolvable.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let base = match self.api_host() {
            Some(host) => host,
            None => {
                let title = self.title_id().ok_or_else(Error::missing_title_id)?;
                Url::parse(&format!(
                    "https://{}.{PRODUCTION_DOMAIN}",
                    title.to_lowercase()
                ))?
            }
        };

        Ok(base.join(path.trim_start_matches('/'))?)
    }

    /// Like [`Settings::endpoint`], but honors the `functions_host` override.
    /// Used only by CloudScript function execution.
    pub fn functions_endpoint(&self, path: &str) -> Result<Url> {
        match self.functions_host() {
            Some(host) => Ok(host.join(path.trim_start_matches('/'))?),
            None => self.endpoint(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_derives_host_from_title() -> anyhow::Result<()> {
        let settings = Settings::builder().title_id("AB12").build();
        let url = settings.endpoint("/Client/GetUserData")?;
        assert_eq!(
            url.as_str(),
            "https://ab12.gamestackapi.com/Client/GetUserData"
        );
        Ok(())
    }

    #[test]
    fn endpoint_prefers_api_host_override() -> anyhow::Result<()> {
        let settings = Settings::builder()
            .api_host(Url::parse("http://127.0.0.1:9000")?)
            .build();
        let url = settings.endpoint("/Client/GetUserData")?;
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/Client/GetUserData");
        Ok(())
    }

    #[test]
    fn endpoint_without_title_fails() {
        let settings = Settings::builder().build();
        let error = settings.endpoint("/Client/GetUserData").unwrap_err();
        assert_eq!(error.kind(), crate::error::Kind::MissingTitleId);
    }

    #[test]
    fn functions_endpoint_prefers_functions_host() -> anyhow::Result<()> {
        let settings = Settings::builder()
            .title_id("AB12")
            .functions_host(Url::parse("http://localhost:7071")?)
            .build();
        let url = settings.functions_endpoint("/CloudScript/ExecuteFunction")?;
        assert_eq!(
            url.as_str(),
            "http://localhost:7071/CloudScript/ExecuteFunction"
        );

        // Other operations are unaffected by the functions override.
        let url = settings.endpoint("/Client/GetUserData")?;
        assert_eq!(
            url.as_str(),
            "https://ab12.gamestackapi.com/Client/GetUserData"
        );
        Ok(())
    }

    #[test]
    fn functions_endpoint_falls_back_to_api_host() -> anyhow::Result<()> {
        let settings = Settings::builder().title_id("ZZ99").build();
        let url = settings.functions_endpoint("/CloudScript/ExecuteFunction")?;
        assert_eq!(
            url.as_str(),
            "https://zz99.gamestackapi.com/CloudScript/ExecuteFunction"
        );
        Ok(())
    }
}
