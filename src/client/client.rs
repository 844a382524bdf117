use reqwest::Client as ReqwestClient;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::Result;
use crate::auth::{self, AuthContext};
use crate::client::ops;
use crate::client::types::request::{
    GetPlayerProfileRequest, GetPlayerStatisticsRequest, GetTitleDataRequest, GetUserDataRequest,
    LoginWithCustomIdRequest, LoginWithEmailAddressRequest, RegisterUserRequest, TitleScoped,
    UpdatePlayerStatisticsRequest, UpdateUserDataRequest, WritePlayerEventRequest,
};
use crate::client::types::response::{
    GetPlayerProfileResult, GetPlayerStatisticsResult, GetTitleDataResult, GetUserDataResult,
    LoginResult, RegisterUserResult, UpdatePlayerStatisticsResult, UpdateUserDataResult,
    WritePlayerEventResult,
};
use crate::error::Error;
use crate::operation::{Call, Operation};
use crate::settings::Settings;
use crate::types::ApiOutcome;

/// Client for the classic player API.
///
/// Holds the settings, an immutable ambient [`AuthContext`], and the shared
/// HTTP client. Logins never mutate a client; use
/// [`Client::authenticated`] to obtain one carrying the context a login
/// returned.
#[derive(Clone, Debug)]
pub struct Client {
    settings: Settings,
    context: AuthContext,
    http: ReqwestClient,
}

impl Client {
    /// Creates a client with an empty authentication context.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(settings: Settings) -> Result<Self> {
        Self::with_context(settings, AuthContext::default())
    }

    /// Creates a client with an explicit ambient authentication context.
    pub fn with_context(settings: Settings, context: AuthContext) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("User-Agent", HeaderValue::from_static("gamestack_client_sdk"));
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let http = ReqwestClient::builder().default_headers(headers).build()?;

        Ok(Self {
            settings,
            context,
            http,
        })
    }

    /// Returns a client identical to this one but carrying `context` as its
    /// ambient authentication context. The underlying HTTP client is shared.
    #[must_use]
    pub fn authenticated(&self, context: AuthContext) -> Self {
        Self {
            settings: self.settings.clone(),
            context,
            http: self.http.clone(),
        }
    }

    /// Returns a client identical to this one with the ambient context
    /// cleared, as after a logout.
    #[must_use]
    pub fn unauthenticated(&self) -> Self {
        self.authenticated(AuthContext::default())
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn context(&self) -> &AuthContext {
        &self.context
    }

    /// Dispatches one operation: resolves the credential mandated by the
    /// operation's auth class (failing fast, before any I/O, when it is
    /// absent), POSTs the request to the operation's fixed path, and maps
    /// the response envelope into an [`ApiOutcome`].
    ///
    /// The request body is sent as-is; login-class wrapper methods stamp the
    /// title id before calling this.
    pub async fn invoke<Req, Resp>(
        &self,
        operation: &Operation<Req, Resp>,
        call: Call<'_, Req>,
    ) -> Result<ApiOutcome<Resp>>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let credential =
            auth::credential_header(operation.auth(), call.auth_context.as_ref(), &self.context)?;
        let url = self.settings.endpoint(operation.path())?;

        crate::invoke(
            &self.http,
            url,
            call.request,
            credential,
            call.headers,
            call.custom_data,
        )
        .await
    }

    /// Clones a login-class request, filling its title id from the settings
    /// when unset. Fails fast when neither carries one.
    fn title_scoped<R: TitleScoped>(&self, request: &R) -> Result<R> {
        let mut request = request.clone();
        if request.title_id().is_none() {
            let title = self
                .settings
                .title_id()
                .ok_or_else(Error::missing_title_id)?;
            request.set_title_id(title);
        }
        Ok(request)
    }

    /// Log in (or, with `create_account`, create) a player keyed by a
    /// caller-chosen device identifier.
    ///
    /// On success, call [`LoginResult::auth_context`] and thread the returned
    /// context into subsequent calls via [`Client::authenticated`].
    pub async fn login_with_custom_id(
        &self,
        request: &LoginWithCustomIdRequest,
    ) -> Result<ApiOutcome<LoginResult>> {
        let request = self.title_scoped(request)?;
        self.invoke(&ops::LOGIN_WITH_CUSTOM_ID, Call::new(&request))
            .await
    }

    /// Log in with a registered email address and password.
    pub async fn login_with_email_address(
        &self,
        request: &LoginWithEmailAddressRequest,
    ) -> Result<ApiOutcome<LoginResult>> {
        let request = self.title_scoped(request)?;
        self.invoke(&ops::LOGIN_WITH_EMAIL_ADDRESS, Call::new(&request))
            .await
    }

    /// Register a new player account. Returns a session ticket like a login.
    pub async fn register_user(
        &self,
        request: &RegisterUserRequest,
    ) -> Result<ApiOutcome<RegisterUserResult>> {
        let request = self.title_scoped(request)?;
        self.invoke(&ops::REGISTER_USER, Call::new(&request)).await
    }

    /// Fetch a player profile; the calling player's own when the request
    /// names no player.
    pub async fn get_player_profile(
        &self,
        request: &GetPlayerProfileRequest,
    ) -> Result<ApiOutcome<GetPlayerProfileResult>> {
        self.invoke(&ops::GET_PLAYER_PROFILE, Call::new(request))
            .await
    }

    pub async fn get_user_data(
        &self,
        request: &GetUserDataRequest,
    ) -> Result<ApiOutcome<GetUserDataResult>> {
        self.invoke(&ops::GET_USER_DATA, Call::new(request)).await
    }

    pub async fn update_user_data(
        &self,
        request: &UpdateUserDataRequest,
    ) -> Result<ApiOutcome<UpdateUserDataResult>> {
        self.invoke(&ops::UPDATE_USER_DATA, Call::new(request)).await
    }

    /// Fetch title-wide key/value configuration.
    pub async fn get_title_data(
        &self,
        request: &GetTitleDataRequest,
    ) -> Result<ApiOutcome<GetTitleDataResult>> {
        self.invoke(&ops::GET_TITLE_DATA, Call::new(request)).await
    }

    pub async fn get_player_statistics(
        &self,
        request: &GetPlayerStatisticsRequest,
    ) -> Result<ApiOutcome<GetPlayerStatisticsResult>> {
        self.invoke(&ops::GET_PLAYER_STATISTICS, Call::new(request))
            .await
    }

    pub async fn update_player_statistics(
        &self,
        request: &UpdatePlayerStatisticsRequest,
    ) -> Result<ApiOutcome<UpdatePlayerStatisticsResult>> {
        self.invoke(&ops::UPDATE_PLAYER_STATISTICS, Call::new(request))
            .await
    }

    /// Write one custom telemetry event attributed to the calling player.
    pub async fn write_player_event(
        &self,
        request: &WritePlayerEventRequest,
    ) -> Result<ApiOutcome<WritePlayerEventResult>> {
        self.invoke(&ops::WRITE_PLAYER_EVENT, Call::new(request))
            .await
    }
}
