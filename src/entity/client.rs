use reqwest::Client as ReqwestClient;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::Result;
use crate::auth::{self, AuthContext};
use crate::entity::ops;
use crate::entity::types::request::{
    GetEntityProfileRequest, GetEntityProfilesRequest, GetEntityTokenRequest, GetObjectsRequest,
    SetObjectsRequest, WriteEventsRequest,
};
use crate::entity::types::response::{
    GetEntityProfileResult, GetEntityProfilesResult, GetObjectsResult, SetObjectsResult,
    WriteEventsResult,
};
use crate::operation::{Call, Operation};
use crate::settings::Settings;
use crate::types::{ApiOutcome, EntityTokenResult};

/// Client for the entity API.
///
/// Construct it with a context holding a session ticket, call
/// [`Client::get_entity_token`], then thread the granted token into a new
/// context via [`AuthContext::with_entity_token`] for the entity-gated
/// operations.
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
    /// ambient authentication context.
    #[must_use]
    pub fn authenticated(&self, context: AuthContext) -> Self {
        Self {
            settings: self.settings.clone(),
            context,
            http: self.http.clone(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn context(&self) -> &AuthContext {
        &self.context
    }

    /// Dispatches one entity operation: resolves the credential mandated by
    /// the operation's auth class (failing fast, before any I/O, when it is
    /// absent), POSTs the request, and maps the response envelope into an
    /// [`ApiOutcome`].
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

    /// Trade the session ticket for an entity token.
    ///
    /// The grant is returned, not stored: thread it forward with
    /// [`AuthContext::with_entity_token`] and [`Client::authenticated`].
    pub async fn get_entity_token(
        &self,
        request: &GetEntityTokenRequest,
    ) -> Result<ApiOutcome<EntityTokenResult>> {
        self.invoke(&ops::GET_ENTITY_TOKEN, Call::new(request)).await
    }

    pub async fn get_profile(
        &self,
        request: &GetEntityProfileRequest,
    ) -> Result<ApiOutcome<GetEntityProfileResult>> {
        self.invoke(&ops::GET_PROFILE, Call::new(request)).await
    }

    pub async fn get_profiles(
        &self,
        request: &GetEntityProfilesRequest,
    ) -> Result<ApiOutcome<GetEntityProfilesResult>> {
        self.invoke(&ops::GET_PROFILES, Call::new(request)).await
    }

    /// Write or delete objects on an entity profile.
    pub async fn set_objects(
        &self,
        request: &SetObjectsRequest,
    ) -> Result<ApiOutcome<SetObjectsResult>> {
        self.invoke(&ops::SET_OBJECTS, Call::new(request)).await
    }

    pub async fn get_objects(
        &self,
        request: &GetObjectsRequest,
    ) -> Result<ApiOutcome<GetObjectsResult>> {
        self.invoke(&ops::GET_OBJECTS, Call::new(request)).await
    }

    /// Write a batch of telemetry events into the event pipeline.
    pub async fn write_events(
        &self,
        request: &WriteEventsRequest,
    ) -> Result<ApiOutcome<WriteEventsResult>> {
        self.invoke(&ops::WRITE_EVENTS, Call::new(request)).await
    }
}
