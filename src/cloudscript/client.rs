use reqwest::Client as ReqwestClient;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::Result;
use crate::auth::{self, AuthContext};
use crate::cloudscript::ops;
use crate::cloudscript::types::request::{ExecuteFunctionRequest, ListFunctionsRequest};
use crate::cloudscript::types::response::{ExecuteFunctionResult, ListFunctionsResult};
use crate::operation::{Call, Operation};
use crate::settings::Settings;
use crate::types::ApiOutcome;

/// Client for CloudScript function execution.
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
    /// CloudScript has no unauthenticated operations, so a context carrying
    /// an entity token is expected.
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

    /// Dispatches one CloudScript operation: resolves the credential mandated
    /// by the operation's auth class (failing fast, before any I/O, when it
    /// is absent), POSTs the request, and maps the response envelope into an
    /// [`ApiOutcome`].
    ///
    /// Function executions resolve their URL against the `functions_host`
    /// override on [`Settings`] when one is set; every other operation
    /// targets the API host.
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
        let url = if operation.path() == ops::EXECUTE_FUNCTION.path() {
            self.settings.functions_endpoint(operation.path())?
        } else {
            self.settings.endpoint(operation.path())?
        };

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

    /// Execute one server-side function.
    pub async fn execute_function(
        &self,
        request: &ExecuteFunctionRequest,
    ) -> Result<ApiOutcome<ExecuteFunctionResult>> {
        self.invoke(&ops::EXECUTE_FUNCTION, Call::new(request)).await
    }

    /// List the functions registered for this title.
    pub async fn list_functions(
        &self,
        request: &ListFunctionsRequest,
    ) -> Result<ApiOutcome<ListFunctionsResult>> {
        self.invoke(&ops::LIST_FUNCTIONS, Call::new(request)).await
    }
}
