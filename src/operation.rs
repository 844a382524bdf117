//! Operation descriptors and per-call options.
//!
//! The platform exposes hundreds of near-identical operations; the only
//! things that vary are the resource path, the request/response types, and
//! the authentication class. An [`Operation`] captures exactly that, so one
//! generic `invoke` drives every wrapper method, and generated operation
//! tables can drive it directly.

use std::marker::PhantomData;

use bon::Builder;
use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::auth::{AuthClass, AuthContext};

/// Static descriptor of one remote operation: its fixed resource path and
/// the credential class it is gated behind.
#[derive(Debug)]
pub struct Operation<Req, Resp> {
    path: &'static str,
    auth: AuthClass,
    marker: PhantomData<fn(&Req) -> Resp>,
}

impl<Req, Resp> Operation<Req, Resp> {
    #[must_use]
    pub const fn new(path: &'static str, auth: AuthClass) -> Self {
        Self {
            path,
            auth,
            marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    #[must_use]
    pub const fn auth(&self) -> AuthClass {
        self.auth
    }
}

impl<Req, Resp> Clone for Operation<Req, Resp> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Req, Resp> Copy for Operation<Req, Resp> {}

/// One invocation of an [`Operation`]: the request body plus the optional
/// per-call extras the dispatcher honors.
///
/// # Example
///
/// ```no_run
/// use gamestack_client_sdk::operation::Call;
/// use serde_json::json;
/// # use gamestack_client_sdk::client::types::request::GetTitleDataRequest;
///
/// # let request = GetTitleDataRequest::builder().build();
/// let call = Call::builder()
///     .request(&request)
///     .custom_data(json!({"call_site": 7}))
///     .build();
/// ```
#[derive(Debug, Builder)]
pub struct Call<'req, Req> {
    /// The operation-specific request body, serialized as-is.
    pub request: &'req Req,
    /// Per-call authentication context; takes precedence over the client's
    /// ambient context for this call only.
    pub auth_context: Option<AuthContext>,
    /// Opaque correlation value returned unchanged alongside the result.
    pub custom_data: Option<Value>,
    /// Additional headers appended to the dispatched request.
    pub headers: Option<HeaderMap>,
}

impl<'req, Req> Call<'req, Req> {
    /// A call with no overrides, correlation value, or extra headers.
    #[must_use]
    pub fn new(request: &'req Req) -> Self {
        Self {
            request,
            auth_context: None,
            custom_data: None,
            headers: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_is_const_constructible() {
        const OP: Operation<(), ()> = Operation::new("/Client/NoOp", AuthClass::SessionTicket);
        assert_eq!(OP.path(), "/Client/NoOp");
        assert_eq!(OP.auth(), AuthClass::SessionTicket);
    }

    #[test]
    fn plain_call_has_no_extras() {
        let request = ();
        let call = Call::new(&request);
        assert!(call.auth_context.is_none());
        assert!(call.custom_data.is_none());
        assert!(call.headers.is_none());
    }
}
