use bon::Builder;
use serde::Serialize;
use serde_json::Value;
use serde_with::skip_serializing_none;

use crate::types::EntityKey;

/// Execute one server-side function.
///
/// # Example
///
/// ```
/// use gamestack_client_sdk::cloudscript::types::request::ExecuteFunctionRequest;
/// use serde_json::json;
///
/// let request = ExecuteFunctionRequest::builder()
///     .function_name("GrantDailyReward")
///     .function_parameter(json!({ "tier": 2 }))
///     .build();
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(on(String, into))]
pub struct ExecuteFunctionRequest {
    pub function_name: String,
    /// The entity to execute on behalf of; the token's entity when unset.
    pub entity: Option<EntityKey>,
    pub function_parameter: Option<Value>,
    /// Also emit a telemetry event for this execution.
    pub generate_event: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct ListFunctionsRequest {}
