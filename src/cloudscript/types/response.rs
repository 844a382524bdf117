use serde::Deserialize;
use serde_json::Value;

/// Error raised inside a function execution. Distinct from a
/// [`ServiceError`](crate::types::ServiceError): the call itself succeeded,
/// the function did not.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionExecutionError {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub stack_trace: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExecuteFunctionResult {
    pub function_name: String,
    #[serde(default)]
    pub function_result: Option<Value>,
    #[serde(default)]
    pub execution_time_milliseconds: i32,
    #[serde(default)]
    pub error: Option<FunctionExecutionError>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionModel {
    pub function_name: String,
    #[serde(default)]
    pub function_address: Option<String>,
    #[serde(default)]
    pub trigger_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListFunctionsResult {
    #[serde(default)]
    pub functions: Vec<FunctionModel>,
}
