//! Operation table for CloudScript.

use crate::auth::AuthClass;
use crate::cloudscript::types::request::{ExecuteFunctionRequest, ListFunctionsRequest};
use crate::cloudscript::types::response::{ExecuteFunctionResult, ListFunctionsResult};
use crate::operation::Operation;

/// Routed through `Settings::functions_host` when that override is set.
pub const EXECUTE_FUNCTION: Operation<ExecuteFunctionRequest, ExecuteFunctionResult> =
    Operation::new("/CloudScript/ExecuteFunction", AuthClass::EntityToken);

pub const LIST_FUNCTIONS: Operation<ListFunctionsRequest, ListFunctionsResult> =
    Operation::new("/CloudScript/ListFunctions", AuthClass::EntityToken);
