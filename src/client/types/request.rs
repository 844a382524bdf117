use std::collections::HashMap;

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

/// A login-class request carrying an optional title id. When the field is
/// unset, the wrapper methods stamp in the title id resolved from the
/// client's settings before dispatch.
pub(crate) trait TitleScoped: Clone {
    fn title_id(&self) -> Option<&str>;
    fn set_title_id(&mut self, title_id: String);
}

macro_rules! title_scoped {
    ($request:ty) => {
        impl TitleScoped for $request {
            fn title_id(&self) -> Option<&str> {
                self.title_id.as_deref()
            }

            fn set_title_id(&mut self, title_id: String) {
                self.title_id = Some(title_id);
            }
        }
    };
}

/// Log in (or create) a player keyed by a caller-chosen device identifier.
///
/// # Example
///
/// ```
/// use gamestack_client_sdk::client::types::request::LoginWithCustomIdRequest;
///
/// let request = LoginWithCustomIdRequest::builder()
///     .custom_id("device-1234")
///     .create_account(true)
///     .build();
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(on(String, into))]
pub struct LoginWithCustomIdRequest {
    pub custom_id: String,
    /// Defaults to the title id from the client settings.
    pub title_id: Option<String>,
    pub create_account: Option<bool>,
}

title_scoped!(LoginWithCustomIdRequest);

/// Log in with a previously registered email address and password.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(on(String, into))]
pub struct LoginWithEmailAddressRequest {
    pub email: String,
    pub password: String,
    /// Defaults to the title id from the client settings.
    pub title_id: Option<String>,
}

title_scoped!(LoginWithEmailAddressRequest);

/// Register a new player account. Returns a session ticket, so this is a
/// login-class operation.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(on(String, into))]
pub struct RegisterUserRequest {
    pub email: String,
    pub password: String,
    pub username: Option<String>,
    pub display_name: Option<String>,
    /// Defaults to the title id from the client settings.
    pub title_id: Option<String>,
}

title_scoped!(RegisterUserRequest);

/// Fetch a player profile. Defaults to the calling player when `player_id`
/// is unset.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(on(String, into))]
pub struct GetPlayerProfileRequest {
    pub player_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(on(String, into))]
pub struct GetUserDataRequest {
    /// Specific keys to fetch; all keys when unset.
    pub keys: Option<Vec<String>>,
    /// Another player whose public data to read; the calling player when unset.
    pub player_id: Option<String>,
    /// Skip the payload if the stored version still matches.
    pub if_changed_from_data_version: Option<u32>,
}

/// Visibility of a user-data key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
pub enum UserDataPermission {
    Private,
    Public,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(on(String, into))]
pub struct UpdateUserDataRequest {
    pub data: Option<HashMap<String, String>>,
    pub keys_to_remove: Option<Vec<String>>,
    pub permission: Option<UserDataPermission>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(on(String, into))]
pub struct GetTitleDataRequest {
    /// Specific keys to fetch; all keys when unset.
    pub keys: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(on(String, into))]
pub struct GetPlayerStatisticsRequest {
    pub statistic_names: Option<Vec<String>>,
}

/// One statistic write. `version` guards against concurrent updates when the
/// statistic is versioned.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(on(String, into))]
pub struct StatisticUpdate {
    pub statistic_name: String,
    pub value: i32,
    pub version: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct UpdatePlayerStatisticsRequest {
    pub statistics: Vec<StatisticUpdate>,
}

/// Write one custom telemetry event attributed to the calling player.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(on(String, into))]
pub struct WritePlayerEventRequest {
    pub event_name: String,
    /// Client-side timestamp; the service assigns one when unset.
    pub timestamp: Option<DateTime<Utc>>,
    pub body: Option<HashMap<String, Value>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unset_options_are_omitted_from_the_wire() -> anyhow::Result<()> {
        let request = LoginWithCustomIdRequest::builder()
            .custom_id("device-1234")
            .build();

        assert_eq!(
            serde_json::to_value(&request)?,
            json!({ "CustomId": "device-1234" })
        );
        Ok(())
    }

    #[test]
    fn login_request_uses_wire_casing() -> anyhow::Result<()> {
        let request = LoginWithCustomIdRequest::builder()
            .custom_id("device-1234")
            .title_id("AB12")
            .create_account(true)
            .build();

        assert_eq!(
            serde_json::to_value(&request)?,
            json!({
                "CustomId": "device-1234",
                "TitleId": "AB12",
                "CreateAccount": true
            })
        );
        Ok(())
    }

    #[test]
    fn title_stamping_fills_only_unset_field() {
        let mut request = LoginWithEmailAddressRequest::builder()
            .email("a@b.c")
            .password("hunter2")
            .build();

        assert!(request.title_id().is_none());
        request.set_title_id("AB12".to_owned());
        assert_eq!(request.title_id(), Some("AB12"));
    }

    #[test]
    fn permission_serializes_as_variant_name() -> anyhow::Result<()> {
        let request = UpdateUserDataRequest::builder()
            .data(HashMap::from([("Class".to_owned(), "Paladin".to_owned())]))
            .permission(UserDataPermission::Public)
            .build();

        let value = serde_json::to_value(&request)?;
        assert_eq!(value["Permission"], json!("Public"));
        Ok(())
    }
}
