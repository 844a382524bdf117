use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::AuthContext;
use crate::client::types::request::UserDataPermission;
use crate::types::EntityTokenResult;

/// Result of any login-class operation.
///
/// Call [`LoginResult::auth_context`] to obtain the identity established by
/// this login; thread it into subsequent clients or calls explicitly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginResult {
    pub session_ticket: String,
    pub player_id: String,
    #[serde(default)]
    pub newly_created: bool,
    #[serde(default)]
    pub entity_token: Option<EntityTokenResult>,
    #[serde(default)]
    pub last_login_time: Option<DateTime<Utc>>,
}

impl LoginResult {
    /// Builds a fresh authentication context from this login's session
    /// ticket, entity token, and identity fields.
    #[must_use]
    pub fn auth_context(&self) -> AuthContext {
        let entity = self
            .entity_token
            .as_ref()
            .and_then(|token| token.entity.as_ref());

        AuthContext::builder()
            .session_ticket(self.session_ticket.clone())
            .player_id(self.player_id.clone())
            .maybe_entity_token(
                self.entity_token
                    .as_ref()
                    .map(|token| token.entity_token.clone()),
            )
            .maybe_entity_id(entity.map(|entity| entity.id.clone()))
            .maybe_entity_type(entity.and_then(|entity| entity.entity_type.clone()))
            .build()
    }
}

/// Result of `/Client/RegisterUser`. Registration issues a session ticket,
/// so it carries the same context-building hook as logins.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterUserResult {
    pub session_ticket: String,
    pub player_id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub entity_token: Option<EntityTokenResult>,
}

impl RegisterUserResult {
    #[must_use]
    pub fn auth_context(&self) -> AuthContext {
        let entity = self
            .entity_token
            .as_ref()
            .and_then(|token| token.entity.as_ref());

        AuthContext::builder()
            .session_ticket(self.session_ticket.clone())
            .player_id(self.player_id.clone())
            .maybe_entity_token(
                self.entity_token
                    .as_ref()
                    .map(|token| token.entity_token.clone()),
            )
            .maybe_entity_id(entity.map(|entity| entity.id.clone()))
            .maybe_entity_type(entity.and_then(|entity| entity.entity_type.clone()))
            .build()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerProfile {
    pub player_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayerProfileResult {
    pub player_profile: PlayerProfile,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserDataRecord {
    #[serde(default)]
    pub value: Option<String>,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub permission: Option<UserDataPermission>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUserDataResult {
    #[serde(default)]
    pub data: HashMap<String, UserDataRecord>,
    pub data_version: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserDataResult {
    pub data_version: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTitleDataResult {
    #[serde(default)]
    pub data: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatisticValue {
    pub statistic_name: String,
    pub value: i32,
    pub version: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayerStatisticsResult {
    #[serde(default)]
    pub statistics: Vec<StatisticValue>,
}

/// The service returns an empty `data` object for statistic updates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdatePlayerStatisticsResult {}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WritePlayerEventResult {
    #[serde(default)]
    pub event_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret as _;
    use serde_json::json;

    use super::*;

    fn login_json() -> serde_json::Value {
        json!({
            "SessionTicket": "ticket-abc",
            "PlayerId": "P123",
            "NewlyCreated": true,
            "EntityToken": {
                "EntityToken": "ent-xyz",
                "TokenExpiration": "2026-08-30T00:00:00Z",
                "Entity": { "Id": "E-77", "Type": "title_player_account" }
            },
            "LastLoginTime": "2026-08-29T10:00:00Z"
        })
    }

    #[test]
    fn login_result_deserializes() -> anyhow::Result<()> {
        let login: LoginResult = serde_json::from_value(login_json())?;
        assert_eq!(login.player_id, "P123");
        assert!(login.newly_created);
        assert_eq!(
            login.entity_token.as_ref().map(|t| t.entity_token.as_str()),
            Some("ent-xyz")
        );
        Ok(())
    }

    #[test]
    fn auth_context_carries_all_identity_fields() -> anyhow::Result<()> {
        let login: LoginResult = serde_json::from_value(login_json())?;
        let context = login.auth_context();

        assert_eq!(
            context
                .session_ticket()
                .map(|ticket| ticket.expose_secret().to_owned()),
            Some("ticket-abc".to_owned())
        );
        assert_eq!(
            context
                .entity_token()
                .map(|token| token.expose_secret().to_owned()),
            Some("ent-xyz".to_owned())
        );
        assert_eq!(context.player_id(), Some("P123"));
        assert_eq!(context.entity_id(), Some("E-77"));
        assert_eq!(context.entity_type(), Some("title_player_account"));
        Ok(())
    }

    #[test]
    fn login_without_entity_token_still_builds_context() -> anyhow::Result<()> {
        let login: LoginResult = serde_json::from_value(json!({
            "SessionTicket": "ticket-abc",
            "PlayerId": "P123"
        }))?;
        let context = login.auth_context();

        assert!(context.has_session_ticket());
        assert!(!context.has_entity_token());
        Ok(())
    }

    #[test]
    fn statistics_update_result_is_empty_object() -> anyhow::Result<()> {
        let result: UpdatePlayerStatisticsResult = serde_json::from_value(json!({}))?;
        assert_eq!(result, UpdatePlayerStatisticsResult {});
        Ok(())
    }
}
