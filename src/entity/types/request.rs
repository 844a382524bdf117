use bon::Builder;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use serde_with::skip_serializing_none;

use crate::types::EntityKey;

/// Trade the caller's session ticket for an entity token. When `entity` is
/// unset, the token is issued for the calling player's title player account.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct GetEntityTokenRequest {
    pub entity: Option<EntityKey>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct GetEntityProfileRequest {
    /// The entity to fetch; the token's own entity when unset.
    pub entity: Option<EntityKey>,
    /// Return stored objects as parsed JSON rather than escaped strings.
    pub data_as_object: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct GetEntityProfilesRequest {
    pub entities: Vec<EntityKey>,
}

/// One object write within a [`SetObjectsRequest`]. Exactly one of
/// `data_object` or `delete_object` should be set.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(on(String, into))]
pub struct SetObject {
    pub object_name: String,
    pub data_object: Option<Value>,
    pub delete_object: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct SetObjectsRequest {
    pub entity: EntityKey,
    pub objects: Vec<SetObject>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct GetObjectsRequest {
    pub entity: EntityKey,
    /// Return objects as escaped JSON strings instead of parsed values.
    pub escape_object: Option<bool>,
}

/// One telemetry event in a [`WriteEventsRequest`] batch.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(on(String, into))]
pub struct EventContents {
    pub name: String,
    /// The entity the event is about; the token's entity when unset.
    pub entity: Option<EntityKey>,
    pub payload: Option<Value>,
    /// Client-side timestamp; the service assigns one when unset.
    pub original_timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct WriteEventsRequest {
    pub events: Vec<EventContents>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn set_objects_uses_wire_casing() -> anyhow::Result<()> {
        let request = SetObjectsRequest::builder()
            .entity(EntityKey::builder().id("E-77").build())
            .objects(vec![
                SetObject::builder()
                    .object_name("loadout")
                    .data_object(json!({ "slot": "primary" }))
                    .build(),
            ])
            .build();

        assert_eq!(
            serde_json::to_value(&request)?,
            json!({
                "Entity": { "Id": "E-77" },
                "Objects": [{
                    "ObjectName": "loadout",
                    "DataObject": { "slot": "primary" }
                }]
            })
        );
        Ok(())
    }

    #[test]
    fn empty_token_request_serializes_to_empty_object() -> anyhow::Result<()> {
        let request = GetEntityTokenRequest::builder().build();
        assert_eq!(serde_json::to_value(&request)?, json!({}));
        Ok(())
    }
}
