use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::types::EntityKey;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntityProfileBody {
    pub entity: EntityKey,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub version_number: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetEntityProfileResult {
    #[serde(default)]
    pub profile: Option<EntityProfileBody>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetEntityProfilesResult {
    #[serde(default)]
    pub profiles: Vec<EntityProfileBody>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetObjectsResult {
    pub profile_version: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObjectResult {
    pub object_name: String,
    #[serde(default)]
    pub data_object: Option<Value>,
    #[serde(default)]
    pub escaped_data_object: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetObjectsResult {
    pub entity: EntityKey,
    pub profile_version: i32,
    #[serde(default)]
    pub objects: HashMap<String, ObjectResult>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WriteEventsResult {
    #[serde(default)]
    pub assigned_event_ids: Option<Vec<Uuid>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn objects_deserialize_with_parsed_payload() -> anyhow::Result<()> {
        let result: GetObjectsResult = serde_json::from_value(json!({
            "Entity": { "Id": "E-77", "Type": "title_player_account" },
            "ProfileVersion": 4,
            "Objects": {
                "loadout": {
                    "ObjectName": "loadout",
                    "DataObject": { "slot": "primary" }
                }
            }
        }))?;

        assert_eq!(result.profile_version, 4);
        let object = result.objects.get("loadout").expect("loadout missing");
        assert_eq!(object.data_object, Some(json!({ "slot": "primary" })));
        Ok(())
    }

    #[test]
    fn write_events_assigns_uuids() -> anyhow::Result<()> {
        let result: WriteEventsResult = serde_json::from_value(json!({
            "AssignedEventIds": ["8c0cbf3a-7a64-4cf2-a127-3ac4bb1e4c26"]
        }))?;

        assert_eq!(result.assigned_event_ids.map(|ids| ids.len()), Some(1));
        Ok(())
    }
}
