//! Operation table for the entity API.

use crate::auth::AuthClass;
use crate::entity::types::request::{
    GetEntityProfileRequest, GetEntityProfilesRequest, GetEntityTokenRequest, GetObjectsRequest,
    SetObjectsRequest, WriteEventsRequest,
};
use crate::entity::types::response::{
    GetEntityProfileResult, GetEntityProfilesResult, GetObjectsResult, SetObjectsResult,
    WriteEventsResult,
};
use crate::operation::Operation;
use crate::types::EntityTokenResult;

/// The one session-gated entity operation: trades a session ticket for an
/// entity token.
pub const GET_ENTITY_TOKEN: Operation<GetEntityTokenRequest, EntityTokenResult> =
    Operation::new("/Authentication/GetEntityToken", AuthClass::SessionTicket);

pub const GET_PROFILE: Operation<GetEntityProfileRequest, GetEntityProfileResult> =
    Operation::new("/Profile/GetProfile", AuthClass::EntityToken);

pub const GET_PROFILES: Operation<GetEntityProfilesRequest, GetEntityProfilesResult> =
    Operation::new("/Profile/GetProfiles", AuthClass::EntityToken);

pub const SET_OBJECTS: Operation<SetObjectsRequest, SetObjectsResult> =
    Operation::new("/Object/SetObjects", AuthClass::EntityToken);

pub const GET_OBJECTS: Operation<GetObjectsRequest, GetObjectsResult> =
    Operation::new("/Object/GetObjects", AuthClass::EntityToken);

pub const WRITE_EVENTS: Operation<WriteEventsRequest, WriteEventsResult> =
    Operation::new("/Event/WriteEvents", AuthClass::EntityToken);
