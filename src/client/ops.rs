//! Operation table for the classic player API. Wrapper methods on
//! [`Client`](super::Client) all dispatch through these descriptors; callers
//! with generated tables can pass them to `Client::invoke` directly.

use crate::auth::AuthClass;
use crate::client::types::request::{
    GetPlayerProfileRequest, GetPlayerStatisticsRequest, GetTitleDataRequest, GetUserDataRequest,
    LoginWithCustomIdRequest, LoginWithEmailAddressRequest, RegisterUserRequest,
    UpdatePlayerStatisticsRequest, UpdateUserDataRequest, WritePlayerEventRequest,
};
use crate::client::types::response::{
    GetPlayerProfileResult, GetPlayerStatisticsResult, GetTitleDataResult, GetUserDataResult,
    LoginResult, RegisterUserResult, UpdatePlayerStatisticsResult, UpdateUserDataResult,
    WritePlayerEventResult,
};
use crate::operation::Operation;

pub const LOGIN_WITH_CUSTOM_ID: Operation<LoginWithCustomIdRequest, LoginResult> =
    Operation::new("/Client/LoginWithCustomID", AuthClass::None);

pub const LOGIN_WITH_EMAIL_ADDRESS: Operation<LoginWithEmailAddressRequest, LoginResult> =
    Operation::new("/Client/LoginWithEmailAddress", AuthClass::None);

pub const REGISTER_USER: Operation<RegisterUserRequest, RegisterUserResult> =
    Operation::new("/Client/RegisterUser", AuthClass::None);

pub const GET_PLAYER_PROFILE: Operation<GetPlayerProfileRequest, GetPlayerProfileResult> =
    Operation::new("/Client/GetPlayerProfile", AuthClass::SessionTicket);

pub const GET_USER_DATA: Operation<GetUserDataRequest, GetUserDataResult> =
    Operation::new("/Client/GetUserData", AuthClass::SessionTicket);

pub const UPDATE_USER_DATA: Operation<UpdateUserDataRequest, UpdateUserDataResult> =
    Operation::new("/Client/UpdateUserData", AuthClass::SessionTicket);

pub const GET_TITLE_DATA: Operation<GetTitleDataRequest, GetTitleDataResult> =
    Operation::new("/Client/GetTitleData", AuthClass::SessionTicket);

pub const GET_PLAYER_STATISTICS: Operation<GetPlayerStatisticsRequest, GetPlayerStatisticsResult> =
    Operation::new("/Client/GetPlayerStatistics", AuthClass::SessionTicket);

pub const UPDATE_PLAYER_STATISTICS: Operation<
    UpdatePlayerStatisticsRequest,
    UpdatePlayerStatisticsResult,
> = Operation::new("/Client/UpdatePlayerStatistics", AuthClass::SessionTicket);

pub const WRITE_PLAYER_EVENT: Operation<WritePlayerEventRequest, WritePlayerEventResult> =
    Operation::new("/Client/WritePlayerEvent", AuthClass::SessionTicket);
