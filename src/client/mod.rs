//! Classic player API client and types.
//!
//! **Feature flag:** `client` (required to use this module)
//!
//! This module covers the operations a game client issues on behalf of one
//! player: logins and registration (unauthenticated, title-scoped), then the
//! session-ticket-gated calls that follow: profiles, user data, statistics,
//! title data, and player events.
//!
//! ## Operations
//!
//! | Path | Auth class |
//! |------|-----------|
//! | `/Client/LoginWithCustomID` | none (title-scoped) |
//! | `/Client/LoginWithEmailAddress` | none (title-scoped) |
//! | `/Client/RegisterUser` | none (title-scoped) |
//! | `/Client/GetPlayerProfile` | session ticket |
//! | `/Client/GetUserData` | session ticket |
//! | `/Client/UpdateUserData` | session ticket |
//! | `/Client/GetTitleData` | session ticket |
//! | `/Client/GetPlayerStatistics` | session ticket |
//! | `/Client/UpdatePlayerStatistics` | session ticket |
//! | `/Client/WritePlayerEvent` | session ticket |
//!
//! # Example
//!
//! ```no_run
//! use gamestack_client_sdk::client::{Client, types::request::LoginWithCustomIdRequest};
//! use gamestack_client_sdk::settings::Settings;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(Settings::builder().title_id("AB12").build())?;
//!
//! let login = client
//!     .login_with_custom_id(
//!         &LoginWithCustomIdRequest::builder()
//!             .custom_id("device-1234")
//!             .create_account(true)
//!             .build(),
//!     )
//!     .await?
//!     .into_result()?;
//!
//! let client = client.authenticated(login.auth_context());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod ops;
pub mod types;

pub use client::Client;
