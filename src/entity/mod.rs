//! Entity API client and types.
//!
//! **Feature flag:** `entity` (required to use this module)
//!
//! Entity operations act on generalized entities (title player accounts,
//! characters, groups) rather than the logged-in player. All of them are
//! gated behind an entity token except `GetEntityToken` itself, which trades
//! a session ticket for one.
//!
//! ## Operations
//!
//! | Path | Auth class |
//! |------|-----------|
//! | `/Authentication/GetEntityToken` | session ticket |
//! | `/Profile/GetProfile` | entity token |
//! | `/Profile/GetProfiles` | entity token |
//! | `/Object/SetObjects` | entity token |
//! | `/Object/GetObjects` | entity token |
//! | `/Event/WriteEvents` | entity token |
//!
//! # Example
//!
//! ```no_run
//! use gamestack_client_sdk::auth::AuthContext;
//! use gamestack_client_sdk::entity::{Client, types::request::GetEntityTokenRequest};
//! use gamestack_client_sdk::settings::Settings;
//!
//! # async fn example(player_context: AuthContext) -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::builder().title_id("AB12").build();
//! let client = Client::with_context(settings, player_context)?;
//!
//! let token = client
//!     .get_entity_token(&GetEntityTokenRequest::builder().build())
//!     .await?
//!     .into_result()?;
//!
//! // Thread the granted token forward explicitly.
//! let client = client.authenticated(client.context().clone().with_entity_token(&token));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod ops;
pub mod types;

pub use client::Client;
