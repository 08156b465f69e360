pub mod admin;
pub mod auth;
pub mod next;
pub mod photos;
pub mod roster;

use anyhow::Result;
use dugout_core::{BackendClient, GlobalConfig, Session};

/// Load config and build a client authenticated as the stored session.
/// Fails with a sign-in hint when no valid session exists.
pub fn signed_in_client() -> Result<(GlobalConfig, BackendClient, Session)> {
    let config = GlobalConfig::load()?;
    let session = Session::require()?;
    let client = BackendClient::with_session(&config, &session);
    Ok((config, client, session))
}
