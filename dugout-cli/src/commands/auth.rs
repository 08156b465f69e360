use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;

use dugout_core::{BackendClient, GlobalConfig, Session};

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Register a new account (created with the parent role)
    Signup { email: String },
    /// Sign in and store the session
    Login { email: String },
    /// Clear the stored session
    Logout,
    /// Show who is currently signed in
    Whoami,
}

pub async fn run(command: AuthCommands) -> Result<()> {
    match command {
        AuthCommands::Signup { email } => signup(&email).await,
        AuthCommands::Login { email } => login(&email).await,
        AuthCommands::Logout => logout().await,
        AuthCommands::Whoami => whoami().await,
    }
}

async fn signup(email: &str) -> Result<()> {
    let config = GlobalConfig::load()?;
    let client = BackendClient::new(&config);

    let password = rpassword::prompt_password("Password: ")?;
    let confirm = rpassword::prompt_password("Confirm password: ")?;
    if password != confirm {
        anyhow::bail!("Passwords do not match");
    }

    let user = client.sign_up(email, &password).await?;

    println!("Account created for {}", user.email.bold());
    println!("Check your email for a confirmation link, then run `dugout auth login {email}`.");
    Ok(())
}

async fn login(email: &str) -> Result<()> {
    let config = GlobalConfig::load()?;
    let client = BackendClient::new(&config);

    let password = rpassword::prompt_password("Password: ")?;
    let session = client.sign_in(email, &password).await?;
    session.save()?;

    println!("Signed in as {}", session.email.bold());
    Ok(())
}

async fn logout() -> Result<()> {
    let config = GlobalConfig::load()?;

    // Best effort: revoke the token remotely, but always clear the local
    // session even if the backend call fails.
    if let Ok(Some(session)) = Session::load() {
        let client = BackendClient::with_session(&config, &session);
        if let Err(e) = client.sign_out().await {
            eprintln!("{}", format!("Could not revoke token: {}", e).dimmed());
        }
    }

    Session::clear()?;
    println!("Signed out.");
    Ok(())
}

async fn whoami() -> Result<()> {
    let (_, client, session) = super::signed_in_client()?;
    let profile = client.get_user_profile(session.user_id).await?;

    println!("{} ({})", profile.email.bold(), profile.role.as_str());
    if let Some(player_id) = profile.player_id {
        println!("Linked player: {player_id}");
    }
    Ok(())
}
