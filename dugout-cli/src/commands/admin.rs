use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;

use dugout_core::team::Role;

#[derive(Subcommand)]
pub enum AdminCommands {
    /// List accounts and their linked players
    Users,
    /// Link a user account to a player
    Assign {
        /// Account email
        email: String,

        /// Player name, or "none" to unlink
        player: String,
    },
}

pub async fn run(command: AdminCommands) -> Result<()> {
    let (_, client, session) = super::signed_in_client()?;

    // The whole admin surface is coach-only.
    let profile = client.get_user_profile(session.user_id).await?;
    if profile.role != Role::Coach {
        anyhow::bail!("Only coaches can use admin commands");
    }

    match command {
        AdminCommands::Users => users(&client).await,
        AdminCommands::Assign { email, player } => assign(&client, &email, &player).await,
    }
}

async fn users(client: &dugout_core::BackendClient) -> Result<()> {
    let users = client.list_users().await?;
    let players = client.list_players(&Default::default()).await?;

    for user in &users {
        let linked = user
            .player_id
            .and_then(|id| players.iter().find(|p| p.id == id))
            .map(|p| p.name.as_str())
            .unwrap_or("-");

        println!(
            "{:<30} {:<8} {}",
            user.email,
            user.role.as_str(),
            linked.dimmed()
        );
    }

    Ok(())
}

async fn assign(client: &dugout_core::BackendClient, email: &str, player_name: &str) -> Result<()> {
    let user = client.find_user_by_email(email).await?;

    let player_id = if player_name == "none" {
        None
    } else {
        Some(client.find_player_by_name(player_name).await?.id)
    };

    client.assign_player(user.id, player_id).await?;

    match player_id {
        Some(_) => println!("Linked {} to {}", email.bold(), player_name),
        None => println!("Unlinked {}", email.bold()),
    }
    Ok(())
}
