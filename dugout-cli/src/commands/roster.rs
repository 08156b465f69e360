use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;

use dugout_core::backend::PlayerFilter;
use dugout_core::team::{NewPlayer, Role, StatCategory};

use crate::render::render_player_row;

#[derive(Subcommand)]
pub enum RosterCommands {
    /// List players and one stat group
    List {
        /// Only this season (default: all seasons)
        #[arg(short, long)]
        season: Option<i32>,

        /// Stat group to show: batting, combine or pitching
        #[arg(short, long, default_value = "batting")]
        category: StatCategory,
    },
    /// Add a player with zeroed stats (coach only)
    Add {
        name: String,

        #[arg(short, long)]
        season: i32,
    },
    /// List the seasons the roster covers
    Seasons,
    /// Set one stat column for a player (coach only)
    Set {
        /// Player name
        player: String,

        /// Column name within the group, e.g. hits or 40_ft_sprint
        stat: String,

        value: f64,

        /// Stat group the column belongs to
        #[arg(short, long, default_value = "batting")]
        category: StatCategory,
    },
}

pub async fn run(command: RosterCommands) -> Result<()> {
    match command {
        RosterCommands::List { season, category } => list(season, category).await,
        RosterCommands::Add { name, season } => add(&name, season).await,
        RosterCommands::Seasons => seasons().await,
        RosterCommands::Set {
            player,
            stat,
            value,
            category,
        } => set(&player, &stat, value, category).await,
    }
}

async fn list(season: Option<i32>, category: StatCategory) -> Result<()> {
    let (_, client, session) = super::signed_in_client()?;
    let profile = client.get_user_profile(session.user_id).await?;

    let filter = PlayerFilter::for_profile(&profile, season);
    if profile.role == Role::Parent && filter.player_id.is_none() {
        anyhow::bail!("No player is linked to your account yet. Ask a coach to assign one.");
    }

    let players = client.list_players(&filter).await?;
    if players.is_empty() {
        println!("No players found.");
        return Ok(());
    }

    println!("{} ({})", "Roster".bold(), category.as_str());
    for player in &players {
        println!("{}", render_player_row(player, category));
    }

    Ok(())
}

async fn seasons() -> Result<()> {
    let (_, client, _session) = super::signed_in_client()?;

    let seasons = client.list_seasons().await?;
    if seasons.is_empty() {
        println!("No seasons yet.");
        return Ok(());
    }

    for season in seasons {
        println!("{}", season.year);
    }
    Ok(())
}

async fn add(name: &str, season: i32) -> Result<()> {
    let (_, client, session) = super::signed_in_client()?;
    require_coach(&client, &session).await?;

    let player = client.create_player(&NewPlayer::new(name, season)).await?;
    println!("Added {} (season {})", player.name.bold(), player.season);
    Ok(())
}

async fn set(player_name: &str, stat: &str, value: f64, category: StatCategory) -> Result<()> {
    let (_, client, session) = super::signed_in_client()?;
    require_coach(&client, &session).await?;

    let mut player = client.find_player_by_name(player_name).await?;
    if !player.set_stat(category, stat, value) {
        anyhow::bail!(
            "No column '{}' in the {} group",
            stat,
            category.as_str()
        );
    }

    let updated = client.update_player(&player).await?;
    println!(
        "{}: {} {} = {}",
        updated.name.bold(),
        category.as_str(),
        stat,
        value
    );
    Ok(())
}

/// Roster edits are restricted to coaches.
async fn require_coach(client: &dugout_core::BackendClient, session: &dugout_core::Session) -> Result<()> {
    let profile = client.get_user_profile(session.user_id).await?;
    if profile.role != Role::Coach {
        anyhow::bail!("Only coaches can edit the roster");
    }
    Ok(())
}
