use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;

use dugout_core::{GlobalConfig, resolve_next_event};

use crate::render::Render;

pub async fn run(verbose: bool) -> Result<()> {
    let config = GlobalConfig::load()?;
    let http = reqwest::Client::new();
    let today = Local::now().date_naive();

    let resolution = resolve_next_event(&http, &config.calendar_url, today).await?;

    match &resolution.next {
        Some(event) => {
            println!("{}", "Next event".bold());
            println!("{}", event.render());
        }
        None => println!("No upcoming events."),
    }

    if verbose && !resolution.skipped.is_empty() {
        println!();
        for skipped in &resolution.skipped {
            let name = skipped.summary.as_deref().unwrap_or("(unnamed)");
            println!(
                "{}",
                format!("skipped '{}': {}", name, skipped.reason).dimmed()
            );
        }
    }

    Ok(())
}
