//! Terminal rendering for dugout types.
//!
//! Extension trait adding colored output to core types, kept out of the
//! core crate so it stays presentation-free.

use owo_colors::OwoColorize;

use dugout_core::NextEvent;
use dugout_core::team::{Player, StatCategory};

pub trait Render {
    fn render(&self) -> String;
}

impl Render for NextEvent {
    fn render(&self) -> String {
        let when = if self.all_day {
            self.start.format("%a %b %-d (all day)").to_string()
        } else if self.start.date_naive() == self.end.date_naive() {
            format!(
                "{} – {}",
                self.start.format("%a %b %-d %H:%M"),
                self.end.format("%H:%M")
            )
        } else {
            format!(
                "{} – {}",
                self.start.format("%a %b %-d %H:%M"),
                self.end.format("%a %b %-d %H:%M")
            )
        };

        format!(
            "{}\n{}\n{}",
            self.summary.bold(),
            when,
            self.location.dimmed()
        )
    }
}

/// One roster table line: name, season, then the chosen stat group.
pub fn render_player_row(player: &Player, category: StatCategory) -> String {
    let stats = player
        .stat_columns(category)
        .into_iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "{:<20} {}  {}",
        player.name,
        player.season.dimmed(),
        stats
    )
}
