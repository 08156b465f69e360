//! Roster and account types stored in the backend tables.
//!
//! These mirror the `users`, `players`, and `seasons` tables. The three
//! stat groups are kept as typed structs so the CLI can render and edit
//! individual columns without stringly-typed JSON access.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role. Coaches can edit everything; parents only see the
/// player linked to their account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Coach,
    Parent,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Coach => "coach",
            Role::Parent => "parent",
        }
    }
}

/// A row in the `users` table (one per authenticated account).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    /// Player this account is allowed to see when the role is `parent`.
    pub player_id: Option<Uuid>,
}

/// A row in the `players` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub season: i32,
    pub batting: BattingStats,
    pub combine: CombineStats,
    pub pitching: PitchingStats,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a player. The backend assigns `id` and
/// `updated_at`; all stat counters start at zero.
#[derive(Debug, Clone, Serialize)]
pub struct NewPlayer {
    pub name: String,
    pub season: i32,
    pub batting: BattingStats,
    pub combine: CombineStats,
    pub pitching: PitchingStats,
}

impl NewPlayer {
    pub fn new(name: &str, season: i32) -> Self {
        NewPlayer {
            name: name.to_string(),
            season,
            batting: BattingStats::default(),
            combine: CombineStats::default(),
            pitching: PitchingStats::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattingStats {
    pub hits: f64,
    pub walks: f64,
    pub plate_appearances: f64,
    pub singles: f64,
    pub doubles: f64,
    pub triples: f64,
    pub home_runs: f64,
    pub sacrifices: f64,
    pub hit_by_pitch: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombineStats {
    #[serde(rename = "40_ft_sprint")]
    pub sprint_40_ft: f64,
    pub vertical_jump: f64,
    #[serde(rename = "20_ft_shuffle")]
    pub shuffle_20_ft: f64,
    pub med_ball_throw: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PitchingStats {
    pub innings_pitched: f64,
    pub balls: f64,
    pub strikes: f64,
    pub walks: f64,
    pub strikeouts: f64,
    pub hits: f64,
    pub earned_runs: f64,
}

/// Stat group selector used by roster listing and editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatCategory {
    Batting,
    Combine,
    Pitching,
}

impl StatCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatCategory::Batting => "batting",
            StatCategory::Combine => "combine",
            StatCategory::Pitching => "pitching",
        }
    }
}

impl std::str::FromStr for StatCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "batting" => Ok(StatCategory::Batting),
            "combine" => Ok(StatCategory::Combine),
            "pitching" => Ok(StatCategory::Pitching),
            other => Err(format!(
                "Unknown category '{}'. Expected batting, combine or pitching",
                other
            )),
        }
    }
}

impl Player {
    /// The (column, value) pairs of one stat group, in table order.
    pub fn stat_columns(&self, category: StatCategory) -> Vec<(&'static str, f64)> {
        match category {
            StatCategory::Batting => vec![
                ("hits", self.batting.hits),
                ("walks", self.batting.walks),
                ("plate_appearances", self.batting.plate_appearances),
                ("singles", self.batting.singles),
                ("doubles", self.batting.doubles),
                ("triples", self.batting.triples),
                ("home_runs", self.batting.home_runs),
                ("sacrifices", self.batting.sacrifices),
                ("hit_by_pitch", self.batting.hit_by_pitch),
            ],
            StatCategory::Combine => vec![
                ("40_ft_sprint", self.combine.sprint_40_ft),
                ("vertical_jump", self.combine.vertical_jump),
                ("20_ft_shuffle", self.combine.shuffle_20_ft),
                ("med_ball_throw", self.combine.med_ball_throw),
            ],
            StatCategory::Pitching => vec![
                ("innings_pitched", self.pitching.innings_pitched),
                ("balls", self.pitching.balls),
                ("strikes", self.pitching.strikes),
                ("walks", self.pitching.walks),
                ("strikeouts", self.pitching.strikeouts),
                ("hits", self.pitching.hits),
                ("earned_runs", self.pitching.earned_runs),
            ],
        }
    }

    /// Set one stat column by its table name. Returns false if the
    /// column does not exist in the given group.
    pub fn set_stat(&mut self, category: StatCategory, column: &str, value: f64) -> bool {
        let slot = match category {
            StatCategory::Batting => match column {
                "hits" => &mut self.batting.hits,
                "walks" => &mut self.batting.walks,
                "plate_appearances" => &mut self.batting.plate_appearances,
                "singles" => &mut self.batting.singles,
                "doubles" => &mut self.batting.doubles,
                "triples" => &mut self.batting.triples,
                "home_runs" => &mut self.batting.home_runs,
                "sacrifices" => &mut self.batting.sacrifices,
                "hit_by_pitch" => &mut self.batting.hit_by_pitch,
                _ => return false,
            },
            StatCategory::Combine => match column {
                "40_ft_sprint" => &mut self.combine.sprint_40_ft,
                "vertical_jump" => &mut self.combine.vertical_jump,
                "20_ft_shuffle" => &mut self.combine.shuffle_20_ft,
                "med_ball_throw" => &mut self.combine.med_ball_throw,
                _ => return false,
            },
            StatCategory::Pitching => match column {
                "innings_pitched" => &mut self.pitching.innings_pitched,
                "balls" => &mut self.pitching.balls,
                "strikes" => &mut self.pitching.strikes,
                "walks" => &mut self.pitching.walks,
                "strikeouts" => &mut self.pitching.strikeouts,
                "hits" => &mut self.pitching.hits,
                "earned_runs" => &mut self.pitching.earned_runs,
                _ => return false,
            },
        };
        *slot = value;
        true
    }
}

/// A row in the `seasons` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub year: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_stats_serialize_with_numeric_column_names() {
        let combine = CombineStats {
            sprint_40_ft: 3.2,
            vertical_jump: 14.0,
            shuffle_20_ft: 5.1,
            med_ball_throw: 22.0,
        };

        let json = serde_json::to_value(&combine).unwrap();
        assert_eq!(json["40_ft_sprint"], 3.2);
        assert_eq!(json["20_ft_shuffle"], 5.1);
    }

    #[test]
    fn test_set_stat_rejects_unknown_column() {
        let mut player = Player {
            id: Uuid::new_v4(),
            name: "Sam".to_string(),
            season: 2025,
            batting: BattingStats::default(),
            combine: CombineStats::default(),
            pitching: PitchingStats::default(),
            updated_at: None,
        };

        assert!(player.set_stat(StatCategory::Batting, "hits", 3.0));
        assert_eq!(player.batting.hits, 3.0);
        assert!(!player.set_stat(StatCategory::Batting, "era", 1.0));
    }

    #[test]
    fn test_role_round_trips_lowercase() {
        let json = serde_json::to_string(&Role::Coach).unwrap();
        assert_eq!(json, "\"coach\"");
        let role: Role = serde_json::from_str("\"parent\"").unwrap();
        assert_eq!(role, Role::Parent);
    }
}
