//! Typed CRUD over the backend's table surface (PostgREST conventions).
//!
//! Filters are encoded as `column=eq.value` query parameters. Inserts
//! and updates ask for `return=representation` so the caller gets the
//! row as the backend stored it.

use reqwest::Method;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use super::BackendClient;
use crate::error::{DugoutError, DugoutResult};
use crate::team::{NewPlayer, Player, Role, Season, UserProfile};

/// Row filter for player listings.
#[derive(Debug, Clone, Default)]
pub struct PlayerFilter {
    pub season: Option<i32>,
    /// Restrict to a single player (the parent-role rule).
    pub player_id: Option<Uuid>,
}

impl PlayerFilter {
    /// The rows a given account is allowed to see. Coaches see all
    /// players; parents only the one linked to their profile.
    pub fn for_profile(profile: &UserProfile, season: Option<i32>) -> Self {
        let player_id = match profile.role {
            Role::Coach => None,
            Role::Parent => profile.player_id,
        };

        PlayerFilter { season, player_id }
    }

    fn query(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        if let Some(season) = self.season {
            params.push(("season".to_string(), format!("eq.{}", season)));
        }
        if let Some(id) = self.player_id {
            params.push(("id".to_string(), format!("eq.{}", id)));
        }
        params
    }
}

impl BackendClient {
    // --- players ---

    pub async fn list_players(&self, filter: &PlayerFilter) -> DugoutResult<Vec<Player>> {
        let response = self
            .request(Method::GET, "/rest/v1/players")
            .query(&filter.query())
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn find_player_by_name(&self, name: &str) -> DugoutResult<Player> {
        let name_filter = format!("eq.{}", name);
        let response = self
            .request(Method::GET, "/rest/v1/players")
            .query(&[("select", "*"), ("name", name_filter.as_str())])
            .send()
            .await?;

        let mut players: Vec<Player> = Self::check(response).await?.json().await?;
        players
            .pop()
            .ok_or_else(|| DugoutError::PlayerNotFound(name.to_string()))
    }

    pub async fn create_player(&self, new_player: &NewPlayer) -> DugoutResult<Player> {
        let created: Vec<Player> = self.insert("/rest/v1/players", new_player).await?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| DugoutError::Serialization("Insert returned no rows".into()))
    }

    /// Overwrite a player's stat groups (the roster editor's save path).
    pub async fn update_player(&self, player: &Player) -> DugoutResult<Player> {
        let body = json!({
            "name": player.name,
            "season": player.season,
            "batting": player.batting,
            "combine": player.combine,
            "pitching": player.pitching,
        });

        let updated: Vec<Player> = self
            .update_by_id("/rest/v1/players", player.id, &body)
            .await?;
        updated
            .into_iter()
            .next()
            .ok_or_else(|| DugoutError::PlayerNotFound(player.id.to_string()))
    }

    // --- users ---

    pub async fn list_users(&self) -> DugoutResult<Vec<UserProfile>> {
        let response = self
            .request(Method::GET, "/rest/v1/users")
            .query(&[("select", "*")])
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn get_user_profile(&self, user_id: Uuid) -> DugoutResult<UserProfile> {
        let id_filter = format!("eq.{}", user_id);
        let response = self
            .request(Method::GET, "/rest/v1/users")
            .query(&[("select", "*"), ("id", id_filter.as_str())])
            .send()
            .await?;

        let mut users: Vec<UserProfile> = Self::check(response).await?.json().await?;
        users
            .pop()
            .ok_or_else(|| DugoutError::UserNotFound(user_id.to_string()))
    }

    pub async fn find_user_by_email(&self, email: &str) -> DugoutResult<UserProfile> {
        let email_filter = format!("eq.{}", email);
        let response = self
            .request(Method::GET, "/rest/v1/users")
            .query(&[("select", "*"), ("email", email_filter.as_str())])
            .send()
            .await?;

        let mut users: Vec<UserProfile> = Self::check(response).await?.json().await?;
        users
            .pop()
            .ok_or_else(|| DugoutError::UserNotFound(email.to_string()))
    }

    pub(super) async fn insert_user_profile(
        &self,
        id: Uuid,
        email: &str,
        role: Role,
    ) -> DugoutResult<()> {
        let body = json!({
            "id": id,
            "email": email,
            "role": role,
            "player_id": null,
        });

        let response = self
            .request(Method::POST, "/rest/v1/users")
            .json(&body)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Link (or unlink, with `None`) a user to a player.
    pub async fn assign_player(
        &self,
        user_id: Uuid,
        player_id: Option<Uuid>,
    ) -> DugoutResult<UserProfile> {
        let body = json!({ "player_id": player_id });

        let updated: Vec<UserProfile> =
            self.update_by_id("/rest/v1/users", user_id, &body).await?;
        updated
            .into_iter()
            .next()
            .ok_or_else(|| DugoutError::UserNotFound(user_id.to_string()))
    }

    // --- seasons ---

    pub async fn list_seasons(&self) -> DugoutResult<Vec<Season>> {
        let response = self
            .request(Method::GET, "/rest/v1/seasons")
            .query(&[("select", "*")])
            .send()
            .await?;

        let mut seasons: Vec<Season> = Self::check(response).await?.json().await?;
        seasons.sort_by_key(|s| s.year);
        Ok(seasons)
    }

    // --- shared helpers ---

    async fn insert<B, R>(&self, path: &str, body: &B) -> DugoutResult<Vec<R>>
    where
        B: Serialize + ?Sized,
        R: serde::de::DeserializeOwned,
    {
        let response = self
            .request(Method::POST, path)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    async fn update_by_id<B, R>(&self, path: &str, id: Uuid, body: &B) -> DugoutResult<Vec<R>>
    where
        B: Serialize + ?Sized,
        R: serde::de::DeserializeOwned,
    {
        let id_filter = format!("eq.{}", id);
        let response = self
            .request(Method::PATCH, path)
            .query(&[("id", id_filter.as_str())])
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(role: Role, player_id: Option<Uuid>) -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            email: "someone@example.com".to_string(),
            role,
            player_id,
        }
    }

    #[test]
    fn test_coach_filter_is_unrestricted() {
        let filter = PlayerFilter::for_profile(&profile(Role::Coach, None), Some(2025));
        assert_eq!(filter.season, Some(2025));
        assert!(filter.player_id.is_none());
    }

    #[test]
    fn test_parent_filter_restricts_to_linked_player() {
        let linked = Uuid::new_v4();
        let filter = PlayerFilter::for_profile(&profile(Role::Parent, Some(linked)), None);
        assert_eq!(filter.player_id, Some(linked));
    }

    #[test]
    fn test_filter_query_uses_postgrest_eq_syntax() {
        let id = Uuid::new_v4();
        let filter = PlayerFilter {
            season: Some(2025),
            player_id: Some(id),
        };

        let query = filter.query();
        assert!(query.contains(&("season".to_string(), "eq.2025".to_string())));
        assert!(query.contains(&("id".to_string(), format!("eq.{}", id))));
    }
}
