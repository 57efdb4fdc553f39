//! Space provisioning and lookup.

use peoplemover_authquest::AuthQuestClient;
use peoplemover_core::board::{validate_name, DEFAULT_BOARD_NAME};
use peoplemover_core::error::CoreError;
use peoplemover_db::models::space::{Space, SpaceTimestamp};
use peoplemover_db::repositories::SpaceRepo;
use peoplemover_db::DbPool;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::services::board::BoardService;

/// Response body for `POST /api/user/space`.
///
/// The token is refreshed after the role grant so it already carries the new
/// space's scope.
#[derive(Debug, Serialize)]
pub struct SpaceWithAccessToken {
    pub space: Space,
    pub access_token: String,
}

pub struct SpaceService;

impl SpaceService {
    /// Create a space with its default board.
    pub async fn create(pool: &DbPool, name: &str) -> AppResult<Space> {
        validate_name("Space", name)?;

        if SpaceRepo::find_by_name(pool, name).await?.is_some() {
            return Err(CoreError::Conflict(format!("A space named '{name}' already exists")).into());
        }

        let mut tx = pool.begin().await?;
        let space = SpaceRepo::create(&mut *tx, name).await?;
        BoardService::create_default_board_for_new_space(&mut *tx, DEFAULT_BOARD_NAME, &space)
            .await?;
        tx.commit().await?;

        Ok(space)
    }

    pub async fn list_all(pool: &DbPool) -> AppResult<Vec<Space>> {
        Ok(SpaceRepo::list(pool).await?)
    }

    /// When anything in the space last changed.
    pub async fn last_modified(pool: &DbPool, name: &str) -> AppResult<SpaceTimestamp> {
        let space = SpaceRepo::find_by_name(pool, name)
            .await?
            .ok_or_else(|| CoreError::not_found("Space", name))?;
        Ok(SpaceTimestamp {
            last_modified_date: space.last_modified_date,
        })
    }

    /// Spaces named by a token's scopes, ordered by id. Scopes that name no
    /// space are ignored.
    pub async fn list_for_scopes(pool: &DbPool, scopes: &[String]) -> AppResult<Vec<Space>> {
        if scopes.is_empty() {
            return Ok(Vec::new());
        }
        Ok(SpaceRepo::list_by_names(pool, scopes).await?)
    }

    /// Create a space and grant it to the token's user.
    ///
    /// The space is committed before AuthQuest is called; a provider failure
    /// after that point leaves the space in place.
    pub async fn create_for_user(
        pool: &DbPool,
        authquest: &AuthQuestClient,
        access_token: &str,
        name: &str,
    ) -> AppResult<SpaceWithAccessToken> {
        let space = Self::create(pool, name).await?;

        authquest.update_user_role(access_token, &space.name).await?;
        let refreshed = authquest.refresh_access_token(access_token).await?;

        Ok(SpaceWithAccessToken {
            space,
            access_token: refreshed.access_token,
        })
    }

    /// Invite users by email to an existing space.
    pub async fn invite_users(
        pool: &DbPool,
        authquest: &AuthQuestClient,
        space_name: &str,
        emails: &[String],
    ) -> AppResult<()> {
        if emails.is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "At least one email is required".into(),
            )));
        }
        let space = SpaceRepo::find_by_name(pool, space_name)
            .await?
            .ok_or_else(|| CoreError::not_found("Space", space_name))?;

        authquest.invite_users_to_scope(&space.name, emails).await?;
        Ok(())
    }
}
