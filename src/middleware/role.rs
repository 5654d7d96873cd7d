//! Role-requirement extractors.
//!
//! Each extractor runs [`AuthUser`] first, then resolves the stored role
//! for the claims email against the user collection. The lookup re-queries
//! the store on every evaluation; roles are never cached. An absent user
//! or an unset role never matches.

use anyhow::anyhow;
use axum::{extract::FromRequestParts, http::request::Parts};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::Role;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Passes only when the caller's stored role is exactly `admin`.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        let role = UserService::role_of(state.store.as_ref(), auth_user.email()).await?;

        if role != Some(Role::Admin) {
            return Err(AppError::forbidden(anyhow!("forbidden access")));
        }

        Ok(RequireAdmin(auth_user))
    }
}

/// Passes only when the caller's stored role is exactly `instructor`.
#[derive(Debug, Clone)]
pub struct RequireInstructor(pub AuthUser);

impl FromRequestParts<AppState> for RequireInstructor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        let role = UserService::role_of(state.store.as_ref(), auth_user.email()).await?;

        if role != Some(Role::Instructor) {
            return Err(AppError::forbidden(anyhow!("forbidden access")));
        }

        Ok(RequireInstructor(auth_user))
    }
}
