//! Role- and ownership-based authorization checks.
//!
//! [`RequireAdmin`] wraps [`AuthUser`] and rejects requests whose role does
//! not meet the requirement, enforcing authorization at the type level.
//! [`ensure_owner_or_admin`] is the per-resource ownership rule used by
//! handlers that loaded the resource first.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use cartwheel_core::error::CoreError;
use cartwheel_core::roles::ROLE_ADMIN;
use cartwheel_core::types::DbId;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}

/// Ownership rule: access is permitted to the resource owner or an admin.
pub fn ensure_owner_or_admin(user: &AuthUser, owner_id: DbId) -> Result<(), AppError> {
    if user.user_id == owner_id || user.role == ROLE_ADMIN {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "Not authorized to access this resource".into(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartwheel_core::roles::{ROLE_ADMIN, ROLE_USER};

    fn user(id: DbId, role: &str) -> AuthUser {
        AuthUser {
            user_id: id,
            role: role.to_string(),
        }
    }

    #[test]
    fn test_owner_is_allowed() {
        assert!(ensure_owner_or_admin(&user(1, ROLE_USER), 1).is_ok());
    }

    #[test]
    fn test_admin_overrides_ownership() {
        assert!(ensure_owner_or_admin(&user(2, ROLE_ADMIN), 1).is_ok());
    }

    #[test]
    fn test_other_user_is_forbidden() {
        let result = ensure_owner_or_admin(&user(2, ROLE_USER), 1);
        assert!(matches!(
            result,
            Err(AppError::Core(CoreError::Forbidden(_)))
        ));
    }
}
