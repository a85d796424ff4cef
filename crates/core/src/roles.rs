//! Role names stored in the `users.role` column.

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";

/// Whether `role` is one of the recognized role names.
pub fn is_valid_role(role: &str) -> bool {
    role == ROLE_USER || role == ROLE_ADMIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_roles_are_valid() {
        assert!(is_valid_role(ROLE_USER));
        assert!(is_valid_role(ROLE_ADMIN));
    }

    #[test]
    fn test_unknown_role_is_invalid() {
        assert!(!is_valid_role("superuser"));
        assert!(!is_valid_role(""));
    }
}
