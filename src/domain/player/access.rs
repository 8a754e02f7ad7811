//! Access guard for profile reads.
//!
//! Single-shot check per request: the caller-supplied identifier must
//! exactly match the stored owner identifier. No sessions, no token
//! expiry. The owner identifier is the slug itself, so the check is
//! guessable from the public URL; that weakness is part of the emulated
//! behavior (see DESIGN.md) and is not strengthened here.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Authorizes a profile read against the stored owner identifier.
///
/// Returns `Unauthorized` when the caller supplies no identifier or one
/// that does not exactly match.
pub fn authorize_owner(stored_owner: &str, caller_id: Option<&str>) -> Result<(), DomainError> {
    match caller_id {
        Some(id) if id == stored_owner => Ok(()),
        _ => Err(DomainError::new(
            ErrorCode::Unauthorized,
            "Supplied player_id does not match the profile owner",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_identifier_is_authorized() {
        assert!(authorize_owner("jane-doe", Some("jane-doe")).is_ok());
    }

    #[test]
    fn mismatched_identifier_is_unauthorized() {
        let err = authorize_owner("jane-doe", Some("wrong")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }

    #[test]
    fn missing_identifier_is_unauthorized() {
        let err = authorize_owner("jane-doe", None).unwrap_err();
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }
}
