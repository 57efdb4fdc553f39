//! Per-space authorization check against a decoded AuthQuest token.

use crate::messages::AuthQuestJwt;

/// Whether the token grants access to `space_name`.
///
/// Scope names are compared case-insensitively. A token without scopes grants
/// nothing; a missing scope is a plain `false`, not an error.
pub fn authenticate_scope(token: &AuthQuestJwt, space_name: &str) -> bool {
    let wanted = space_name.to_lowercase();
    token.scopes.iter().any(|scope| scope.to_lowercase() == wanted)
}
