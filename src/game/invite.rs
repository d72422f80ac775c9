//! Invite-link path handling.
//!
//! An invite is a URL path segment carrying the inviter's connection
//! identifier, percent-encoded: `/join/:<id>`. A path without the segment
//! means "act as the inviting player".

use uuid::Uuid;

/// Path prefix the client build routes invite links through.
pub const JOIN_PATH_PREFIX: &str = "/join/:";

/// Extract the target identifier from a URL path, percent-decoded.
///
/// Returns `None` when the path carries no invite segment, so the caller
/// takes the inviter role.
pub fn parse_join_path(path: &str) -> Option<String> {
    let target = path.strip_prefix(JOIN_PATH_PREFIX)?;
    match urlencoding::decode(target) {
        Ok(decoded) if !decoded.is_empty() => Some(decoded.into_owned()),
        _ => None,
    }
}

/// Build the invite path for this connection's identifier.
pub fn format_join_path(id: &Uuid) -> String {
    format!(
        "{}{}",
        JOIN_PATH_PREFIX,
        urlencoding::encode(&id.simple().to_string())
    )
}
