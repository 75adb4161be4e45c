//! Authenticated identity
//!
//! Produced only by token verification and attached to the request by the
//! access-control middleware. Downstream handlers trust it unconditionally.

use kernel::id::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}
