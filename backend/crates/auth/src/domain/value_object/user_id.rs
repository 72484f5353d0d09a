//! UserId Value Object
//!
//! Internal UUID identifier for users. Never exposed over HTTP;
//! external consumers see the nanoid `PublicId` instead.

use kernel::id::Id;

/// Marker type for user IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserMarker;

/// Type-safe user ID (UUID v4 internally)
pub type UserId = Id<UserMarker>;
