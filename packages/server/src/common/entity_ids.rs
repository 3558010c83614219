//! Typed ID definitions for all domain entities.
//!
//! This module defines type aliases for each domain entity, providing
//! compile-time type safety for ID usage throughout the application.

// Re-export the core Id type and version markers
pub use super::id::{Id, V4, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Member entities (teachers and students).
pub struct Member;

/// Marker type for Room entities (classroom chat sessions).
pub struct Room;

/// Marker type for Message entities (chat contributions).
pub struct Message;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Member entities.
pub type MemberId = Id<Member>;

/// Typed ID for Room entities.
pub type RoomId = Id<Room>;

/// Typed ID for Message entities.
pub type MessageId = Id<Message>;
