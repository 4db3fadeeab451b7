//! Domain-level constants.
//!
//! These constants mirror the column widths of the `users` table and the
//! validation rules applied to incoming user data.

// =============================================================================
// Column limits
// =============================================================================

/// Maximum username length (VARCHAR(100))
pub const MAX_USERNAME_LENGTH: u64 = 100;

/// Minimum username length
pub const MIN_USERNAME_LENGTH: u64 = 1;

/// Maximum email length (VARCHAR(100))
pub const MAX_EMAIL_LENGTH: u64 = 100;

/// Maximum profile picture URL/path length (VARCHAR(255))
pub const MAX_PROFILE_PICTURE_LENGTH: u64 = 255;

// =============================================================================
// Passwords
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum accepted plain-text password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;
