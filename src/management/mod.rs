//! High-level orchestration on top of the Spotify client layer.
//!
//! - [`playlists`] - follows cursor pagination to completion and annotates
//!   each playlist with its editability for the current user.
//! - [`delete`] - fans out unfollow and batched track-removal calls,
//!   collecting partial failures into an itemized report.

pub mod delete;
pub mod playlists;
