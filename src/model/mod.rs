//! # World Model
//!
//! Plain DTOs shared by every stage: the raw document shape as it is read
//! from disk, and the normalized `Room` / `Exit` records the catalog holds.
//!
//! This module is pure data: no I/O, no state.

pub mod room;
pub mod exit;
pub mod document;

pub use room::{Room, RoomId, UNKNOWN};
pub use exit::{Exit, ExitDetail};
pub use document::{WorldDocument, District, Location, RoomRecord, ExitRecord};
