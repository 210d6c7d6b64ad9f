//! kibitz: a screen-watching move advisor for Klondike Solitaire
//!
//! Captures the shared game screen, sends frames to a vision-capable model,
//! and keeps two suggestion buffers: the set on display and a silently
//! pre-fetched next set, so "next moves" is usually instantaneous.

pub mod advisor;
pub mod app;
pub mod capture;
pub mod config;
pub mod error;
pub mod session;
