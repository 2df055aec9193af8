//! Channel access gating.
//!
//! DM policies and allowlist enforcement shared by every channel
//! (Telegram, Signal, iMessage, ...). The onboarding wizard produces the
//! allowlists; this crate decides whether an inbound sender passes them.

pub mod gating;

pub use gating::{DmPolicy, WILDCARD, is_sender_allowed};
