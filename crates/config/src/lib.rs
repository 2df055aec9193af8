//! Channel configuration snapshot and pure patch helpers.
//!
//! The snapshot mirrors the channel section of the on-disk config:
//! `channels.<name>` with an optional per-account map underneath. Patchers
//! never mutate their input; each returns a fresh snapshot, so concurrent
//! callers can work on independent copies without locking.

pub mod allowlist;
pub mod patch;
pub mod schema;

pub use {
    allowlist::{merge_allow_from, normalize_entries, split_entries},
    patch::{set_account_allow_from, set_channel_dm_policy},
    schema::{AccountConfig, ChannelConfig, ConfigSnapshot, DEFAULT_ACCOUNT_ID},
};
