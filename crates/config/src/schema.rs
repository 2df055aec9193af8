//! Typed view of the channel configuration tree.
//!
//! Maps the JSON shape `{ channels: { <name>: { allowFrom, dmPolicy,
//! accounts: { <id>: { allowFrom, ... } }, ... } } }`. Uses `#[serde(default)]`
//! liberally and flattened extra maps so fields this crate does not model
//! survive a patch round-trip.

use std::collections::BTreeMap;

use {
    corvid_channels::gating::DmPolicy,
    serde::{Deserialize, Serialize},
    serde_json::{Map, Value},
};

/// Account identifier meaning "the channel's primary/unnamed account".
///
/// Allowlists for this account live at the channel's top level rather than
/// under `accounts`.
pub const DEFAULT_ACCOUNT_ID: &str = "default";

/// Immutable configuration snapshot keyed by channel name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigSnapshot {
    pub channels: BTreeMap<String, ChannelConfig>,
}

/// One channel's configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// Channel-level allowlist. Legacy configs mix strings and numbers,
    /// so raw entries stay as JSON values until normalized.
    #[serde(rename = "allowFrom", skip_serializing_if = "Option::is_none")]
    pub allow_from: Option<Vec<Value>>,

    #[serde(rename = "dmPolicy", skip_serializing_if = "Option::is_none")]
    pub dm_policy: Option<DmPolicy>,

    /// Named accounts: `channels.<name>.accounts.<id>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounts: Option<BTreeMap<String, AccountConfig>>,

    /// Fields this crate does not model, preserved through patches.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One named account within a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    #[serde(rename = "allowFrom", skip_serializing_if = "Option::is_none")]
    pub allow_from: Option<Vec<Value>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
