use serde::{Deserialize, Serialize};
use tracing::warn;

/// Allowlist entry meaning "allow any sender".
///
/// Exempt from normalization everywhere: the wizard passes it through
/// unchanged and gating short-circuits on it.
pub const WILDCARD: &str = "*";

/// DM access policy for a channel account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DmPolicy {
    /// Anyone can DM the bot.
    Open,
    /// Unknown senders go through a pairing exchange; allowlisted senders
    /// pass directly.
    #[default]
    Pairing,
    /// Only senders on the allowlist.
    Allowlist,
    /// DMs disabled.
    Disabled,
}

/// Check whether a sender may DM this account under the given policy.
///
/// A wildcard entry in the allowlist admits everyone; other entries are
/// matched case-insensitively against the sender ID.
pub fn is_sender_allowed(policy: &DmPolicy, allow_from: &[String], sender: &str) -> bool {
    match policy {
        DmPolicy::Disabled => {
            warn!(%sender, "DM blocked: policy is disabled");
            false
        },
        DmPolicy::Open => true,
        DmPolicy::Pairing | DmPolicy::Allowlist => {
            if allow_from.iter().any(|entry| entry == WILDCARD) {
                return true;
            }
            let sender_lower = sender.to_lowercase();
            let allowed = allow_from
                .iter()
                .any(|entry| entry.trim().to_lowercase() == sender_lower);
            if !allowed {
                warn!(%sender, "DM blocked: sender not in allowlist");
            }
            allowed
        },
    }
}
