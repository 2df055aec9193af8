//! Pure patch helpers over [`ConfigSnapshot`].
//!
//! Every function clones the snapshot and returns a new one. Sibling
//! channels, sibling accounts, and unmodeled fields carry over unchanged.

use {
    corvid_channels::gating::{DmPolicy, WILDCARD},
    serde_json::Value,
};

use crate::{
    allowlist::merge_allow_from,
    schema::{ConfigSnapshot, DEFAULT_ACCOUNT_ID},
};

/// Write a resolved allowlist for one account of a channel.
///
/// The default account writes at the channel's top level; any other account
/// writes under `accounts.<id>`. Contents are not validated here — the
/// resolution loop only hands over fully-resolved lists.
pub fn set_account_allow_from(
    snapshot: &ConfigSnapshot,
    channel: &str,
    account_id: &str,
    allow_from: &[String],
) -> ConfigSnapshot {
    let mut next = snapshot.clone();
    let entry = next.channels.entry(channel.to_string()).or_default();
    let values: Vec<Value> = allow_from.iter().cloned().map(Value::String).collect();
    if account_id == DEFAULT_ACCOUNT_ID {
        entry.allow_from = Some(values);
    } else {
        entry
            .accounts
            .get_or_insert_default()
            .entry(account_id.to_string())
            .or_default()
            .allow_from = Some(values);
    }
    next
}

/// Set a channel's DM policy.
///
/// Switching to [`DmPolicy::Open`] unions the wildcard into the channel's
/// top-level allowlist. Every other policy leaves the allowlist alone,
/// including switching away from open — wildcards already present are kept.
pub fn set_channel_dm_policy(
    snapshot: &ConfigSnapshot,
    channel: &str,
    policy: DmPolicy,
) -> ConfigSnapshot {
    let mut next = snapshot.clone();
    let entry = next.channels.entry(channel.to_string()).or_default();
    if policy == DmPolicy::Open {
        let existing = entry.allow_from.take().unwrap_or_default();
        let merged = merge_allow_from(&existing, &[WILDCARD.to_string()]);
        entry.allow_from = Some(merged.into_iter().map(Value::String).collect());
    }
    entry.dm_policy = Some(policy);
    next
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use {super::*, serde_json::json};

    fn snapshot_with(value: Value) -> ConfigSnapshot {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn default_account_writes_top_level() {
        let original = snapshot_with(json!({
            "channels": {
                "imessage": {
                    "dmPolicy": "pairing",
                    "accounts": { "work": { "allowFrom": ["keep-me"] } }
                }
            }
        }));

        let patched = set_account_allow_from(&original, "imessage", DEFAULT_ACCOUNT_ID, &[
            "+15551234".to_string(),
        ]);

        let channel = &patched.channels["imessage"];
        assert_eq!(channel.allow_from, Some(vec![json!("+15551234")]));
        // nested accounts untouched
        assert_eq!(
            channel.accounts.as_ref().unwrap()["work"].allow_from,
            Some(vec![json!("keep-me")])
        );
        // input snapshot not mutated
        assert!(original.channels["imessage"].allow_from.is_none());
    }

    #[test]
    fn named_account_writes_nested_only() {
        let original = snapshot_with(json!({
            "channels": {
                "imessage": {
                    "allowFrom": ["top"],
                    "accounts": {
                        "work": { "allowFrom": ["w"], "region": "us" },
                        "home": { "allowFrom": ["h"] }
                    }
                }
            }
        }));

        let patched =
            set_account_allow_from(&original, "imessage", "work", &["alice".to_string()]);

        let channel = &patched.channels["imessage"];
        assert_eq!(channel.allow_from, Some(vec![json!("top")]));
        let accounts = channel.accounts.as_ref().unwrap();
        assert_eq!(accounts["work"].allow_from, Some(vec![json!("alice")]));
        assert_eq!(accounts["work"].extra["region"], json!("us"));
        assert_eq!(accounts["home"].allow_from, Some(vec![json!("h")]));
    }

    #[test]
    fn named_account_creates_accounts_map() {
        let patched = set_account_allow_from(
            &ConfigSnapshot::default(),
            "signal",
            "personal",
            &["+1555".to_string()],
        );
        let accounts = patched.channels["signal"].accounts.as_ref().unwrap();
        assert_eq!(accounts["personal"].allow_from, Some(vec![json!("+1555")]));
        assert!(patched.channels["signal"].allow_from.is_none());
    }

    #[test]
    fn open_policy_unions_wildcard() {
        let original = snapshot_with(json!({
            "channels": { "signal": { "allowFrom": ["+1555"] } }
        }));

        let patched = set_channel_dm_policy(&original, "signal", DmPolicy::Open);

        let channel = &patched.channels["signal"];
        assert_eq!(channel.dm_policy, Some(DmPolicy::Open));
        assert_eq!(
            channel.allow_from,
            Some(vec![json!("+1555"), json!("*")])
        );
    }

    #[test]
    fn open_policy_does_not_duplicate_wildcard() {
        let original = snapshot_with(json!({
            "channels": { "signal": { "allowFrom": ["*", "+1555"] } }
        }));
        let patched = set_channel_dm_policy(&original, "signal", DmPolicy::Open);
        assert_eq!(
            patched.channels["signal"].allow_from,
            Some(vec![json!("*"), json!("+1555")])
        );
    }

    #[test]
    fn non_open_policy_leaves_allow_from_alone() {
        let original = snapshot_with(json!({
            "channels": { "signal": { "allowFrom": ["+1555"], "dmPolicy": "open" } }
        }));

        let patched = set_channel_dm_policy(&original, "signal", DmPolicy::Pairing);

        let channel = &patched.channels["signal"];
        assert_eq!(channel.dm_policy, Some(DmPolicy::Pairing));
        assert_eq!(channel.allow_from, Some(vec![json!("+1555")]));
    }

    #[test]
    fn sibling_channels_and_extras_preserved() {
        let original = snapshot_with(json!({
            "channels": {
                "signal": { "allowFrom": ["+1555"], "phoneNumber": "+1999" },
                "telegram": { "allowFrom": [111] }
            }
        }));

        let patched = set_channel_dm_policy(&original, "signal", DmPolicy::Allowlist);

        assert_eq!(patched.channels["telegram"], original.channels["telegram"]);
        assert_eq!(
            patched.channels["signal"].extra["phoneNumber"],
            json!("+1999")
        );
    }
}
