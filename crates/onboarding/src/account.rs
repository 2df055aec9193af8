//! Account identifier resolution for config actions.

use corvid_config::ConfigSnapshot;

use crate::{
    error::Result,
    prompt::{Prompter, TextPrompt},
};

/// Channel-agnostic account id normalization: trim plus ASCII lowercase.
#[must_use]
pub fn normalize_account_id(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Pick the effective account id without prompting.
///
/// A present, non-blank explicit value wins (normalized); otherwise the
/// default is returned unchanged.
#[must_use]
pub fn resolve_account_id(explicit: Option<&str>, default_id: &str) -> String {
    match explicit {
        Some(value) if !value.trim().is_empty() => normalize_account_id(value),
        _ => default_id.to_string(),
    }
}

/// Pick the effective account id, prompting when permitted.
///
/// An explicit override always wins, even when prompting is allowed. With no
/// override and prompting permitted, the prompter is asked — current default
/// as the initial value, known accounts as suggestions. Otherwise the
/// default is used as-is. Fails only by propagation from the prompter.
pub async fn choose_account_id(
    prompter: &dyn Prompter,
    snapshot: &ConfigSnapshot,
    label: &str,
    explicit: Option<&str>,
    allow_prompt: bool,
    list_accounts: &(dyn Fn(&ConfigSnapshot) -> Vec<String> + Send + Sync),
    default_id: &str,
) -> Result<String> {
    if let Some(value) = explicit
        && !value.trim().is_empty()
    {
        return Ok(normalize_account_id(value));
    }
    if !allow_prompt {
        return Ok(default_id.to_string());
    }
    let answer = prompter
        .text(
            TextPrompt::new(format!("{label} account id"))
                .with_initial(default_id)
                .with_suggestions(list_accounts(snapshot)),
        )
        .await?;
    Ok(normalize_account_id(&answer))
}
