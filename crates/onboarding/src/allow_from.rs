//! The allowlist resolution loop.
//!
//! One round: prompt for a line, split it into candidate entries, run them
//! through the configured source, and either merge into the existing
//! allowlist or show a notice and try again. Rounds are all-or-nothing; a
//! round with any failing candidate is discarded wholesale.

use {serde_json::Value, tracing::debug};

use {
    async_trait::async_trait,
    corvid_config::allowlist::{merge_allow_from, normalize_entries, split_entries},
};

use crate::{
    error::Result,
    prompt::{Prompter, TextPrompt},
};

/// Outcome of resolving one typed entry against the directory.
#[derive(Debug, Clone, Default)]
pub struct ResolvedEntry {
    /// The text the user typed.
    pub input: String,
    pub resolved: bool,
    /// Stable identifier the directory mapped the input to.
    pub id: Option<String>,
}

impl ResolvedEntry {
    /// A result counts only when it resolved to a non-empty identifier.
    #[must_use]
    pub fn is_acceptable(&self) -> bool {
        self.resolved && self.id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

/// Token-authenticated lookup translating typed handles into stable ids.
///
/// Must return one result per input entry; order is not relied upon. May
/// perform network I/O and may fail.
#[async_trait]
pub trait DirectoryResolver: Send + Sync {
    async fn resolve(&self, token: &str, entries: &[String]) -> Result<Vec<ResolvedEntry>>;
}

/// How one round of candidates turns into identifiers.
///
/// Selected once per prompt by whether a directory token is configured.
pub enum AllowFromSource<'a> {
    /// No token: entries are validated by a channel-local parser.
    Local {
        /// Token → validated identifier, or `None` when invalid.
        parse_id: &'a (dyn Fn(&str) -> Option<String> + Send + Sync),
        /// Notice shown when any entry fails the local parser.
        invalid_note: &'a str,
    },
    /// Token present: entries go through the directory.
    Directory {
        token: &'a str,
        resolver: &'a dyn DirectoryResolver,
    },
}

impl AllowFromSource<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Self::Local { .. } => "local",
            Self::Directory { .. } => "directory",
        }
    }
}

type SplitFn<'a> = &'a (dyn Fn(&str) -> Vec<String> + Send + Sync);

/// Parameters for one allowlist prompt.
pub struct AllowFromPrompt<'a> {
    pub message: &'a str,
    pub placeholder: &'a str,
    /// Label used when reporting notices.
    pub label: &'a str,
    /// Allowlist already configured; the result merges into it.
    pub existing: &'a [Value],
    /// Custom entry splitter; defaults to [`split_entries`].
    pub split: Option<SplitFn<'a>>,
    pub source: AllowFromSource<'a>,
}

/// Prompt until a fully-resolved allowlist is obtained.
///
/// Every recoverable failure (local parse failure, resolver error, any
/// unacceptable directory result) shows a notice and discards the whole
/// round — nothing partial survives into the next one. There is no retry
/// bound; [`Error::Cancelled`](crate::Error::Cancelled) from the prompter
/// propagates out unchanged.
pub async fn prompt_allow_from(
    prompter: &dyn Prompter,
    params: AllowFromPrompt<'_>,
) -> Result<Vec<String>> {
    let initial = normalize_entries(params.existing, None).into_iter().next();
    let mut round = 0_u32;
    loop {
        round += 1;
        let mut prompt = TextPrompt::new(params.message).with_placeholder(params.placeholder);
        if let Some(initial) = initial.clone() {
            prompt = prompt.with_initial(initial);
        }
        let raw = prompter.text(prompt).await?;
        let candidates = match params.split {
            Some(split) => split(&raw),
            None => split_entries(&raw),
        };
        debug!(
            round,
            candidates = candidates.len(),
            source = params.source.kind(),
            "allowlist round"
        );

        match &params.source {
            AllowFromSource::Local {
                parse_id,
                invalid_note,
            } => {
                let parsed: Option<Vec<String>> =
                    candidates.iter().map(|entry| parse_id(entry)).collect();
                match parsed {
                    Some(ids) => return Ok(merge_allow_from(params.existing, &ids)),
                    None => prompter.note(invalid_note, params.label).await,
                }
            },
            AllowFromSource::Directory { token, resolver } => {
                match resolver.resolve(token, &candidates).await {
                    Err(_) => {
                        debug!(round, "directory resolution failed");
                        prompter
                            .note("Failed to resolve, try again.", params.label)
                            .await;
                    },
                    Ok(results) => {
                        let failed: Vec<&str> = results
                            .iter()
                            .filter(|result| !result.is_acceptable())
                            .map(|result| result.input.as_str())
                            .collect();
                        if failed.is_empty() {
                            let ids: Vec<String> =
                                results.iter().filter_map(|result| result.id.clone()).collect();
                            return Ok(merge_allow_from(params.existing, &ids));
                        }
                        prompter
                            .note(
                                &format!("Could not resolve: {}", failed.join(", ")),
                                params.label,
                            )
                            .await;
                    },
                }
            },
        }
    }
}
