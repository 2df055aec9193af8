//! Interactive allowlist and account resolution for channel setup.
//!
//! The heart is [`prompt_allow_from`]: an unbounded prompt → parse →
//! resolve → validate loop that only ever returns a fully-resolved
//! allowlist. Raw text flows through a splitter, then either a channel-local
//! parser or a token-gated directory lookup, and finally merges into the
//! existing allowlist.

pub mod account;
pub mod allow_from;
pub mod error;
pub mod prompt;

pub use {
    account::{choose_account_id, normalize_account_id, resolve_account_id},
    allow_from::{
        AllowFromPrompt, AllowFromSource, DirectoryResolver, ResolvedEntry, prompt_allow_from,
    },
    error::{Error, Result},
    prompt::{Prompter, TerminalPrompter, TextPrompt},
};
