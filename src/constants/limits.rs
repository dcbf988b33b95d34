use std::time::Duration;

/// Upper bound on pages fetched for a single chat turn, across all candidate
/// categories.
pub const MAX_FETCHED_URLS: usize = 4;

/// Upper bound on generated candidates taken from each category (events,
/// professor directory) before the global cap applies.
pub const CANDIDATES_PER_CATEGORY: usize = 4;

/// Ceiling on cleaned page text kept per fetch.
pub const PAGE_TEXT_MAX_CHARS: usize = 8_000;

/// Per-request timeout for outbound page fetches.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Number of prior chat messages replayed to the model.
pub const HISTORY_WINDOW: usize = 10;

/// Soft ceiling on the assembled system prompt.
pub const PROMPT_CHAR_BUDGET: usize = 48_000;

pub const MODEL_TEMPERATURE: f32 = 0.7;
pub const MODEL_MAX_TOKENS: u32 = 1024;
