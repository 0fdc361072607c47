//! Bounds used when validating the configuration.

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 16;
pub const MIN_TICK_INTERVAL_MS: u64 = 1;
pub const MAX_TICK_INTERVAL_MS: u64 = 250;

/// Reveal durations outside this window read as either a flash or a stall.
pub const MIN_REVEAL_DURATION_MS: u64 = 600;
pub const MAX_REVEAL_DURATION_MS: u64 = 1000;

pub const MIN_CONTACT_TIMEOUT_SECS: u64 = 1;
pub const MAX_CONTACT_TIMEOUT_SECS: u64 = 120;
