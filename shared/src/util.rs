/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: per-process sequence starting at a random offset
///
/// Ids from one process only collide after 4096 calls within a single ms.
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    use std::sync::OnceLock;
    use std::sync::atomic::{AtomicI64, Ordering};

    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    static OFFSET: OnceLock<i64> = OnceLock::new();
    static SEQUENCE: AtomicI64 = AtomicI64::new(0);

    let offset = *OFFSET.get_or_init(|| rand::thread_rng().gen_range(0..0x1000));
    let seq = (offset + SEQUENCE.fetch_add(1, Ordering::Relaxed)) & 0xFFF; // 12 bits
    let ts = (now_millis() - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    (ts << 12) | seq
}

/// Comparison key for free-text locations and languages.
///
/// Trims, collapses inner whitespace, and lowercases, so `" New  Delhi"`
/// and `"new delhi"` match. Every location/language comparison in the
/// services goes through this one function.
pub fn match_key(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
