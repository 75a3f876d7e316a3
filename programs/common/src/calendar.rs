// common/calendar.rs

// external dependencies
use anchor_lang::prelude::*;
use solana_program::clock::UnixTimestamp;

// local dependencies
use crate::constants::SECONDS_PER_DAY;

/// UTC day index (days since the unix epoch) for a timestamp.
/// Daily counters compare these indices to detect a day rollover.
pub fn utc_day(ts: UnixTimestamp) -> u32 {
    // Timestamps before the epoch are clamped to day 0
    (ts.max(0) / SECONDS_PER_DAY) as u32
}

/// Current cluster time and the matching UTC day.
pub fn now() -> Result<(UnixTimestamp, u32)> {
    let ts = Clock::get()?.unix_timestamp;
    Ok((ts, utc_day(ts)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_boundaries() {
        assert_eq!(utc_day(0), 0);
        assert_eq!(utc_day(SECONDS_PER_DAY - 1), 0);
        assert_eq!(utc_day(SECONDS_PER_DAY), 1);
        // 2024-01-01T00:00:00Z
        assert_eq!(utc_day(1_704_067_200), 19_723);
        // 2024-01-01T23:59:59Z is still the same day
        assert_eq!(utc_day(1_704_153_599), 19_723);
    }

    #[test]
    fn negative_timestamps_clamp() {
        assert_eq!(utc_day(-5), 0);
    }
}
