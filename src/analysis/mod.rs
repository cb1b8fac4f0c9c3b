//! Lexical and temporal statistics over reassembled streams.
//!
//! Analysis runs after reassembly: each [`SenderStream`](crate::reassembly::SenderStream)
//! becomes a [`SenderAnalysis`], and the per-sender results merge into one
//! [`ChatAnalysis`].
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`tokenize`](mod@tokenize) | Word splitting and stopword filtering |
//! | [`histogram`] | Insertion-ordered word counts |
//! | [`calendar`] | 366-bucket day-of-year table |
//! | [`sender`] | Per-sender statistics |
//! | [`chat`] | Chat-wide statistics |

pub mod calendar;
pub mod chat;
pub mod histogram;
pub mod sender;
pub mod tokenize;

pub use calendar::{DAYS_IN_TABLE, DayHistogram, bucket_date, day_bucket};
pub use chat::{ChatAnalysis, Ranked};
pub use histogram::{WordCount, WordHistogram};
pub use sender::SenderAnalysis;
pub use tokenize::{filter_tokens, is_stopword, normalize_token, tokenize};

/// Rounds `value` half away from zero to `decimals` fractional digits.
///
/// ```rust
/// use chatstats::analysis::round_to;
///
/// assert_eq!(round_to(1.666_6, 2), 1.67);
/// assert_eq!(round_to(2.5, 0), 3.0);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert!((round_to(0.002_73, 3) - 0.003).abs() < 1e-12);
        assert!((round_to(0.002_73, 2)).abs() < f64::EPSILON);
        assert!((round_to(-1.005, 1) + 1.0).abs() < 1e-12);
    }
}
