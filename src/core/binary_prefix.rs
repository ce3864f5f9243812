//! Axis helpers for byte quantities using IEC binary prefixes.
//!
//! Labels step through powers of 1024 (`B`, `KiB`, `MiB`, ...) and tick
//! positions are snapped to powers of two instead of powers of ten, so an
//! axis showing traffic reads `512 KiB, 1 MiB, 1.5 MiB` rather than
//! `500000, 1000000`.

use crate::config::locale::Locale;
use crate::core::number::{round_one_decimal, shortest};
use crate::core::ticks::TickRange;

const PREFIXES: [char; 8] = ['K', 'M', 'G', 'T', 'P', 'E', 'Z', 'Y'];
const MAX_TIER: i32 = PREFIXES.len() as i32;

pub const DEFAULT_TICK_COUNT: usize = 10;

/// Magnitude tier of `value`: 0 for bytes, 1 for KiB, 2 for MiB, ...
///
/// Values with an absolute magnitude of at most 1 are tier 0. Tiers above
/// YiB are clamped.
pub fn tier(value: f64) -> i32 {
    let magnitude = value.abs();
    if magnitude > 1.0 {
        // log2(|v|) / log2(1024) stays exact on powers of two
        ((magnitude.log2() / 10.0).floor() as i32).clamp(0, MAX_TIER)
    } else {
        0
    }
}

/// Unit label for a tier, `B` or `<prefix>iB`.
pub fn unit(tier: i32) -> String {
    match tier {
        t if t <= 0 => "B".to_string(),
        t => format!("{}iB", PREFIXES[(t.min(MAX_TIER) - 1) as usize]),
    }
}

fn tier_base(tier: i32) -> f64 {
    1024f64.powi(tier)
}

/// Formats `value` with one decimal of precision and a binary prefix.
///
/// ```
/// use pycroft_display::core::binary_prefix::format;
/// assert_eq!(format(1536.0), "1.5 KiB");
/// assert_eq!(format(-2048.0), "-2 KiB");
/// ```
pub fn format(value: f64) -> String {
    format_with_decimal(value, ".")
}

/// Same as [`format`], using the decimal separator of `locale`.
pub fn format_with(value: f64, locale: &Locale) -> String {
    format_with_decimal(value, &locale.decimal)
}

fn format_with_decimal(value: f64, decimal: &str) -> String {
    let tier = tier(value);
    let mantissa = round_one_decimal(value / tier_base(tier));
    format!("{} {}", shortest(mantissa, decimal), unit(tier))
}

/// Rounds `|value|` up to a whole unit of its own tier, keeping the sign.
///
/// `ceil(1025.0)` is `2048.0`; exact multiples are returned unchanged.
pub fn ceil(value: f64) -> f64 {
    let base = tier_base(tier(value));
    let signum = if value < 0.0 { -1.0 } else { 1.0 };
    signum * ((value.abs() / base).ceil() * base)
}

/// Tick positions for `domain`, spaced by a power of two.
///
/// The domain may be given in either order. The step is the largest power of
/// two not exceeding `span / count`, then coarsened by 8, 4 or 2 so that the
/// resulting number of ticks lands closer to `count` (default 10). Ticks lie
/// on multiples of the step inside the domain, both ends inclusive.
///
/// An empty span (or a non-finite domain) yields a single tick at the lower
/// bound.
pub fn tick_range(domain: [f64; 2], count: Option<usize>) -> TickRange {
    let count = count.unwrap_or(DEFAULT_TICK_COUNT).max(1) as f64;
    let [lower, upper] = extent(domain);
    let span = upper - lower;

    if !(span > 0.0 && span.is_finite()) {
        tracing::trace!(lower, upper, "degenerate binary tick domain");
        return TickRange::single(lower);
    }

    let mut step = 2f64.powf((span / count).log2().floor());
    let err = count / span * step;

    if err <= 0.20 {
        step *= 8.0;
    } else if err <= 0.35 {
        step *= 4.0;
    } else if err <= 0.75 {
        step *= 2.0;
    }

    let start = (lower / step).ceil() * step;
    let stop = (upper / step).floor() * step + step * 0.5;
    TickRange::new(start, stop, step)
}

/// `[min, max]` regardless of the order `domain` was given in.
pub(crate) fn extent(domain: [f64; 2]) -> [f64; 2] {
    let [a, b] = domain;
    if a < b {
        [a, b]
    } else {
        [b, a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tiers() {
        assert_eq!(format(0.0), "0 B");
        assert_eq!(format(1.0), "1 B");
        assert_eq!(format(0.25), "0.3 B");
        assert_eq!(format(1023.0), "1023 B");
        assert_eq!(format(1024.0), "1 KiB");
        assert_eq!(format(1536.0), "1.5 KiB");
        assert_eq!(format(1048576.0), "1 MiB");
        assert_eq!(format(3.0 * 1024f64.powi(3)), "3 GiB");
    }

    #[test]
    fn test_format_preserves_sign() {
        assert_eq!(format(-2048.0), "-2 KiB");
        assert_eq!(format(-1.0), "-1 B");
        assert_eq!(format(-0.01), "0 B");
    }

    #[test]
    fn test_format_rounding_can_reach_next_tier() {
        // stays in the KiB tier even though it rounds to 1024
        assert_eq!(format(1048575.0), "1024 KiB");
    }

    #[test]
    fn test_format_clamps_beyond_yobibytes() {
        let value = 2048.0 * 1024f64.powi(8);
        assert_eq!(format(value), "2048 YiB");
    }

    #[test]
    fn test_format_with_locale_decimal() {
        let locale = Locale::german();
        assert_eq!(format_with(1536.0, &locale), "1,5 KiB");
        assert_eq!(format_with(1024.0, &locale), "1 KiB");
    }

    #[test]
    fn test_ceil() {
        assert_eq!(ceil(1025.0), 2048.0);
        assert_eq!(ceil(1024.0), 1024.0);
        assert_eq!(ceil(-1025.0), -2048.0);
        assert_eq!(ceil(0.0), 0.0);
        assert_eq!(ceil(0.5), 1.0);
        assert_eq!(ceil(1000.0 * 1024.0), 1000.0 * 1024.0);
        assert_eq!(ceil(1500.0 * 1024.0), 2.0 * 1024.0 * 1024.0);
        assert_eq!(ceil(1048575.5), 1048576.0);
    }

    #[test]
    fn test_ceil_is_idempotent() {
        for x in [0.3, 1.0, 7.5, 1000.0, 1025.0, 5e6, 123456789.0, -33.3, -1e9] {
            let once = ceil(x);
            assert_eq!(ceil(once), once, "ceil not idempotent for {}", x);
            assert!(once.abs() >= x.abs());
        }
    }

    #[test]
    fn test_tick_range_power_of_two_step() {
        let range = tick_range([0.0, 10000.0], Some(10));
        assert_eq!(range.step(), 1024.0);
        let ticks = range.to_vec();
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&9216.0));
        assert_eq!(ticks.len(), 10);
    }

    #[test]
    fn test_tick_range_default_count() {
        assert_eq!(tick_range([0.0, 10000.0], None), tick_range([0.0, 10000.0], Some(10)));
    }

    #[test]
    fn test_tick_range_accepts_reversed_domain() {
        assert_eq!(tick_range([8192.0, 0.0], Some(8)), tick_range([0.0, 8192.0], Some(8)));
    }

    #[test]
    fn test_tick_range_coarsening_buckets() {
        // span / count = 1000: step 512, err 0.512 -> x2
        assert_eq!(tick_range([0.0, 5000.0], Some(5)).step(), 1024.0);
        // span / count = 1023: step 512, err ~0.5005 -> x2
        assert_eq!(tick_range([0.0, 1023.0], Some(1)).step(), 1024.0);
        // span / count = 1024: step 1024, err 1 -> unchanged
        assert_eq!(tick_range([0.0, 1024.0], Some(1)).step(), 1024.0);
        // span / count = 700: step 512, err ~0.73 -> x2
        assert_eq!(tick_range([0.0, 7000.0], Some(10)).step(), 1024.0);
        // span / count = 1800: step 1024, err ~0.57 -> x2
        assert_eq!(tick_range([0.0, 18000.0], Some(10)).step(), 2048.0);
        // span / count = 2000: step 1024, err 0.512 -> x2
        assert_eq!(tick_range([0.0, 4000.0], Some(2)).step(), 2048.0);
        // span / count = 1600: step 1024, err 0.64 -> x2
        assert_eq!(tick_range([0.0, 16000.0], Some(10)).step(), 2048.0);
    }

    #[test]
    fn test_tick_range_negative_domain() {
        let ticks = tick_range([-3000.0, 3000.0], Some(6)).to_vec();
        assert_eq!(ticks, vec![-2048.0, -1024.0, 0.0, 1024.0, 2048.0]);
    }

    #[test]
    fn test_tick_range_fractional_span() {
        let range = tick_range([0.0, 1.0], Some(4));
        assert_eq!(range.step(), 0.25);
        assert_eq!(range.to_vec(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_tick_range_degenerate_domain() {
        let range = tick_range([512.0, 512.0], Some(10));
        assert!(range.is_degenerate());
        assert_eq!(range.to_vec(), vec![512.0]);
    }

    #[test]
    fn test_tick_range_zero_count_behaves_like_one() {
        assert_eq!(tick_range([0.0, 4096.0], Some(0)), tick_range([0.0, 4096.0], Some(1)));
    }
}
