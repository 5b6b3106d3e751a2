//! # Intro Helpers
//!
//! Small arithmetic helpers and a stand-in async data source.

use tracing::debug;

/// Returns the larger of `a` and `b`; ties return `b`.
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// `"FizzBuzz"` for multiples of 15, `"Fizz"` for 3, `"Buzz"` for 5,
/// otherwise the number itself.
pub fn fizz_buzz(n: i64) -> String {
    match (n % 3 == 0, n % 5 == 0) {
        (true, true) => "FizzBuzz".to_string(),
        (true, false) => "Fizz".to_string(),
        (false, true) => "Buzz".to_string(),
        (false, false) => n.to_string(),
    }
}

/// Arithmetic mean, or `None` for an empty slice.
pub fn calculate_average(numbers: &[f64]) -> Option<f64> {
    if numbers.is_empty() {
        return None;
    }

    Some(numbers.iter().sum::<f64>() / numbers.len() as f64)
}

/// `n!`, or `None` when `n` is negative or the result overflows `u128`.
///
/// ## Example
/// ```rust
/// use intake_core::intro::factorial;
///
/// assert_eq!(factorial(4), Some(24));
/// assert_eq!(factorial(-1), None);
/// ```
pub fn factorial(n: i64) -> Option<u128> {
    if n < 0 {
        return None;
    }

    (1..=n as u128).try_fold(1u128, |acc, k| acc.checked_mul(k))
}

/// Stand-in for a remote fetch; resolves to a fixed list of numbers.
pub async fn fetch_data() -> Vec<i64> {
    let data = vec![1, 2, 3];
    debug!(len = data.len(), "Fetched data");
    data
}

// =============================================================================
// Unit Tests
// =============================================================================
