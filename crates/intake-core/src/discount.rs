//! # Coupon Pricing
//!
//! The coupon catalog and the discount calculator.
//!
//! ## Pricing Flow
//! ```text
//! calculate_discount(price, code)
//!      │
//!      ├── price < 0?        → Err(Invalid price)
//!      │
//!      ├── code in catalog?  → price - round(price × rate)
//!      │
//!      └── otherwise         → price unchanged (not an error)
//! ```

use std::sync::OnceLock;
use tracing::debug;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{Coupon, DiscountRate};

/// Codes and rates (in basis points) the catalog is built from.
const CATALOG_SEED: [(&str, u32); 2] = [("SAVE10", 1000), ("SAVE20", 2000)];

static CATALOG: OnceLock<Vec<Coupon>> = OnceLock::new();

/// Returns the fixed coupon catalog.
///
/// Built on first use and never modified afterwards.
///
/// ## Example
/// ```rust
/// use intake_core::discount::get_coupons;
///
/// let coupons = get_coupons();
/// assert!(!coupons.is_empty());
/// assert!(coupons.iter().all(|c| !c.code.is_empty()));
/// ```
pub fn get_coupons() -> &'static [Coupon] {
    CATALOG.get_or_init(|| {
        CATALOG_SEED
            .iter()
            .map(|&(code, bps)| Coupon::new(code, DiscountRate::from_bps(bps)))
            .collect()
    })
}

/// Looks up a coupon by exact, case-sensitive code.
pub fn find_coupon(code: &str) -> Option<&'static Coupon> {
    get_coupons().iter().find(|coupon| coupon.code == code)
}

/// Applies the coupon named `discount_code` to `price`.
///
/// Unknown codes leave the price untouched.
///
/// ## Example
/// ```rust
/// use intake_core::discount::calculate_discount;
/// use intake_core::money::Money;
///
/// let ten = Money::from_dollars(10);
/// assert_eq!(calculate_discount(ten, "SAVE10"), Ok(Money::from_dollars(9)));
/// assert_eq!(calculate_discount(ten, "NOPE"), Ok(ten));
/// assert!(calculate_discount(Money::from_dollars(-10), "SAVE10").is_err());
/// ```
pub fn calculate_discount(price: Money, discount_code: &str) -> ValidationResult<Money> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    match find_coupon(discount_code) {
        Some(coupon) => {
            let discounted = price.apply_discount(coupon.discount);
            debug!(code = %coupon.code, %price, %discounted, "Applied coupon");
            Ok(discounted)
        }
        None => {
            debug!(%discount_code, "Unknown coupon code, no discount applied");
            Ok(price)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
