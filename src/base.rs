//! Radix configuration for [`LongInt`](crate::LongInt).
//!
//! The radix a [`LongInt`](crate::LongInt) stores its digits in is fixed at the type level by a
//! marker type implementing [`Base`]. Additional radices may be declared with
//! [`define_base!`](crate::define_base).

use core::fmt::Debug;
use core::hash::Hash;

use super::digit::{DigitType, MAX_BASE};

/// Marker trait fixing the radix of a multiprecision integer's digits.
pub trait Base: Copy + Clone + Debug + Default + PartialEq + Eq + Hash + Send + Sync + 'static {
    /// The radix, `2 <= BASE <= 2^31`.
    const BASE: DigitType;
}

/// Check a radix for being within the range supported by the digit arithmetic.
pub const fn is_valid_base(base: DigitType) -> bool {
    base >= 2 && base <= MAX_BASE
}

/// Declare a marker type for a radix.
///
/// The radix gets checked at compile time.
///
/// ```
/// radixint::define_base!(Base7, 7);
/// let a = radixint::LongInt::<Base7>::from(50u32);
/// assert_eq!(a.digits(), &[1, 0, 1]);
/// ```
#[macro_export]
macro_rules! define_base {
    ($(#[$attr:meta])* $name:ident, $base:expr) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl $crate::Base for $name {
            const BASE: $crate::DigitType = {
                assert!($crate::is_valid_base($base), "radix out of range");
                $base
            };
        }
    };
}

define_base!(
    /// Radix 2.
    Base2,
    2
);
define_base!(
    /// Radix 10, mostly useful for readability.
    Base10,
    10
);
define_base!(
    /// Radix 100, a perfect square.
    Base100,
    100
);
define_base!(
    /// Radix 10^4, a perfect square.
    Base10000,
    10_000
);
define_base!(
    /// Radix 10^9, the largest power of ten within the supported range.
    Base10Pow9,
    1_000_000_000
);
define_base!(
    /// Radix 2^16, a perfect square and a power of two.
    Base2Pow16,
    1 << 16
);
define_base!(
    /// Radix 2^31, the largest supported radix.
    Base2Pow31,
    1 << 31
);

#[test]
fn test_is_valid_base() {
    assert!(!is_valid_base(0));
    assert!(!is_valid_base(1));
    assert!(is_valid_base(2));
    assert!(is_valid_base(MAX_BASE));
    assert!(!is_valid_base(MAX_BASE + 1));
}

#[test]
fn test_predefined_bases() {
    assert_eq!(Base10::BASE, 10);
    assert_eq!(Base10Pow9::BASE, 1_000_000_000);
    assert_eq!(Base2Pow31::BASE, MAX_BASE);
}
