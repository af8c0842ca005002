#![macro_use]

/// Build a little-endian digit vector from digits written most significant first.
macro_rules! tst_mk_digits {
    ($($d:expr),* $(,)?) => {{
        extern crate alloc;
        let mut v: alloc::vec::Vec<$crate::DigitType> = alloc::vec![$($d),*];
        v.reverse();
        v
    }};
}
