//! Wiping of scratch buffers.
//!
//! With the `zeroize` feature enabled, [`Zeroizing`] is the [`zeroize::Zeroizing`] wrapper
//! clearing its contents on drop. Otherwise, it's a transparent stand-in with the same interface,
//! so that code can wrap scratch buffers unconditionally.

#[cfg(feature = "zeroize")]
pub use ::zeroize::Zeroizing;

#[cfg(not(feature = "zeroize"))]
mod fallback {
    use core::ops;

    pub struct Zeroizing<T>(T);

    impl<T> Zeroizing<T> {
        pub fn new(value: T) -> Self {
            Self(value)
        }
    }

    impl<T> From<T> for Zeroizing<T> {
        fn from(value: T) -> Self {
            Self::new(value)
        }
    }

    impl<T> ops::Deref for Zeroizing<T> {
        type Target = T;

        fn deref(&self) -> &Self::Target {
            &self.0
        }
    }

    impl<T> ops::DerefMut for Zeroizing<T> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.0
        }
    }
}

#[cfg(not(feature = "zeroize"))]
pub use fallback::Zeroizing;
