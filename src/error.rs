use thiserror::Error;

/// Errors reported by the fallible helpers of this crate.
///
/// The list and the reference counter never fail at runtime; misuse of them
/// is caught by debug assertions instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A hex string must have two digits per byte.
    #[error("hex string has odd length {0}")]
    HexLength(usize),

    /// A byte outside of `0-9a-fA-F` was found.
    #[error("invalid hex digit at offset {offset}")]
    InvalidHex { offset: usize },

    /// The output buffer cannot hold the result.
    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    /// A system call failed with the given `errno`.
    #[error("system call failed with errno {errno}")]
    Sys { errno: i32 },
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(all(feature = "std", target_os = "linux"))]
impl From<nix::errno::Errno> for Error {
    fn from(errno: nix::errno::Errno) -> Self {
        Error::Sys {
            errno: errno as i32,
        }
    }
}
