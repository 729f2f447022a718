pub(crate) mod meta;

#[cfg(any(feature = "github", feature = "notion"))]
pub(crate) mod shared;

#[cfg(feature = "github")]
pub(crate) mod export;

#[cfg(feature = "notion")]
pub(crate) mod import;

#[cfg(all(feature = "github", feature = "notion"))]
pub(crate) mod sync;
