//! Internal utilities, not part of the API

pub(crate) mod casting;
pub(crate) mod complex;
pub(crate) mod linalg;
pub(crate) mod zseries;

// re-exported by crate root
#[doc(hidden)]
pub mod __testing;
