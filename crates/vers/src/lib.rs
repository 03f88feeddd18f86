//! Version and commit identity of the running binary.
//!
//! Both values come from the build environment (`VERS_VERSION`,
//! `VERS_GITCOMMIT`) and default to `""` when it supplies none.
//! `#[vers::main]` captures them in the application crate instead.
mod build_info;

#[doc(hidden)]
pub mod embed;

pub use build_info::{BuildInfo, UNKNOWN};
pub use embed::{build_info, commit, version};

#[doc(hidden)]
pub use embed::__install;

pub use vers_macros::*;
