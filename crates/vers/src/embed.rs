use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::BuildInfo;

static INSTALLED: OnceCell<BuildInfo> = OnceCell::new();

// What this crate itself was compiled with.
static COMPILED: BuildInfo = BuildInfo::current();

/// Installs the metadata captured by `#[vers::main]`.
///
/// Only the first call has any effect, and only if nothing was read before
/// it. Returns whether this call was it.
#[doc(hidden)]
pub fn __install(info: BuildInfo) -> bool {
    let mut installed = false;
    let current = INSTALLED.get_or_init(|| {
        installed = true;
        info
    });

    if installed {
        debug!(version = info.version, commit = info.commit, "build info installed");
    } else if *current != info {
        warn!(
            installed = %current,
            ignored = %info,
            "build info already installed, ignoring"
        );
    }
    installed
}

/// The first read settles the value, an install after it is ignored.
pub fn build_info() -> &'static BuildInfo {
    INSTALLED.get_or_init(|| COMPILED)
}

/// The version identifier, `""` when the build supplied none.
pub fn version() -> &'static str {
    build_info().version
}

/// The commit identifier, `""` when the build supplied none.
pub fn commit() -> &'static str {
    build_info().commit
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing installs in the unit test process. Installs are covered
    // per-process under tests/.
    #[test]
    fn falls_back_to_compiled_values() {
        assert_eq!(build_info(), &BuildInfo::current());
        assert_eq!(version(), BuildInfo::current().version);
        assert_eq!(commit(), BuildInfo::current().commit);
    }

    #[test]
    fn install_after_read_is_ignored() {
        let before = *build_info();
        assert!(!__install(BuildInfo::new("1.4.2-late", "a1b2c3d")));
        assert_eq!(build_info(), &before);
    }

    #[test]
    fn repeated_reads_are_identical() {
        let first = version();
        for _ in 0..100 {
            assert!(std::ptr::eq(first, version()));
        }
    }
}
