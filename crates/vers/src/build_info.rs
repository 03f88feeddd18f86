use std::fmt::Display;

use serde::Serialize;

pub const UNKNOWN: &str = "unknown";

const SHORT_COMMIT_LEN: usize = 7;

/// Version and commit a binary was built from.
///
/// Empty fields mean the build did not supply a value. They are never an
/// error, use [`BuildInfo::version_or_unknown`] and friends when rendering.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Hash)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: &'static str,
}

impl BuildInfo {
    pub const EMPTY: BuildInfo = BuildInfo::new("", "");

    pub const fn new(version: &'static str, commit: &'static str) -> Self {
        BuildInfo { version, commit }
    }

    /// Builds from the result of two `option_env!` lookups.
    pub const fn from_env(version: Option<&'static str>, commit: Option<&'static str>) -> Self {
        let version = match version {
            Some(v) => v,
            None => "",
        };
        let commit = match commit {
            Some(c) => c,
            None => "",
        };
        BuildInfo { version, commit }
    }

    /// Like [`BuildInfo::from_env`], but a value with a line break counts as
    /// unset. The build script cannot forward such values either, so both
    /// capture paths agree.
    pub const fn from_build_env(
        version: Option<&'static str>,
        commit: Option<&'static str>,
    ) -> Self {
        BuildInfo::from_env(single_line(version), single_line(commit))
    }

    /// Values the build environment handed to this crate at compile time.
    pub const fn current() -> Self {
        BuildInfo::from_env(
            option_env!("VERS_BUILD_VERSION"),
            option_env!("VERS_BUILD_GITCOMMIT"),
        )
    }

    pub const fn has_version(&self) -> bool {
        !self.version.is_empty()
    }

    pub const fn has_commit(&self) -> bool {
        !self.commit.is_empty()
    }

    pub fn version_or_unknown(&self) -> &'static str {
        if self.has_version() {
            self.version
        } else {
            UNKNOWN
        }
    }

    pub fn commit_or_unknown(&self) -> &'static str {
        if self.has_commit() {
            self.commit
        } else {
            UNKNOWN
        }
    }

    /// First seven characters of the commit, the whole commit if shorter.
    pub fn short_commit(&self) -> &'static str {
        match self.commit.char_indices().nth(SHORT_COMMIT_LEN) {
            Some((end, _)) => &self.commit[..end],
            None => self.commit,
        }
    }
}

const fn single_line(value: Option<&'static str>) -> Option<&'static str> {
    let Some(s) = value else {
        return None;
    };
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\n' || bytes[i] == b'\r' {
            return None;
        }
        i += 1;
    }
    value
}

impl Display for BuildInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.version_or_unknown(), self.commit_or_unknown())
    }
}
