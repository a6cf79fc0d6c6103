//! Build metadata shown by `vmxtool version`

use std::fmt;

/// Version details fixed at compile time.
///
/// `VMXTOOL_BUILD_DATE` and `VMXTOOL_COMMIT` are read from the build
/// environment; both fall back to `unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_date: &'static str,
    pub commit: &'static str,
}

impl BuildInfo {
    pub const fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            build_date: match option_env!("VMXTOOL_BUILD_DATE") {
                Some(date) => date,
                None => "unknown",
            },
            commit: match option_env!("VMXTOOL_COMMIT") {
                Some(commit) => commit,
                None => "unknown",
            },
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "vmxtool version {}", self.version)?;
        writeln!(f, "Build date: {}", self.build_date)?;
        write!(f, "Commit: {}", self.commit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_all_fields() {
        let info = BuildInfo {
            version: "1.2.3",
            build_date: "2025-01-01",
            commit: "abc1234",
        };
        assert_eq!(
            info.to_string(),
            "vmxtool version 1.2.3\nBuild date: 2025-01-01\nCommit: abc1234"
        );
    }

    #[test]
    fn test_current_uses_package_version() {
        assert_eq!(BuildInfo::current().version, env!("CARGO_PKG_VERSION"));
    }
}
