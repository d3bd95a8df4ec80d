//! Path resolution.
//!
//! This module provides the `PathResolver` type, which turns a raw
//! user-supplied path string into a [`ResolvedPath`].

use std::ffi::OsStr;
use std::path::PathBuf;

use crate::path::expand::{Expander, SystemExpander};
use crate::path::types::ResolvedPath;

/// Resolves raw path strings by expanding `~` and environment variables.
///
/// Home expansion is always applied first and variable expansion second, each
/// exactly once. A variable whose value contains `~` therefore keeps the `~`
/// literally, matching how a shell treats the same input.
///
/// Resolution never fails and never touches the filesystem.
///
/// # Examples
///
/// ```
/// use filelisting::path::PathResolver;
///
/// let resolver = PathResolver::new();
/// let resolved = resolver.resolve("/var/log");
/// assert_eq!(resolved.path(), std::path::Path::new("/var/log"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathResolver<E = SystemExpander> {
    expander: E,
}

impl PathResolver {
    /// Create a resolver backed by the real home directory and environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: Expander> PathResolver<E> {
    /// Create a resolver that delegates expansion to `expander`.
    ///
    /// # Examples
    ///
    /// ```
    /// use filelisting::path::{PathResolver, SystemExpander};
    ///
    /// let resolver = PathResolver::with_expander(SystemExpander);
    /// ```
    #[must_use]
    pub fn with_expander(expander: E) -> Self {
        Self { expander }
    }

    /// The expander this resolver delegates to.
    #[must_use]
    pub fn expander(&self) -> &E {
        &self.expander
    }

    /// Resolve one raw path.
    pub fn resolve(&self, raw: &str) -> ResolvedPath {
        let home_expanded = self.expander.expand_home(raw);
        let expanded = self.expander.expand_vars(&home_expanded);

        if expanded != raw {
            log::trace!("resolved {raw:?} to {expanded:?}");
        }

        ResolvedPath::new(PathBuf::from(expanded), raw)
    }

    /// Resolve one raw argument that may not be valid UTF-8.
    ///
    /// UTF-8 arguments go through [`resolve`](Self::resolve). Any other
    /// argument cannot hold a token the expanders understand as text, so it
    /// is kept byte for byte and the expander is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use filelisting::path::PathResolver;
    /// use std::ffi::OsStr;
    /// use std::path::Path;
    ///
    /// let resolved = PathResolver::new().resolve_os(OsStr::new("/var/log"));
    /// assert_eq!(resolved.path(), Path::new("/var/log"));
    /// ```
    pub fn resolve_os(&self, raw: &OsStr) -> ResolvedPath {
        if let Some(raw) = raw.to_str() {
            return self.resolve(raw);
        }

        log::debug!("{} is not valid UTF-8, using it verbatim", raw.to_string_lossy());
        ResolvedPath::new(PathBuf::from(raw), raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::expand::MockExpander;
    use mockall::Sequence;
    use std::path::Path;

    #[test]
    fn test_resolve_plain_path_unchanged() {
        let resolved = PathResolver::new().resolve("some/relative/dir");
        assert_eq!(resolved.path(), Path::new("some/relative/dir"));
        assert_eq!(resolved.original(), "some/relative/dir");
        assert!(!resolved.was_expanded());
    }

    #[test]
    fn test_home_expansion_runs_before_variable_expansion() {
        let mut mock = MockExpander::new();
        let mut seq = Sequence::new();

        mock.expect_expand_home()
            .withf(|p| p == "~/$SUB")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| "/home/u/$SUB".to_string());
        mock.expect_expand_vars()
            .withf(|p| p == "/home/u/$SUB")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| "/home/u/data".to_string());

        let resolved = PathResolver::with_expander(&mock).resolve("~/$SUB");
        assert_eq!(resolved.path(), Path::new("/home/u/data"));
        assert_eq!(resolved.original(), "~/$SUB");
    }

    #[test]
    fn test_variable_value_containing_tilde_is_kept() {
        let mut mock = MockExpander::new();
        mock.expect_expand_home()
            .times(1)
            .returning(str::to_string);
        mock.expect_expand_vars()
            .times(1)
            .returning(|p| p.replace("$D", "~/later"));

        let resolved = PathResolver::with_expander(mock).resolve("$D/x");
        assert_eq!(resolved.path(), Path::new("~/later/x"));
    }

    #[test]
    fn test_resolve_os_utf8_goes_through_expander() {
        let mut mock = MockExpander::new();
        mock.expect_expand_home()
            .withf(|p| p == "~/x")
            .times(1)
            .returning(|_| "/home/u/x".to_string());
        mock.expect_expand_vars()
            .times(1)
            .returning(str::to_string);

        let resolved = PathResolver::with_expander(&mock).resolve_os(OsStr::new("~/x"));
        assert_eq!(resolved.path(), Path::new("/home/u/x"));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_os_non_utf8_is_verbatim() {
        use std::os::unix::ffi::OsStrExt;

        let mut mock = MockExpander::new();
        mock.expect_expand_home().never();
        mock.expect_expand_vars().never();

        let raw = OsStr::from_bytes(b"~/caf\xe9/$HOME");
        let resolved = PathResolver::with_expander(&mock).resolve_os(raw);
        assert_eq!(resolved.path().as_os_str(), raw);
        assert_eq!(resolved.original(), raw);
        assert!(!resolved.was_expanded());
    }

    #[test]
    fn test_expander_accessor() {
        let resolver = PathResolver::with_expander(SystemExpander);
        assert_eq!(*resolver.expander(), SystemExpander);
    }

    #[cfg(all(unix, feature = "property-tests"))]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn path_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec("[a-zA-Z0-9_.-]{1,10}", 1..=5)
                .prop_map(|parts| format!("/{}", parts.join("/")))
        }

        proptest! {
            /// Paths without expansion tokens resolve to themselves.
            #[test]
            fn resolve_token_free_is_identity(s in path_strategy()) {
                let resolved = PathResolver::new().resolve(&s);
                prop_assert_eq!(resolved.path(), Path::new(&s));
            }

            /// Resolving an already-resolved path changes nothing.
            #[test]
            fn resolve_is_idempotent(s in path_strategy()) {
                let resolver = PathResolver::new();
                let once = resolver.resolve(&format!("~{s}")).into_path_buf();
                let Some(once_str) = once.to_str() else {
                    return Ok(());
                };
                let twice = resolver.resolve(once_str).into_path_buf();
                prop_assert_eq!(once, twice);
            }
        }
    }
}
