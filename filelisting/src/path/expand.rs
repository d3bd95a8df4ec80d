//! Home-directory and environment-variable expansion.
//!
//! Expansion is pure string rewriting: nothing here touches the filesystem,
//! and nothing here fails. Input that cannot be expanded (an unknown user, an
//! unknown variable, an undeterminable home directory) is passed through
//! literally.
//!
//! The [`Expander`] trait is the seam the resolver depends on, so tests can
//! observe exactly which expansions were requested and in which order.

use std::env;
use std::path::{is_separator, Path, PathBuf};
use std::sync::OnceLock;

use regex::{Captures, Regex};

/// The two expansion steps applied to every raw path.
#[cfg_attr(test, mockall::automock)]
pub trait Expander {
    /// Replace a leading `~` or `~user` with the matching home directory.
    fn expand_home(&self, path: &str) -> String;

    /// Substitute `$NAME` and `${NAME}` references with their values.
    fn expand_vars(&self, path: &str) -> String;
}

impl<T: Expander + ?Sized> Expander for &T {
    fn expand_home(&self, path: &str) -> String {
        (**self).expand_home(path)
    }

    fn expand_vars(&self, path: &str) -> String {
        (**self).expand_vars(path)
    }
}

/// Expander backed by the current user's home directory, the user database
/// and the process environment.
///
/// # Examples
///
/// ```
/// use filelisting::path::{Expander, SystemExpander};
///
/// let expander = SystemExpander;
/// assert_eq!(expander.expand_home("/absolute"), "/absolute");
/// assert_eq!(
///     expander.expand_vars("$FILELISTING_SURELY_UNSET/x"),
///     "$FILELISTING_SURELY_UNSET/x"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemExpander;

impl Expander for SystemExpander {
    fn expand_home(&self, path: &str) -> String {
        if !path.starts_with('~') {
            return path.to_string();
        }
        expand_tilde_with(path, home::home_dir().as_deref(), user_home)
    }

    fn expand_vars(&self, path: &str) -> String {
        expand_vars_with(path, |name| env::var(name).ok())
    }
}

/// Home directory of `user` from the system user database.
#[cfg(unix)]
fn user_home(user: &str) -> Option<PathBuf> {
    match nix::unistd::User::from_name(user) {
        Ok(found) => found.map(|u| u.dir),
        Err(e) => {
            log::debug!("user lookup for {user:?} failed: {e}");
            None
        }
    }
}

/// Home directory of `user`, assumed to sit next to the current user's home.
#[cfg(not(unix))]
fn user_home(user: &str) -> Option<PathBuf> {
    let home = home::home_dir()?;
    if home.file_name() == Some(std::ffi::OsStr::new(user)) {
        return Some(home);
    }
    home.parent().map(|root| root.join(user))
}

/// Expand a leading `~` token.
///
/// - `~` and `~/rest` use `home`.
/// - `~user` and `~user/rest` use whatever `user_home` returns for `user`.
///
/// Paths without a leading `~` are returned unchanged, as are paths whose
/// home directory is unknown (`home` is `None`, or `user_home` returns
/// `None`) or not valid UTF-8.
///
/// # Examples
///
/// ```
/// use filelisting::path::expand::expand_tilde_with;
/// use std::path::{Path, PathBuf};
///
/// let home = Path::new("/home/alice");
/// let users = |name: &str| (name == "bob").then(|| PathBuf::from("/srv/bob"));
///
/// assert_eq!(expand_tilde_with("~", Some(home), users), "/home/alice");
/// assert_eq!(expand_tilde_with("~/notes", Some(home), users), "/home/alice/notes");
/// assert_eq!(expand_tilde_with("~bob/src", Some(home), users), "/srv/bob/src");
/// assert_eq!(expand_tilde_with("~carol/src", Some(home), users), "~carol/src");
/// assert_eq!(expand_tilde_with("~/notes", None, users), "~/notes");
/// ```
#[must_use]
pub fn expand_tilde_with<F>(path: &str, home: Option<&Path>, user_home: F) -> String
where
    F: FnOnce(&str) -> Option<PathBuf>,
{
    let Some(rest) = path.strip_prefix('~') else {
        return path.to_string();
    };

    let (user, tail) = match rest.find(is_separator) {
        Some(idx) => rest.split_at(idx),
        None => (rest, ""),
    };

    let found = if user.is_empty() {
        home.map(Path::to_path_buf)
    } else {
        user_home(user)
    };

    let Some(found) = found else {
        return path.to_string();
    };
    let Some(found) = found.to_str() else {
        return path.to_string();
    };

    let joined = format!("{}{tail}", found.trim_end_matches(is_separator));
    if joined.is_empty() {
        // home was the filesystem root
        std::path::MAIN_SEPARATOR.to_string()
    } else {
        joined
    }
}

/// `$NAME` (word characters) or `${NAME}` (anything but `}`).
fn var_token() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| {
        Regex::new(r"\$(\w+|\{[^}]*\})").expect("variable token regex should compile")
    })
}

/// Substitute `$NAME` and `${NAME}` references using `lookup`.
///
/// Names for which `lookup` returns `None` are left in place verbatim, and so
/// is anything that is not a well-formed reference (`$`, `$$`, `${` without a
/// closing brace). Substituted values are not scanned again.
///
/// # Examples
///
/// ```
/// use filelisting::path::expand::expand_vars_with;
///
/// let lookup = |name: &str| (name == "ROOT").then(|| "/srv".to_string());
/// assert_eq!(expand_vars_with("$ROOT/www", lookup), "/srv/www");
/// assert_eq!(expand_vars_with("${ROOT}/www/$MISSING", lookup), "/srv/www/$MISSING");
/// assert_eq!(expand_vars_with("cost$$", lookup), "cost$$");
/// ```
pub fn expand_vars_with<F>(path: &str, mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    var_token()
        .replace_all(path, |caps: &Captures<'_>| {
            let token = &caps[1];
            let name = token
                .strip_prefix('{')
                .and_then(|inner| inner.strip_suffix('}'))
                .unwrap_or(token);
            lookup(name).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
