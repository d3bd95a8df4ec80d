//! Raw path resolution.
//!
//! Every path handed to the engine goes through two expansion steps, always
//! in this order:
//!
//! 1. **Home expansion**: a leading `~` or `~user` becomes a home directory.
//! 2. **Variable expansion**: `$NAME` and `${NAME}` are substituted from the
//!    environment. Unknown names are left as written.
//!
//! Both steps are pure string rewriting behind the [`Expander`] trait. The
//! [`PathResolver`] drives them and produces a [`ResolvedPath`].
//!
//! # Examples
//!
//! ```
//! use filelisting::path::PathResolver;
//! use std::path::Path;
//!
//! let resolver = PathResolver::new();
//! let resolved = resolver.resolve("$FILELISTING_DOC_UNSET/logs");
//! assert_eq!(resolved.path(), Path::new("$FILELISTING_DOC_UNSET/logs"));
//! ```

pub mod expand;
pub mod resolver;
mod types;

pub use expand::{Expander, SystemExpander};
pub use resolver::PathResolver;
pub use types::ResolvedPath;
