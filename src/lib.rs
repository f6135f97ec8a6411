//! # flagslice
//!
//! Repeatable string flags. A flag declared through this crate may be given
//! any number of times on the command line and every occurrence is appended
//! to an ordered list, instead of the last one overwriting the rest.
//!
//! ```
//! use flagslice::{slice, ErrorHandling, FlagSet};
//!
//! let mut flags = FlagSet::new("demo", ErrorHandling::Continue);
//! let names = slice::string_fs(&mut flags, "s", Some(&["default"][..]), "names to greet")
//!     .expect("could not declare -s");
//!
//! flags.parse(["-s", "bar", "-s", "tridge", "-s=baaz"]).expect("bad arguments");
//! assert_eq!(names.values(), vec!["bar", "tridge", "baaz"]);
//! ```
//!
//! The caller-supplied default is only a seed: the first occurrence on the
//! command line throws it away.
pub use flag::{ErrorHandling, Flag, FlagSet, Value};
pub use slice::{StringSlice, Strings};

pub mod command_line;
pub mod error;
pub mod flag;
pub mod slice;
