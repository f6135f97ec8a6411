//! Repeatable string flags.
//!
//! Declare a flag `-s` which may be given any number of times:
//!
//! ```
//! use flagslice::{slice, ErrorHandling, FlagSet, Strings};
//!
//! let mut flags = FlagSet::new("demo", ErrorHandling::Continue);
//! let ss = slice::string_fs(&mut flags, "s", None, "A repeatable string flag")
//!     .expect("could not declare -s");
//!
//! // or with storage the caller already owns, and a default
//! let tt = Strings::new();
//! slice::string_var_fs(&mut flags, &tt, "t", Some(&["foo", "bar"][..]), "With a default")
//!     .expect("could not declare -t");
//!
//! flags.parse(["-s", "bar", "-s", "tridge", "-s", "baaz"]).expect("bad arguments");
//! assert_eq!(ss.values(), vec!["bar", "tridge", "baaz"]);
//! assert_eq!(tt.values(), vec!["foo", "bar"]);
//! ```
use crate::error::Result;
use crate::flag::{FlagSet, Value};
use std::error::Error;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared handle to the list a repeatable flag fills in. Clones point at the
/// same list, so the caller keeps one and reads it once parsing is done.
#[derive(Clone, Debug, Default)]
pub struct Strings(Arc<Mutex<Vec<String>>>);

impl Strings {
    pub fn new() -> Strings {
        Strings::default()
    }

    /// Copy of the current contents
    pub fn values(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // a panic while the lock was held can't leave a Vec<String> half written
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Vec<String>> for Strings {
    fn from(values: Vec<String>) -> Strings {
        Strings(Arc::new(Mutex::new(values)))
    }
}

impl PartialEq for Strings {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.0, &other.0) {
            return true;
        }
        // never hold both locks, or a == b and b == a on two threads deadlock
        let mine = self.values();
        mine == *other.lock()
    }
}

impl Eq for Strings {}

/// The Value behind a repeatable string flag. Each occurrence is appended to
/// the target list. The first occurrence also clears whatever default the
/// list was seeded with.
#[derive(Debug)]
pub struct StringSlice {
    target: Strings,
    /// true once the default has been thrown away; never goes back to false
    replaced: Mutex<bool>,
}

impl StringSlice {
    pub fn new(target: Strings) -> StringSlice {
        StringSlice {
            target,
            replaced: Mutex::new(false),
        }
    }

    pub fn target(&self) -> &Strings {
        &self.target
    }
}

impl fmt::Display for StringSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.target.lock();
        if values.is_empty() {
            return Ok(());
        }
        write!(f, "{:?}", *values)
    }
}

impl Value for StringSlice {
    fn set(&self, value: &str) -> std::result::Result<(), Box<dyn Error>> {
        // held across clear and push so only one caller ever clears
        let mut replaced = self.replaced.lock().unwrap_or_else(PoisonError::into_inner);
        let mut values = self.target.lock();

        if !*replaced {
            values.clear();
            *replaced = true;
        }
        values.push(value.to_owned());

        Ok(())
    }
}

/// Declare a repeatable string flag on `flags` and return the list it will
/// fill in. The list starts out holding `default`, which is left untouched.
///
/// # Errors
///
/// Whatever FlagSet::var reports: AlreadyParsed, InvalidFlagName or
/// DuplicateFlag.
pub fn string_fs(
    flags: &mut FlagSet,
    name: &str,
    default: Option<&[&str]>,
    usage: &str,
) -> Result<Strings> {
    let target = Strings::new();
    string_var_fs(flags, &target, name, default, usage)?;
    Ok(target)
}

/// Like string_fs, but fills in a list the caller already holds. `default`
/// is appended to whatever `target` contains now; the first occurrence on
/// the command line clears all of it. `target` is left alone if the flag
/// can't be declared.
pub fn string_var_fs(
    flags: &mut FlagSet,
    target: &Strings,
    name: &str,
    default: Option<&[&str]>,
    usage: &str,
) -> Result<()> {
    flags.check_declarable(name)?;

    if let Some(default) = default {
        target
            .lock()
            .extend(default.iter().map(|value| value.to_string()));
    }

    flags.var(Box::new(StringSlice::new(target.clone())), name, usage)
}
