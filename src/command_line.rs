//! The process-wide flag set, named after the program and parsed from
//! `std::env::args()`. Bad arguments log an error and exit with status 2.
//!
//! Prefer an explicit FlagSet and the `slice::*_fs` functions; this exists
//! for small programs that only ever have one set of flags.
use crate::error::Result;
use crate::flag::{ErrorHandling, FlagSet};
use crate::slice::{self, Strings};
use lazy_static::lazy_static;
use std::sync::{Mutex, PoisonError};

lazy_static! {
    static ref COMMAND_LINE: Mutex<FlagSet> = Mutex::new(FlagSet::new(
        &std::env::args().next().unwrap_or_default(),
        ErrorHandling::Exit,
    ));
}

/// Run `f` with the process-wide flag set locked
pub fn with<R>(f: impl FnOnce(&mut FlagSet) -> R) -> R {
    let mut flags = COMMAND_LINE.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut flags)
}

/// slice::string_fs on the process-wide flag set
pub fn string(name: &str, default: Option<&[&str]>, usage: &str) -> Result<Strings> {
    with(|flags| slice::string_fs(flags, name, default, usage))
}

/// slice::string_var_fs on the process-wide flag set
pub fn string_var(
    target: &Strings,
    name: &str,
    default: Option<&[&str]>,
    usage: &str,
) -> Result<()> {
    with(|flags| slice::string_var_fs(flags, target, name, default, usage))
}

/// Parse the program's own arguments, skipping the program name
pub fn parse() -> Result<()> {
    with(|flags| flags.parse(std::env::args().skip(1)))
}

pub fn parsed() -> bool {
    with(|flags| flags.parsed())
}

/// Arguments left over after parse()
pub fn args() -> Vec<String> {
    with(|flags| flags.args().to_vec())
}
