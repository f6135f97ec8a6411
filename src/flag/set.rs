use super::token::{self, Token};
use super::{validate_name, Flag, Value};
use crate::error::{Error, Result};
use lexical_sort::{natural_lexical_cmp, StringSort};
use log::{debug, error, trace};
use std::collections::{HashMap, HashSet};

/// What FlagSet::parse does when the arguments are bad
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ErrorHandling {
    /// Hand the error back to the caller.
    #[default]
    Continue,
    /// Print the error to stderr, log it, and exit the process with status 2.
    Exit,
    /// Panic with the error message.
    Panic,
}

/// A named group of flags and the arguments left over once they have been
/// parsed. Flags must be declared before `parse` is called.
#[derive(Debug)]
pub struct FlagSet {
    name: String,
    error_handling: ErrorHandling,
    /// every declared flag, hashed by name
    formal: HashMap<String, Flag>,
    /// names of the flags that were actually given a value
    actual: HashSet<String>,
    /// arguments after the last flag
    args: Vec<String>,
    parsed: bool,
}

impl FlagSet {
    pub fn new(name: &str, error_handling: ErrorHandling) -> FlagSet {
        FlagSet {
            name: name.into(),
            error_handling,
            formal: HashMap::new(),
            actual: HashSet::new(),
            args: Vec::new(),
            parsed: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn error_handling(&self) -> ErrorHandling {
        self.error_handling
    }

    /// Make sure a flag called `name` could be declared right now, without
    /// declaring it.
    pub fn check_declarable(&self, name: &str) -> Result<()> {
        if self.parsed {
            return Err(Error::AlreadyParsed(self.name.clone()));
        }
        validate_name(name)?;
        if self.formal.contains_key(name) {
            return Err(Error::DuplicateFlag(name.into()));
        }
        Ok(())
    }

    /// Declare a flag. The value's textual representation at this point is
    /// recorded as the flag's default.
    ///
    /// # Errors
    ///
    /// * AlreadyParsed - parse() has already run on this set
    /// * InvalidFlagName - the name is empty, starts with '-' or contains '='
    /// * DuplicateFlag - a flag with this name already exists
    pub fn var(&mut self, value: Box<dyn Value>, name: &str, usage: &str) -> Result<()> {
        self.check_declarable(name)?;

        let flag = Flag::new(name, usage, value);
        debug!(
            "{}: declared flag -{} (default '{}')",
            self.name,
            name,
            flag.default_value()
        );
        self.formal.insert(name.into(), flag);
        Ok(())
    }

    /// Hand `value` to the named flag as if it had appeared on the command
    /// line once.
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        let flag = self
            .formal
            .get(name)
            .ok_or_else(|| Error::UnknownFlag(name.into()))?;

        flag.value().set(value).map_err(|e| Error::InvalidValue {
            name: name.into(),
            value: value.into(),
            reason: e.to_string(),
        })?;
        trace!("{}: -{} = '{}'", self.name, name, value);

        self.actual.insert(name.into());
        Ok(())
    }

    /// Parse flags from the argument list, which should not include the
    /// program name. Parsing stops at the first operand or after `--`; the
    /// arguments that remain are available from args().
    ///
    /// What happens on bad input depends on the set's ErrorHandling. With
    /// Exit or Panic this function only ever returns Ok.
    pub fn parse<I, S>(&mut self, arguments: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let result = self.parse_args(arguments.into_iter().map(Into::into));
        self.parsed = true;

        match result {
            Ok(()) => Ok(()),
            Err(err) => match self.error_handling {
                ErrorHandling::Continue => Err(err),
                ErrorHandling::Exit => {
                    // stderr first: there may be no logger installed yet
                    eprintln!("{}: {}", self.name, err);
                    error!("{}: {}", self.name, err);
                    std::process::exit(2);
                }
                ErrorHandling::Panic => panic!("{}: {}", self.name, err),
            },
        }
    }

    fn parse_args(&mut self, mut tokens: impl Iterator<Item = String>) -> Result<()> {
        self.args.clear();

        while let Some(text) = tokens.next() {
            let (name, value) = match token::classify(&text)? {
                Token::Flag { name, value } => (name, value),
                Token::Terminator => {
                    self.args.extend(tokens);
                    return Ok(());
                }
                Token::Operand => {
                    self.args.push(text);
                    self.args.extend(tokens);
                    return Ok(());
                }
            };

            if !self.formal.contains_key(&name) {
                return Err(Error::UnknownFlag(name));
            }

            // a flag without '=' always takes the next argument, even one
            // that looks like a flag
            let value = match value {
                Some(value) => value,
                None => tokens
                    .next()
                    .ok_or_else(|| Error::MissingArgument(name.clone()))?,
            };

            self.set(&name, &value)?;
        }

        Ok(())
    }

    pub fn parsed(&self) -> bool {
        self.parsed
    }

    pub fn lookup(&self, name: &str) -> Option<&Flag> {
        self.formal.get(name)
    }

    /// Arguments remaining after flags have been parsed
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn arg(&self, i: usize) -> Option<&str> {
        self.args.get(i).map(String::as_str)
    }

    pub fn nargs(&self) -> usize {
        self.args.len()
    }

    /// Call `f` on every flag that has been set, in natural lexical order
    pub fn visit<F: FnMut(&Flag)>(&self, f: F) {
        self.sorted_flags()
            .into_iter()
            .filter(|flag| self.actual.contains(flag.name()))
            .for_each(f);
    }

    /// Call `f` on every declared flag, in natural lexical order
    pub fn visit_all<F: FnMut(&Flag)>(&self, f: F) {
        self.sorted_flags().into_iter().for_each(f);
    }

    fn sorted_flags(&self) -> Vec<&Flag> {
        let mut flags: Vec<&Flag> = self.formal.values().collect();
        flags.string_sort_unstable(natural_lexical_cmp);
        flags
    }
}
