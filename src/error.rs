use std::fmt::{self, Display, Formatter};

/// Errors raised while declaring flags or parsing arguments. Accepting a
/// value for a repeatable string flag never fails; everything here comes
/// from the flag set itself.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The flag set has already been parsed, so no more flags may be declared
    /// on it. Holds the flag set name.
    AlreadyParsed(String),
    /// An argument looked like a flag but could not be read as one, such as
    /// `---f` or `-=f`.
    BadSyntax(String),
    /// A flag with this name was already declared on the same flag set.
    DuplicateFlag(String),
    /// Flag names must be non-empty, must not start with '-' and must not
    /// contain '='.
    InvalidFlagName(String),
    /// A flag value refused the text it was given.
    InvalidValue {
        /// flag name
        name: String,
        /// text from the command line
        value: String,
        /// what the value had to say about it
        reason: String,
    },
    /// The flag was the last argument and no value followed it.
    MissingArgument(String),
    /// The arguments named a flag that was never declared.
    UnknownFlag(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Error::AlreadyParsed(set) => write!(f, "flag set '{}' has already been parsed", set),
            Error::BadSyntax(text) => write!(f, "bad flag syntax: {}", text),
            Error::DuplicateFlag(name) => write!(f, "flag redefined: {}", name),
            Error::InvalidFlagName(name) => write!(f, "invalid flag name '{}'", name),
            Error::InvalidValue {
                name,
                value,
                reason,
            } => write!(f, "invalid value '{}' for flag -{}: {}", value, name, reason),
            Error::MissingArgument(name) => write!(f, "flag needs an argument: -{}", name),
            Error::UnknownFlag(name) => write!(f, "flag provided but not defined: -{}", name),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
