use crate::error::{Error, Result};
use std::fmt;

pub use set::{ErrorHandling, FlagSet};
pub use value::Value;

pub mod set;
pub(crate) mod token;
pub mod value;

/// A flag declared on a FlagSet: its name, help text, and the Value that
/// receives every occurrence.
pub struct Flag {
    name: String,
    usage: String,
    value: Box<dyn Value>,
    default_value: String,
}

impl Flag {
    pub(crate) fn new(name: &str, usage: &str, value: Box<dyn Value>) -> Flag {
        // whatever the value renders as before parsing is its default
        let default_value = value.to_string();
        Flag {
            name: name.to_owned(),
            usage: usage.to_owned(),
            value,
            default_value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn value(&self) -> &dyn Value {
        self.value.as_ref()
    }

    /// Textual representation of the value at the time the flag was declared
    pub fn default_value(&self) -> &str {
        &self.default_value
    }
}

impl fmt::Debug for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flag")
            .field("name", &self.name)
            .field("usage", &self.usage)
            .field("value", &self.value.to_string())
            .field("default_value", &self.default_value)
            .finish()
    }
}

impl AsRef<str> for Flag {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

/// check that a string can be used as a flag name
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name.starts_with('-') || name.contains('=') {
        return Err(Error::InvalidFlagName(name.to_owned()));
    }
    Ok(())
}
