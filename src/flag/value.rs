use std::error::Error;
use std::fmt;

/// Anything that can sit behind a flag. `Display` gives the current value as
/// text and `set` takes one occurrence from the command line.
///
/// `set` takes `&self`, so implementations that hold state need their own
/// interior locking. The flag set calls `set` once per occurrence, in
/// command line order.
pub trait Value: fmt::Display + Send {
    fn set(&self, value: &str) -> Result<(), Box<dyn Error>>;
}
