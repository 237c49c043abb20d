//! Parameters that are read from environment variables.
//!
//! A parameter is declared as a `static` with the name of its environment variable and a default
//! value, given as the string that would be parsed from the environment.
//! It is initialized on first access, after which changes to the environment are ignored.
//!
//! ```
//! use genset::EnvParam;
//! static BATCH_SIZE: EnvParam<usize> = EnvParam::new("GENSET_DOC_BATCH_SIZE", "64");
//!
//! assert_eq!(BATCH_SIZE.get(), 64);
//! ```

use once_cell::sync::OnceCell;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("parameter {0} was already initialized")]
    AlreadyInitialized(&'static str),
}

pub struct EnvParam<T> {
    var: &'static str,
    default: &'static str,
    value: OnceCell<T>,
}

impl<T> EnvParam<T> {
    pub const fn new(var: &'static str, default: &'static str) -> Self {
        EnvParam {
            var,
            default,
            value: OnceCell::new(),
        }
    }

    /// Name of the environment variable backing this parameter.
    pub fn name(&self) -> &'static str {
        self.var
    }

    pub fn is_initialized(&self) -> bool {
        self.value.get().is_some()
    }
}

impl<T: FromStr> EnvParam<T> {
    /// # Panic
    /// Panics if the default value cannot be parsed, which is a mistake in the parameter declaration.
    fn parse_default(&self) -> T {
        match T::from_str(self.default) {
            Ok(v) => v,
            Err(_) => panic!("{}: invalid default value \"{}\"", self.var, self.default),
        }
    }

    fn read(&self) -> T {
        match std::env::var(self.var) {
            Ok(raw) => match T::from_str(&raw) {
                Ok(v) => v,
                Err(_) => {
                    tracing::warn!(var = self.var, %raw, default = self.default, "unparsable parameter, using default");
                    self.parse_default()
                }
            },
            Err(std::env::VarError::NotPresent) => self.parse_default(),
            Err(err) => {
                tracing::warn!(var = self.var, %err, default = self.default, "unreadable parameter, using default");
                self.parse_default()
            }
        }
    }

    pub fn get(&self) -> T
    where
        T: Copy,
    {
        *self.get_ref()
    }

    /// Returns the value of the parameter, reading it from the environment on the first call.
    /// A value that cannot be parsed is reported as a warning and replaced by the default.
    pub fn get_ref(&self) -> &T {
        self.value.get_or_init(|| self.read())
    }

    /// Forces the value of the parameter, bypassing the environment.
    pub fn set(&self, value: T) -> Result<(), ParamError> {
        self.value.set(value).map_err(|_| ParamError::AlreadyInitialized(self.var))
    }
}
