use std::{
    borrow::Borrow,
    env::{self, VarError},
    error::Error as StdError,
    str::FromStr,
};

use anyhow::{anyhow, Context as _, Result};
use thiserror::Error;

pub trait ReadFromVar: Sized {
    fn read_from_var<S>(variable: S) -> Result<Self>
    where
        S: Borrow<str> + Into<String>;
}

pub trait ReadFromOptionalVar: Sized {
    /// Returns `None` when the variable is not set, but still fails when it is
    /// set to something which can't be parsed.
    fn read_from_optional_var<S>(variable: S) -> Result<Option<Self>>
    where
        S: Borrow<str> + Into<String>;
}

impl<T> ReadFromVar for T
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    fn read_from_var<S>(variable: S) -> Result<Self>
    where
        S: Borrow<str> + Into<String>,
    {
        let variable = variable.borrow();

        read(variable)?.with_context(|| {
            format!("Environment variable {variable:?} is not set!")
        })
    }
}

impl<T> ReadFromOptionalVar for T
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    fn read_from_optional_var<S>(variable: S) -> Result<Option<Self>>
    where
        S: Borrow<str> + Into<String>,
    {
        read(variable.borrow())
    }
}

fn read<T>(variable: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    match env::var(variable) {
        Ok(value) => value.parse().map(Some).with_context(|| {
            format!("Failed to parse environment variable {variable:?}!")
        }),
        Err(VarError::NotPresent) => Ok(None),
        Err(error) => Err(anyhow!(error).context(format!(
            "Failed to read environment variable {variable:?}!"
        ))),
    }
}

/// Boolean switch, e.g. `OUTPUT_JSON=1`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Flag(bool);

impl Flag {
    pub const ENABLED: Self = Self(true);

    pub const DISABLED: Self = Self(false);

    #[inline]
    #[must_use]
    pub const fn get(self) -> bool {
        self.0
    }
}

impl FromStr for Flag {
    type Err = InvalidFlag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ENABLED: [&str; 5] = ["1", "y", "Y", "yes", "true"];

        const DISABLED: [&str; 6] = ["", "0", "n", "N", "no", "false"];

        if ENABLED.contains(&s) {
            Ok(Self::ENABLED)
        } else if DISABLED.contains(&s) {
            Ok(Self::DISABLED)
        } else {
            Err(InvalidFlag(s.into()))
        }
    }
}

#[derive(Debug, Error)]
#[error("Expected a flag value, like \"1\" or \"0\", but got {0:?}!")]
pub struct InvalidFlag(Box<str>);
