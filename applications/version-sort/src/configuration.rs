use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use anyhow::{Context as _, Result};
use thiserror::Error;

use environment::{Flag, ReadFromOptionalVar as _};
use version::Version;

use crate::sort::Arrangement;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub arrangement: Arrangement,
    /// Fallback input, used when no versions are passed as arguments.
    pub versions: Option<String>,
}

impl Configuration {
    #[inline]
    pub fn read_from_env() -> Result<Self> {
        Self::read_from_prefixed_env("")
    }

    /// Reads the configuration from variables all named with `prefix` in
    /// front, e.g. `{prefix}SORT_ORDER`.
    pub fn read_from_prefixed_env(prefix: &str) -> Result<Self> {
        let order =
            SortOrder::read_from_optional_var(format!("{prefix}SORT_ORDER"))
                .context("Failed to read sort order!")?
                .unwrap_or_default();

        let minimum =
            Version::read_from_optional_var(format!("{prefix}MINIMUM_VERSION"))
                .context("Failed to read minimum version!")?;

        let deduplicate =
            Flag::read_from_optional_var(format!("{prefix}DEDUPLICATE"))
                .context("Failed to read whether to drop duplicate versions!")?
                .is_some_and(Flag::get);

        let versions =
            String::read_from_optional_var(format!("{prefix}VERSIONS"))
                .context("Failed to read versions list!")?;

        Ok(Self {
            arrangement: Arrangement {
                order,
                minimum,
                deduplicate,
            },
            versions,
        })
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        })
    }
}

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" | "asc" => Ok(Self::Ascending),
            "descending" | "desc" => Ok(Self::Descending),
            _ => Err(UnknownSortOrder(s.into())),
        }
    }
}

#[derive(Debug, Error)]
#[error(
    "Unknown sort order {0:?}, expected either \"ascending\" or \
    \"descending\"!"
)]
pub struct UnknownSortOrder(Box<str>);

#[test]
fn test_sort_order() {
    assert_eq!("ascending".parse::<SortOrder>().unwrap(), SortOrder::Ascending);
    assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Ascending);
    assert_eq!(
        "descending".parse::<SortOrder>().unwrap(),
        SortOrder::Descending,
    );
    assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Descending);

    "upwards".parse::<SortOrder>().unwrap_err();

    assert_eq!(SortOrder::default(), SortOrder::Ascending);
    assert_eq!(SortOrder::Descending.to_string(), "descending");
}

#[cfg(test)]
mod tests {
    use std::env;

    use version::Version;

    use crate::sort::Arrangement;

    use super::{Configuration, SortOrder};

    fn set_vars(prefix: &str, vars: &[(&str, &str)]) {
        for (name, value) in vars {
            env::set_var(format!("{prefix}{name}"), value);
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            Configuration::read_from_prefixed_env("VERSION_SORT_TEST_UNSET_")
                .unwrap(),
            Configuration {
                arrangement: Arrangement {
                    order: SortOrder::Ascending,
                    minimum: None,
                    deduplicate: false,
                },
                versions: None,
            },
        );
    }

    #[test]
    fn test_all_set() {
        const PREFIX: &str = "VERSION_SORT_TEST_SET_";

        set_vars(
            PREFIX,
            &[
                ("SORT_ORDER", "descending"),
                ("MINIMUM_VERSION", "1.02"),
                ("DEDUPLICATE", "yes"),
                ("VERSIONS", "1.2, 0.9"),
            ],
        );

        assert_eq!(
            Configuration::read_from_prefixed_env(PREFIX).unwrap(),
            Configuration {
                arrangement: Arrangement {
                    order: SortOrder::Descending,
                    minimum: Some(Version::new([1, 2])),
                    deduplicate: true,
                },
                versions: Some("1.2, 0.9".into()),
            },
        );
    }

    #[test]
    fn test_deduplicate_disabled() {
        const PREFIX: &str = "VERSION_SORT_TEST_NO_DEDUPLICATE_";

        set_vars(PREFIX, &[("DEDUPLICATE", "0")]);

        assert!(
            !Configuration::read_from_prefixed_env(PREFIX)
                .unwrap()
                .arrangement
                .deduplicate
        );
    }

    #[test]
    fn test_invalid_values() {
        for (prefix, name, value) in [
            ("VERSION_SORT_TEST_BAD_MINIMUM_", "MINIMUM_VERSION", "1.x"),
            ("VERSION_SORT_TEST_BAD_ORDER_", "SORT_ORDER", "upwards"),
            ("VERSION_SORT_TEST_BAD_FLAG_", "DEDUPLICATE", "maybe"),
        ] {
            set_vars(prefix, &[(name, value)]);

            Configuration::read_from_prefixed_env(prefix).unwrap_err();
        }
    }
}
