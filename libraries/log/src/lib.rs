use std::{fmt, io::stderr};

use anyhow::{anyhow, Context as _, Result};
use chrono::{SecondsFormat, Utc};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::{fmt, format::Writer, time::FormatTime};

use environment::{Flag, ReadFromOptionalVar as _};

/// Installs the global subscriber, configured from `OUTPUT_JSON` and
/// `DEBUG_LOGGING`.
///
/// Events are written to the standard error stream.
pub fn init() -> Result<()> {
    Configuration::read_from_env()
        .context("Failed to read logging configuration!")
        .and_then(init_with)
}

pub fn init_with(
    Configuration {
        output_json,
        max_level,
    }: Configuration,
) -> Result<()> {
    let builder = fmt()
        .with_ansi(!output_json)
        .with_file(false)
        .with_level(true)
        .with_line_number(false)
        .with_target(true)
        .with_timer(UtcTimestamp)
        .with_max_level(max_level)
        .with_writer(stderr);

    if output_json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    }
    .map_err(|error| anyhow!(error).context("Failed to initialize logging!"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Configuration {
    pub output_json: bool,
    pub max_level: LevelFilter,
}

impl Configuration {
    pub fn read_from_env() -> Result<Self> {
        let output_json = Flag::read_from_optional_var("OUTPUT_JSON")
            .context(
                "Failed to determine whether logging should be in \
                machine-readable JSON format!",
            )?;

        let debug_logging = Flag::read_from_optional_var("DEBUG_LOGGING")
            .context("Failed to determine whether debug logging is enabled!")?;

        Ok(Self::from_flags(output_json, debug_logging))
    }

    pub fn from_flags(
        output_json: Option<Flag>,
        debug_logging: Option<Flag>,
    ) -> Self {
        let debug_logging =
            debug_logging.map_or(cfg!(debug_assertions), Flag::get);

        Self {
            output_json: output_json.is_some_and(Flag::get),
            max_level: if debug_logging {
                LevelFilter::DEBUG
            } else {
                LevelFilter::INFO
            },
        }
    }
}

struct UtcTimestamp;

impl FormatTime for UtcTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        fmt::Write::write_str(
            w,
            &Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        )
    }
}

#[test]
fn test_configuration_from_flags() {
    assert_eq!(
        Configuration::from_flags(Some(Flag::ENABLED), Some(Flag::DISABLED)),
        Configuration {
            output_json: true,
            max_level: LevelFilter::INFO,
        },
    );

    assert_eq!(
        Configuration::from_flags(Some(Flag::DISABLED), Some(Flag::ENABLED)),
        Configuration {
            output_json: false,
            max_level: LevelFilter::DEBUG,
        },
    );

    assert_eq!(
        Configuration::from_flags(None, None),
        Configuration {
            output_json: false,
            max_level: if cfg!(debug_assertions) {
                LevelFilter::DEBUG
            } else {
                LevelFilter::INFO
            },
        },
    );
}
