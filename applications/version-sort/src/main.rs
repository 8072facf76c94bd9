use std::{
    env,
    ffi::OsString,
    io::{self, BufWriter, Write as _},
};

use anyhow::{anyhow, Context as _, Result};
use tracing::{debug, info};

use version::Version;

use self::configuration::Configuration;

mod configuration;
mod sort;

fn main() -> Result<()> {
    log::init().context("Failed to initialize logging!")?;

    let Configuration {
        arrangement,
        versions,
    } = Configuration::read_from_env()
        .context("Failed to load application configuration!")?;

    let arguments = read_arguments(env::args_os().skip(1))
        .context("Failed to read command-line arguments!")?;

    let parsed = if arguments.is_empty() {
        debug!("No versions passed as arguments, reading \"VERSIONS\".");

        sort::parse_all(sort::split_list(versions.as_deref().unwrap_or("")))
    } else {
        sort::parse_all(arguments.iter().map(String::as_str))
    }
    .context("Failed to parse input versions!")?;

    let total = parsed.len();

    let arranged = arrangement.apply(parsed);

    info!(
        "Kept {kept} out of {total} versions, in {order} order.",
        kept = arranged.len(),
        order = arrangement.order,
    );

    print(&arranged).context("Failed to write out arranged versions!")
}

fn read_arguments<I>(arguments: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    arguments
        .into_iter()
        .enumerate()
        .map(|(position, argument)| {
            argument.into_string().map_err(|argument| {
                anyhow!(
                    "Argument {argument:?} at position {position} is not \
                    valid UTF-8!"
                )
            })
        })
        .collect()
}

fn print(versions: &[Version]) -> Result<()> {
    let mut stdout = BufWriter::new(io::stdout().lock());

    versions
        .iter()
        .try_for_each(|version| writeln!(stdout, "{version}"))
        .and_then(|()| stdout.flush())
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::read_arguments;

    #[test]
    fn test_read_arguments() {
        assert_eq!(
            read_arguments(["2023.3.5", "1.0"].map(OsString::from)).unwrap(),
            ["2023.3.5", "1.0"],
        );
        assert!(read_arguments([]).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_argument() {
        use std::os::unix::ffi::OsStringExt as _;

        let error = read_arguments([
            OsString::from("1.0"),
            OsString::from_vec(vec![b'1', b'.', 0xFF]),
        ])
        .unwrap_err();

        assert!(error.to_string().contains("position 1"));
    }
}
