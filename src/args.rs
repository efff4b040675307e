// src/args.rs
use std::{collections::BTreeMap, ffi::OsString};

use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser, ValueHint};

use crate::options::OutputFormat;
use ccwc_domain::{CountKind, CountRequest};

#[derive(Parser, Debug)]
#[command(
    name = "ccwc",
    version,
    about = "ccwc - print newline, word, and byte counts for a file"
)]
pub struct Args {
    /// print the byte counts
    #[arg(short = 'c', long = "bytes", action = ArgAction::Append, num_args = 0, default_missing_value = "true")]
    pub bytes: Vec<bool>,

    /// print the character counts
    #[arg(short = 'm', long = "chars", action = ArgAction::Append, num_args = 0, default_missing_value = "true")]
    pub chars: Vec<bool>,

    /// print the word counts
    #[arg(short = 'w', long = "words", action = ArgAction::Append, num_args = 0, default_missing_value = "true")]
    pub words: Vec<bool>,

    /// print the newline counts
    #[arg(short = 'l', long = "lines", action = ArgAction::Append, num_args = 0, default_missing_value = "true")]
    pub lines: Vec<bool>,

    /// output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// file to read; standard input when omitted or `-`
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub file: Option<OsString>,
}

/// Flag ids paired with the kind each one requests.
const KIND_FLAGS: [(&str, CountKind); 4] = [
    ("bytes", CountKind::Bytes),
    ("chars", CountKind::Characters),
    ("words", CountKind::Words),
    ("lines", CountKind::Lines),
];

/// Parsed arguments plus the kinds in the order their flags appeared.
#[derive(Debug)]
pub struct Invocation {
    pub args: Args,
    pub request: CountRequest,
}

impl Invocation {
    /// Parse `std::env::args_os`, exiting with clap's usage error on failure.
    pub fn parse() -> Self {
        Self::try_parse_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// # Errors
    ///
    /// Returns clap's error for unknown flags or malformed values.
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Args::command().try_get_matches_from(itr)?;
        let args = Args::from_arg_matches(&matches)?;
        let request = requested_kinds(&matches);
        Ok(Self { args, request })
    }
}

/// Recover flag order (duplicates included) from argument indices.
fn requested_kinds(matches: &ArgMatches) -> CountRequest {
    let mut ordered = BTreeMap::new();
    for (id, kind) in KIND_FLAGS {
        if let Some(indices) = matches.indices_of(id) {
            ordered.extend(indices.map(|index| (index, kind)));
        }
    }
    ordered.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(argv: &[&str]) -> Vec<CountKind> {
        Invocation::try_parse_from(argv).unwrap().request.kinds().to_vec()
    }

    #[test]
    fn no_flags_is_an_empty_request() {
        let invocation = Invocation::try_parse_from(["ccwc", "file.txt"]).unwrap();
        assert!(invocation.request.is_empty());
        assert_eq!(invocation.args.file, Some(OsString::from("file.txt")));
    }

    #[test]
    fn flags_keep_command_line_order() {
        assert_eq!(kinds(&["ccwc", "-c", "-l", "f"]), vec![CountKind::Bytes, CountKind::Lines]);
        assert_eq!(
            kinds(&["ccwc", "--words", "--chars", "--bytes", "f"]),
            vec![CountKind::Words, CountKind::Characters, CountKind::Bytes]
        );
    }

    #[test]
    fn combined_short_flags() {
        assert_eq!(kinds(&["ccwc", "-lwm"]), vec![CountKind::Lines, CountKind::Words, CountKind::Characters]);
    }

    #[test]
    fn repeated_flags_are_kept() {
        assert_eq!(kinds(&["ccwc", "-l", "-c", "-l"]), vec![CountKind::Lines, CountKind::Bytes, CountKind::Lines]);
    }

    #[test]
    fn format_defaults_to_table() {
        let invocation = Invocation::try_parse_from(["ccwc"]).unwrap();
        assert_eq!(invocation.args.format, OutputFormat::Table);
        assert!(invocation.args.file.is_none());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Invocation::try_parse_from(["ccwc", "-x"]).is_err());
    }

    #[test]
    fn command_is_consistent() {
        Args::command().debug_assert();
    }
}
