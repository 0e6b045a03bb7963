use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{InputError, Result};

const VERBOSE_FLAGS: [&str; 2] = ["-v", "--verbose"];

/// Splits arguments (program name already removed) into the positional ones, in order,
/// and whether a verbose flag appeared anywhere.
pub fn split_args<I: IntoIterator<Item = String>>(args: I) -> (Vec<String>, bool) {
    let (flags, positional): (Vec<String>, Vec<String>) = args
        .into_iter()
        .partition(|arg| VERBOSE_FLAGS.contains(&arg.as_str()));
    (positional, !flags.is_empty())
}

/// Positional command-line arguments, verbose flags removed.
pub fn positional_args() -> Vec<String> {
    split_args(std::env::args().skip(1)).0
}

/// The target sum from an optional argument, `default` if absent.
pub fn parse_target(arg: Option<&str>, default: i64) -> Result<i64> {
    match arg {
        None => Ok(default),
        Some(text) => text.trim().parse::<i64>().map_err(|source| InputError::Target {
            text: text.to_string(),
            source,
        }),
    }
}

/// Reads the file named by the first positional argument,
/// or standard input if there is none or it is `-`.
pub fn read_input_file() -> Result<String> {
    let args = positional_args();
    read_input(args.first().map(String::as_str))
}

pub fn read_input(path: Option<&str>) -> Result<String> {
    let contents = match path {
        None | Some("-") => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| InputError::Io {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            s
        }
        Some(path) => read_file(path)?,
    };
    debug!(bytes = contents.len(), "read input");
    Ok(contents)
}

fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// One integer per line; surrounding whitespace is ignored.
/// Any other line is an error, blank lines included.
pub fn parse_numbers<'a, I>(lines: I) -> Result<Vec<i64>>
where
    I: IntoIterator<Item = &'a str>,
{
    let nums = lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let text = line.trim();
            text.parse::<i64>().map_err(|source| InputError::Parse {
                line: i + 1,
                text: text.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(count = nums.len(), "parsed numbers");
    Ok(nums)
}

/// Splits lines into groups separated by empty lines.
/// Every empty line closes a group, even an empty one, and the last group is always emitted,
/// so there is one more group than there are empty lines.
pub fn parse_groups<I, S>(lines: I) -> Vec<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut groups = Vec::new();
    let mut group = Vec::new();
    for line in lines {
        let line = line.as_ref();
        if line.is_empty() {
            groups.push(std::mem::take(&mut group));
        } else {
            group.push(line.to_string());
        }
    }
    groups.push(group);
    groups
}

pub fn parse_groups_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let contents = read_file(path)?;
    let groups = parse_groups(contents.lines().map(str::trim));
    debug!(groups = groups.len(), "parsed groups");
    Ok(groups)
}
