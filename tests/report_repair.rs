use std::io::Write;

use aoc2020::day01::{find_pair, find_triple, product, TARGET};
use aoc2020::{parse_groups_from_file, parse_numbers, parse_target, split_args, InputError};

const EXAMPLE: &str = "1721\n979\n366\n299\n675\n1456\n";

#[test]
fn example_end_to_end() {
    let nums = parse_numbers(EXAMPLE.lines()).unwrap();

    let (a, b) = find_pair(&nums, TARGET).unwrap();
    assert_eq!(product(&[a, b]), Some(514579));

    let (a, b, c) = find_triple(&nums, TARGET).unwrap();
    assert_eq!(product(&[a, b, c]), Some(241861950));
}

fn argv(xs: &[&str]) -> (Vec<String>, bool) {
    split_args(xs.iter().map(|s| s.to_string()))
}

#[test]
fn command_line() {
    let (args, verbose) = argv(&["input.txt", "-v"]);
    assert!(verbose);
    assert_eq!(args, vec!["input.txt".to_string()]);
    assert_eq!(parse_target(args.get(1).map(String::as_str), TARGET).unwrap(), 2020);

    let (args, verbose) = argv(&["--verbose", "-", "1000"]);
    assert!(verbose);
    assert_eq!(args.first().map(String::as_str), Some("-"));
    assert_eq!(parse_target(args.get(1).map(String::as_str), TARGET).unwrap(), 1000);

    let (args, verbose) = argv(&["input.txt", "2O2O"]);
    assert!(!verbose);
    let err = parse_target(args.get(1).map(String::as_str), TARGET).unwrap_err();
    assert!(matches!(err, InputError::Target { .. }));
}

#[test]
fn crlf_input() {
    let nums = parse_numbers("1721\r\n979\r\n366\r\n299\r\n".lines()).unwrap();
    assert_eq!(find_pair(&nums, TARGET), Some((1721, 299)));
}

#[test]
fn bad_input_is_loud() {
    let err = parse_numbers("1721\n97x\n".lines()).unwrap_err();
    assert!(matches!(err, InputError::Parse { line: 2, .. }));
}

#[test]
fn groups_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "abc\n\na\nb\nc\n\nab\n  ac  \n").unwrap();

    let groups = parse_groups_from_file(file.path()).unwrap();
    assert_eq!(
        groups,
        vec![
            vec!["abc".to_string()],
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec!["ab".to_string(), "ac".to_string()],
        ]
    );
}

#[test]
fn groups_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_groups_from_file(dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, InputError::Io { .. }));
}
