use anyhow::{Context, Result};
use tracing::warn;

use aoc2020::day01::{find_pair, find_triple, product, TARGET};

fn main() -> Result<()> {
    let (args, verbose) = aoc2020::split_args(std::env::args().skip(1));
    aoc2020::logger::init_logger(verbose);

    let target = aoc2020::parse_target(args.get(1).map(String::as_str), TARGET)?;
    let input = aoc2020::read_input_file().context("can't read puzzle input")?;
    let nums = aoc2020::parse_numbers(input.lines()).context("can't parse puzzle input")?;

    match find_pair(&nums, target) {
        Some((a, b)) => {
            let answer = product(&[a, b])
                .with_context(|| format!("{} * {} overflows", a, b))?;
            println!("{}", answer);
        }
        None => warn!(sum = target, "no pair sums to target"),
    }
    match find_triple(&nums, target) {
        Some((a, b, c)) => {
            let answer = product(&[a, b, c])
                .with_context(|| format!("{} * {} * {} overflows", a, b, c))?;
            println!("{}", answer);
        }
        None => warn!(sum = target, "no triple sums to target"),
    }

    Ok(())
}
