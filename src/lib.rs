pub mod day01;
pub mod error;
pub mod input;
pub mod logger;

pub use error::InputError;
pub use input::{
    parse_groups, parse_groups_from_file, parse_numbers, parse_target, positional_args,
    read_input, read_input_file, split_args,
};
