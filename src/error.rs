use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: can't parse integer {text:?}")]
    Parse {
        line: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("can't parse target {text:?}")]
    Target {
        text: String,
        #[source]
        source: ParseIntError,
    },
}

pub type Result<T> = std::result::Result<T, InputError>;
