// SPDX-License-Identifier: MPL-2.0
//! Crate error type.
//!
//! The navigation engine itself never fails: out-of-range requests wrap or
//! no-op, rapid re-triggers cancel. Only the configuration and command-line
//! surfaces can produce an [`Error`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config Error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config Error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Argument Error: {0}")]
    Args(#[from] pico_args::Error),

    #[error("Invalid value for {option}: {value}")]
    InvalidOption { option: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err: Error = std::io::Error::other("disk failure").into();
        assert_eq!(format!("{err}"), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let err: Error = std::io::Error::other("boom").into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn toml_errors_map_to_config_variants() {
        let parse = toml::from_str::<toml::Table>("not = valid = toml")
            .map_err(Error::from)
            .expect_err("invalid toml");
        assert!(matches!(parse, Error::ConfigParse(_)));
        assert!(format!("{parse}").starts_with("Config Error:"));
    }

    #[test]
    fn invalid_option_names_the_option() {
        let err = Error::InvalidOption {
            option: "--transition",
            value: "spin".to_string(),
        };
        assert_eq!(format!("{err}"), "Invalid value for --transition: spin");
    }
}
