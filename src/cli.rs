// SPDX-License-Identifier: MPL-2.0
//! Command-line parsing for the demo binary.

use crate::config::{self, CarouselConfig, LOAD_ERROR_WARNING};
use crate::domain::CarouselTransition;
use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: iced_carousel [OPTIONS] [IMAGE]...

Options:
  --config <FILE>        Read settings from FILE instead of the default location
  --transition <KIND>    Carousel transition: slide or fade
  --interval <MS>        Autoplay interval in milliseconds
  --autoplay             Start autoplay on launch
  --no-loop              Stop at the first and last items
  -h, --help             Print this help
";

/// Parsed command-line arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    pub help: bool,
    pub config: Option<PathBuf>,
    pub transition: Option<CarouselTransition>,
    pub interval_ms: Option<u64>,
    pub autoplay: bool,
    pub no_loop: bool,
    pub items: Vec<String>,
}

impl CliArgs {
    /// Parses arguments (without the program name).
    pub fn parse(mut args: pico_args::Arguments) -> Result<Self> {
        let parsed = Self {
            help: args.contains(["-h", "--help"]),
            config: args.opt_value_from_os_str("--config", |value| {
                Ok::<_, std::convert::Infallible>(PathBuf::from(value))
            })?,
            transition: args.opt_value_from_fn("--transition", str::parse::<CarouselTransition>)?,
            interval_ms: args.opt_value_from_str("--interval")?,
            autoplay: args.contains("--autoplay"),
            no_loop: args.contains("--no-loop"),
            items: Vec::new(),
        };

        let items = args
            .finish()
            .into_iter()
            .map(positional)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { items, ..parsed })
    }

    /// Applies command-line overrides on top of a loaded configuration.
    pub fn apply(&self, config: &mut CarouselConfig) {
        if let Some(transition) = self.transition {
            config.transition.kind = Some(transition);
        }
        if let Some(interval) = self.interval_ms {
            config.autoplay.interval_ms = Some(interval);
        }
        if self.autoplay {
            config.autoplay.enabled = Some(true);
        }
        if self.no_loop {
            config.navigation.loop_enabled = Some(false);
        }
        if !self.items.is_empty() {
            config.items = self.items.iter().map(|src| src.as_str().into()).collect();
        }
    }

    /// Loads the configuration this invocation points at, then applies overrides.
    ///
    /// An unreadable file never aborts startup: defaults are used and a
    /// warning key is returned.
    pub fn resolve_config(&self) -> (CarouselConfig, Option<String>) {
        let (mut config, warning) = match &self.config {
            Some(path) => match config::load_from_path(path) {
                Ok(config) => (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load config");
                    (
                        CarouselConfig::default(),
                        Some(LOAD_ERROR_WARNING.to_string()),
                    )
                }
            },
            None => config::load(),
        };
        self.apply(&mut config);
        (config, warning)
    }
}

fn positional(arg: OsString) -> Result<String> {
    let value = arg.into_string().map_err(|raw| Error::InvalidOption {
        option: "IMAGE",
        value: raw.to_string_lossy().into_owned(),
    })?;
    if value.starts_with('-') {
        return Err(Error::InvalidOption {
            option: "argument",
            value,
        });
    }
    Ok(value)
}
