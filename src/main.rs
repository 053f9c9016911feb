// SPDX-License-Identifier: MPL-2.0
use iced_carousel::app::{self, Flags};
use iced_carousel::cli::{CliArgs, USAGE};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("iced_carousel=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    let cli = match CliArgs::parse(pico_args::Arguments::from_env()) {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    if cli.help {
        print!("{USAGE}");
        return Ok(());
    }

    init_tracing();

    let (config, config_warning) = cli.resolve_config();
    app::run(Flags {
        config,
        config_warning,
    })
}
