use std::{path::PathBuf, process::ExitCode, sync::Arc};

use pagenav::{
    config::{AppConfig, ConfigError},
    pager::Paginator,
    render::error::not_found,
    routes,
};
use rouille::router;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
pagenav

USAGE:
  pagenav [OPTIONS]

OPTIONS:
  -h, --help            Print this help
  --config PATH         JSON configuration file
  --bind ADDR           Listen address [default: 0.0.0.0:8080]
  --rows N              Rows of the demo listing
";

fn parse_args() -> Result<Option<AppConfig>, ConfigError> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(None);
    }

    let path: Option<PathBuf> = args.opt_value_from_str("--config")?;
    let mut config = match path {
        Some(path) => AppConfig::load(&path)?,
        None => AppConfig::default(),
    };

    if let Some(bind) = args.opt_value_from_str("--bind")? {
        config.bind = bind;
    }
    if let Some(rows) = args.opt_value_from_str("--rows")? {
        config.rows = rows;
    }

    let remaining = args.finish();
    if !remaining.is_empty() {
        error!(?remaining, "unused arguments");
    }

    Ok(Some(config))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match parse_args() {
        Ok(Some(config)) => config,
        Ok(None) => return ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let paginator = Arc::new(Paginator::new(config.paginator.clone()));
    let config = Arc::new(config);

    info!(bind = %config.bind, rows = config.rows, "listening");

    rouille::start_server(config.bind.clone(), move |request| {
        router!(request,
            (GET) (/) => {
                rouille::Response::redirect_302("/items")
            },
            (GET) (/items) => {
                routes::items::items(&paginator, &config, request)
            },
            _ => not_found()
        )
    });
}
