//! Logging setup
//!
//! Console output is pretty in development and JSON elsewhere. When a log
//! directory is configured, application logs are also written to a daily
//! rolling `tour-server.YYYY-MM-DD` file in it.

use std::fs;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "tour_server=info,tower_http=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn init_logger(json_format: bool, log_dir: Option<&str>) -> Result<(), BoxError> {
    let pretty = (!json_format).then(|| fmt::layer().with_target(true).with_line_number(true));
    let json = json_format.then(|| {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
    });

    let file = match log_dir {
        Some(dir) => {
            let dir = Path::new(dir);
            fs::create_dir_all(dir)?;
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, "tour-server");
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::sync::Mutex::new(appender)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter())
        .with(pretty)
        .with(json)
        .with(file)
        .try_init()?;

    if let Some(dir) = log_dir {
        tracing::info!(dir = %dir, "File logging enabled");
    }
    Ok(())
}
