//! Dual-sink logging setup: stderr stream plus `init.log` file.

use std::fmt;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::Layer as _;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::AppError;

/// Null device path used to disable the file sink in dev-only mode.
pub const NULL_DEVICE: &str = if cfg!(windows) { "NUL" } else { "/dev/null" };

/// Event formatter producing
/// `YYYY-MM-DD HH:MM:SS : LEVEL - <module> - ln:<line> >> <message>`.
struct InitLogFormat;

impl<S, N> FormatEvent<S, N> for InitLogFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "{} : {} - {} - ln:{} >> ",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            meta.level(),
            meta.target(),
            meta.line().unwrap_or(0),
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the process-wide logging configuration.
///
/// The stderr sink filters at DEBUG when `debug` is set, WARN otherwise.
/// The file sink filters at INFO and appends to `<project_dir>/init.log`,
/// redirected to the null device in dev-only mode so a dev checkout stays
/// clean. Must be called exactly once, before any component logs.
///
/// Returns the resolved file-sink target.
pub fn init_logging(
    project_dir: &Path,
    debug: bool,
    dev_only: bool,
) -> Result<PathBuf, AppError> {
    let console_level = if debug { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let log_target = if dev_only {
        PathBuf::from(NULL_DEVICE)
    } else {
        project_dir.join("init.log")
    };
    let log_file = OpenOptions::new().create(true).append(true).open(&log_target)?;

    let console_layer = tracing_subscriber::fmt::layer()
        .event_format(InitLogFormat)
        .with_writer(io::stderr)
        .with_filter(console_level);
    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(InitLogFormat)
        .with_writer(Mutex::new(log_file))
        .with_filter(LevelFilter::INFO);

    tracing_subscriber::registry().with(console_layer).with(file_layer).init();

    Ok(log_target)
}
