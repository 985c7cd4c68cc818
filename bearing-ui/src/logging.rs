//! Process-wide `tracing` setup.
//!
//! Two layers share one global level filter: stdout (colored on a terminal,
//! switchable at runtime) and a log file that stays silent until
//! [`enable_file_logging`] opens one.

use std::{
    fmt::Display,
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{
        Arc, Mutex, MutexGuard, OnceLock, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
};

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use tracing::{Event, Level, Subscriber, error};
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::filter_fn,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

// --- Line format ---

/// `<local time> <LEVEL> <file:line> <fields>`.
struct LocalLine;

const DIM: &str = "2";
const CYAN: &str = "36";

fn level_color(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "1;31",
        Level::WARN => "1;33",
        Level::INFO => "1;32",
        Level::DEBUG => "1;34",
        Level::TRACE => "1;35",
    }
}

/// Writes `text` followed by a space, wrapped in an SGR sequence when the
/// writer takes ANSI escapes.
fn paint(
    writer: &mut Writer<'_>,
    sgr: &str,
    text: impl Display,
) -> std::fmt::Result {
    if writer.has_ansi_escapes() {
        write!(writer, "\x1b[{sgr}m{text}\x1b[0m ")
    } else {
        write!(writer, "{text} ")
    }
}

impl<S, N> FormatEvent<S, N> for LocalLine
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        paint(
            &mut writer,
            DIM,
            Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z"),
        )?;
        paint(
            &mut writer,
            level_color(meta.level()),
            format_args!("{:>5}", meta.level()),
        )?;

        // `bearing-ui/src/gui.rs` prints as `bearing-ui/gui.rs`.
        if let (Some(file), Some(line)) = (meta.file(), meta.line()) {
            let file = file.replace("/src/", "/").replace("\\src\\", "\\");
            paint(&mut writer, CYAN, format_args!("{file}:{line}"))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Log file ---

type SharedFile = Arc<Mutex<Option<File>>>;

fn lock(file: &SharedFile) -> MutexGuard<'_, Option<File>> {
    file.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Writer target that is empty until a file is opened; records written while
/// empty are dropped.
#[derive(Clone)]
struct LogFile(SharedFile);

struct LogFileWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for LogFileWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        self.0.as_mut().map_or(Ok(buf.len()), |file| file.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.as_mut().map_or(Ok(()), File::flush)
    }
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogFileWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LogFileWriter(lock(&self.0))
    }
}

// --- Runtime switches ---

struct LogControl {
    stdout_on: Arc<AtomicBool>,
    file: SharedFile,
}

static CONTROL: OnceLock<LogControl> = OnceLock::new();

fn control() -> Result<&'static LogControl> {
    CONTROL
        .get()
        .ok_or_else(|| anyhow!("logging not yet initialized"))
}

/// `RUST_LOG` wins; otherwise `default_directive` (e.g. `"info"` or
/// `"warn,bearing_http=debug"`).
fn make_filter(default_directive: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(default_directive)
        .with_context(|| format!("invalid log level '{default_directive}'"))
}

// --- Public API ---

/// Installs the global subscriber. Later calls leave the first one in place.
///
/// # Errors
/// `default_directive` is not a valid `EnvFilter` directive and `RUST_LOG`
/// is unset.
pub fn init_logging(default_directive: &str) -> Result<()> {
    let level = make_filter(default_directive)?;

    let control = CONTROL.get_or_init(|| LogControl {
        stdout_on: Arc::new(AtomicBool::new(true)),
        file: Arc::new(Mutex::new(None)),
    });

    let stdout_on = control.stdout_on.clone();
    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalLine)
        .with_ansi(io::stdout().is_terminal())
        .with_filter(filter_fn(move |_| stdout_on.load(Ordering::Relaxed)));

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalLine)
        .with_ansi(false)
        .with_writer(LogFile(control.file.clone()));

    // A subscriber installed earlier (tests, embedding) keeps precedence.
    let _ = tracing_subscriber::registry()
        .with(level)
        .with(stdout_layer)
        .with(file_layer)
        .try_init();
    Ok(())
}

/// Shows or hides stdout log output. The log file is unaffected.
pub fn set_stdout_enabled(enabled: bool) -> Result<()> {
    control()?.stdout_on.store(enabled, Ordering::Relaxed);
    Ok(())
}

/// Appends log output to `path` from now on, closing any previous log file.
/// The parent directory must exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let control = control()?;
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;

    *lock(&control.file) = Some(file);
    Ok(())
}

/// Logs a failed UI task with context.
pub fn log_task_error(
    task_name: &'static str,
    result: Result<()>,
) {
    if let Err(error) = result {
        error!(task = task_name, ?error, "background task failed");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bad_default_directive_is_rejected() {
        // RUST_LOG takes precedence over the default.
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let err = make_filter("bearing_ui=loudest").unwrap_err();

        assert!(err.to_string().contains("invalid log level"));
    }

    #[test]
    fn closed_log_file_swallows_records() {
        let target = LogFile(Arc::new(Mutex::new(None)));
        let mut writer = target.make_writer();

        assert_eq!(writer.write(b"dropped").unwrap(), 7);
        writer.flush().unwrap();
    }

    #[test]
    fn open_log_file_receives_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bearing.log");
        let target = LogFile(Arc::new(Mutex::new(Some(File::create(&path).unwrap()))));

        {
            let mut writer = target.make_writer();
            writer.write_all(b"hello\n").unwrap();
            writer.flush().unwrap();
        }

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn switches_work_after_init() {
        init_logging("info").unwrap();
        let dir = tempfile::tempdir().unwrap();

        set_stdout_enabled(false).unwrap();
        set_stdout_enabled(true).unwrap();
        enable_file_logging(&dir.path().join("run.log")).unwrap();

        assert!(dir.path().join("run.log").exists());
    }
}
