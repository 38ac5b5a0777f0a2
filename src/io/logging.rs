use std::fs::OpenOptions;
use std::io::Write;

/// Filter directive, e.g. `debug` or `docket=trace`. Logging is off when unset.
pub const LOG_ENV: &str = "DOCKET_LOG";
/// Destination file (appended to)
pub const LOG_FILE_ENV: &str = "DOCKET_LOG_FILE";
pub const DEFAULT_LOG_FILE: &str = "docket.log";

/// Route `log` records to a file when DOCKET_LOG is set. The TUI owns the
/// terminal, so nothing is ever written to stderr.
pub fn init_logging() {
    let filter = match std::env::var(LOG_ENV) {
        Ok(f) if !f.trim().is_empty() => f,
        _ => return,
    };
    let path = std::env::var(LOG_FILE_ENV).unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("warning: could not open log file {}: {}", path, e);
            return;
        }
    };

    let result = env_logger::Builder::new()
        .parse_filters(&filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
    if let Err(e) = result {
        eprintln!("warning: logger already initialized: {}", e);
    }
}
