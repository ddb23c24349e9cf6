use crate::error::{Error, Result};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Install a global subscriber writing to `log_file_path`.
///
/// `log_level` is any `EnvFilter` directive (`"debug"`,
/// `"quran_search=trace"`), `info` when not given. Returns the log file path.
pub fn init_tracing(log_file_path: &str, log_level: Option<&str>) -> Result<String> {
    let path = Path::new(log_file_path);
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| Error::TracingInit(format!("invalid log file path {log_file_path:?}")))?;

    std::fs::create_dir_all(directory)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .map_err(|e| Error::TracingInit(e.to_string()))?;

    let filter = EnvFilter::try_new(log_level.unwrap_or("info"))
        .map_err(|e| Error::TracingInit(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| Error::TracingInit(e.to_string()))?;

    tracing::info!(path = log_file_path, "Tracing initialized");
    Ok(log_file_path.to_string())
}

/// Route panics through tracing before the default hook prints them.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_default();
        tracing::error!(location = %location, "Panic: {}", info);
        default_hook(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    // the global subscriber can only be set once per test binary
    #[test]
    fn test_init_tracing_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("search.log");
        let path_str = path.to_str().unwrap();

        let returned = init_tracing(path_str, Some("debug")).unwrap();
        assert_eq!(returned, path_str);
        tracing::info!("hello from the test");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Tracing initialized"));
        assert!(contents.contains("hello from the test"));

        assert!(matches!(
            init_tracing(path_str, None),
            Err(Error::TracingInit(_))
        ));
    }
}
