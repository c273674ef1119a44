use crate::ssl::enums::certificate_error::CertificateError;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use std::io::ErrorKind;
use std::path::Path;

pub fn setup_logging(log_level: &str)
{
    let level = match log_level {
        "off" => log::LevelFilter::Off,
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => {
            panic!("Unknown log level encountered: '{}'", log_level);
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(_err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
    {
        panic!("Failed to initialize logging.")
    }
    info!("logging initialized.");
}

pub fn io_error(path: &Path, error: std::io::Error) -> CertificateError
{
    if error.kind() == ErrorKind::NotFound {
        return CertificateError::NotFound { path: path.to_path_buf() };
    }
    CertificateError::Io { path: path.to_path_buf(), source: error }
}

pub fn read_file(path: &Path) -> Result<Vec<u8>, CertificateError>
{
    std::fs::read(path).map_err(|e| io_error(path, e))
}

/// Succeeds when `path` exists and is a regular file (symlinks are followed).
pub fn check_regular_file(path: &Path) -> Result<(), CertificateError>
{
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;
    if !metadata.is_file() {
        let found = if metadata.is_dir() { "a directory" } else { "a special file" };
        return Err(CertificateError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(ErrorKind::InvalidInput, format!("expected a regular file, found {}", found)),
        });
    }
    Ok(())
}
