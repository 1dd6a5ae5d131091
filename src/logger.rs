use chrono::Local;
use log::Level;
use std::io::Write;

/// Writes log records to stderr, stdout is reserved for the sequence
pub fn configure_logger(log_level: Level) -> () {
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(buf,
                "{} {} [{}] {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.target(),
                record.level(),
                record.args(),
            )
        })
        .filter(None, log_level.to_level_filter())
        .target(env_logger::Target::Stderr)
        .init();
}
