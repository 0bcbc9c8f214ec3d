//! Walk through the entry points: severities, prefixes, buffers, and a
//! JSON-lines sink on stdout.
//!
//! Run with `cargo run -p termlog --example demo`.

use termlog::{Color, LogOptions, Logger};
use termlog_sink::JsonLinesSink;

fn main() -> Result<(), termlog::LogError> {
    let mut logger = Logger::new();

    logger.info("starting up", &LogOptions::default())?;
    logger.warn("cache miss", &LogOptions::new().with_name("store"))?;
    logger.error(
        "handshake failed",
        &LogOptions::new().with_error("connection reset by peer"),
    )?;
    logger.debug(
        "retrying",
        &LogOptions::new().with_time().with_color(Color::BrightBlue),
    )?;

    logger.buffer_hex(b"DART", &LogOptions::default())?;
    logger.buffer_char(&[0x00, b'O', b'K', 0xFF], &LogOptions::default())?;

    logger.info("first tick", &LogOptions::new().with_ms_diff())?;
    std::thread::sleep(std::time::Duration::from_millis(25));
    logger.info("second tick", &LogOptions::new().with_ms_diff())?;

    // Mirror everything to stdout as JSON lines from here on.
    logger.register_sink(JsonLinesSink::new(std::io::stdout()));
    logger.info(
        "structured too",
        &LogOptions::new().with_name("demo").with_sequence_number(1),
    )?;

    Ok(())
}
