//! Integration tests for the byte-buffer entry points.

use termlog::{BufferRender, Color, LogError, LogKind, LogOptions, Logger, WriterChannel};
use termlog_sink::MemorySink;

fn test_logger() -> Logger<WriterChannel<Vec<u8>>> {
    Logger::with_channel(WriterChannel::new(Vec::new()))
}

fn console(logger: &Logger<WriterChannel<Vec<u8>>>) -> String {
    String::from_utf8(logger.channel().get_ref().clone()).expect("utf-8 console output")
}

#[test]
fn hex_buffer_renders_and_records() {
    let mut logger = test_logger();
    logger.set_ansi_enabled(false);
    let sink = MemorySink::new();
    logger.register_sink(sink.clone());

    logger
        .buffer_hex(&[0x44, 0x41, 0x52, 0x54], &LogOptions::default())
        .expect("log succeeds");

    let events = sink.take();
    let event = &events[0];
    assert_eq!(event.kind, LogKind::Hex);
    assert_eq!(event.message, "(4 bytes) 44 41 52 54");
    assert_eq!(event.bytes, Some(vec![68, 65, 82, 84]));
    assert_eq!(event.render, Some(BufferRender::Hex));
    assert_eq!(event.text.as_deref(), Some("44 41 52 54"));
    assert_eq!(event.color, Color::Cyan);

    assert_eq!(console(&logger), "(4 bytes) 44 41 52 54\n");
}

#[test]
fn char_buffer_renders_printable_tokens() {
    let mut logger = test_logger();
    let sink = MemorySink::new();
    logger.register_sink(sink.clone());

    logger
        .buffer_char(&[0x44, 0x41, 0x52, 0x54], &LogOptions::default())
        .expect("log succeeds");

    let events = sink.take();
    assert_eq!(events[0].kind, LogKind::Char);
    assert_eq!(events[0].message, "(4 bytes) D A R T");
    assert_eq!(events[0].text.as_deref(), Some("D A R T"));
}

#[test]
fn char_buffer_substitutes_hex_for_unprintables() {
    let mut logger = test_logger();
    let sink = MemorySink::new();
    logger.register_sink(sink.clone());

    logger
        .buffer_char(&[0x00, b'O', b'K', 0xFF], &LogOptions::default())
        .expect("log succeeds");

    assert_eq!(sink.take()[0].message, "(4 bytes) 0x00 O K 0xFF");
}

#[test]
fn ansi_buffer_is_the_raw_string() {
    let mut logger = test_logger();
    logger.set_ansi_enabled(false);
    let sink = MemorySink::new();
    logger.register_sink(sink.clone());

    let buf = [27, 91, 51, 49, 109, b'A', b'N', b'S', b'I'];
    logger.buffer_ansi(&buf, &LogOptions::default()).expect("log succeeds");

    let events = sink.take();
    let event = &events[0];
    assert_eq!(event.kind, LogKind::Ansi);
    assert_eq!(event.text.as_deref(), Some("\x1b[31mANSI"));
    assert_eq!(event.message, "\x1b[31mANSI");
    assert_eq!(event.color, Color::White);

    // The raw escape reaches the console even with the color flag off.
    assert_eq!(console(&logger), "\x1b[31mANSI\n");
}

#[test]
fn ansi_buffer_with_colors_enabled_nests_inside_the_wrap() {
    let mut logger = test_logger();

    logger
        .buffer_ansi(&[27, 91, 51, 49, 109], &LogOptions::default())
        .expect("log succeeds");

    assert_eq!(console(&logger), "\x1b[37m\x1b[31m\x1b[0m\n");
}

#[test]
fn empty_buffer_renders_zero_count() {
    let mut logger = test_logger();
    logger.set_ansi_enabled(false);
    let sink = MemorySink::new();
    logger.register_sink(sink.clone());

    logger.buffer_hex(&[], &LogOptions::default()).expect("log succeeds");

    let events = sink.take();
    assert_eq!(events[0].message, "(0 bytes) ");
    assert_eq!(events[0].bytes, Some(Vec::new()));
    assert_eq!(events[0].text.as_deref(), Some(""));
}

#[test]
fn buffer_entry_points_accept_prefix_options() {
    let mut logger = test_logger();
    logger.set_ansi_enabled(false);
    let sink = MemorySink::new();
    logger.register_sink(sink.clone());

    logger
        .buffer_hex(&[0x0a, 0xff], &LogOptions::new().with_time())
        .expect("log succeeds");

    let events = sink.take();
    let event = &events[0];
    let hhmmss = event.time_hhmmss.as_deref().expect("time recorded");
    assert_eq!(event.message, format!("[{hhmmss}] (2 bytes) 0A FF"));
    // The rendered body is unaffected by the prefix.
    assert_eq!(event.text.as_deref(), Some("0A FF"));
}

#[test]
fn conflicting_prefix_options_fail_for_buffers_too() {
    let mut logger = test_logger();
    let sink = MemorySink::new();
    logger.register_sink(sink.clone());

    let options = LogOptions::new().with_time().with_ms_diff();
    let error = logger.buffer_hex(&[1, 2], &options).expect_err("must fail");
    assert!(matches!(error, LogError::ConflictingPrefixOptions));
    assert!(sink.is_empty());
}

#[test]
fn explicit_render_entry_point_matches_wrappers() {
    let mut logger = test_logger();
    let sink = MemorySink::new();
    logger.register_sink(sink.clone());

    logger
        .log_buffer(BufferRender::Char, b"OK", &LogOptions::default())
        .expect("log succeeds");

    let events = sink.take();
    assert_eq!(events[0].kind, LogKind::Char);
    assert_eq!(events[0].message, "(2 bytes) O K");
}

#[test]
fn severity_entry_points_carry_no_buffer_payload() {
    let mut logger = test_logger();
    let sink = MemorySink::new();
    logger.register_sink(sink.clone());

    logger
        .log(LogKind::Hex, "hand-written", &LogOptions::default())
        .expect("log succeeds");

    let events = sink.take();
    assert_eq!(events[0].kind, LogKind::Hex);
    assert_eq!(events[0].bytes, None);
    assert_eq!(events[0].render, None);
    assert_eq!(events[0].text, None);
}
