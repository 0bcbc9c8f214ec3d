//! crates/core/src/event.rs
//! Structured event record delivered to a registered sink.

use crate::color::Color;
use crate::kind::LogKind;
use crate::render::BufferRender;

/// Structured log event, constructed fresh per dispatch and handed to the
/// registered [`Sink`](crate::sink::Sink).
///
/// Serializes to a JSON object using the original wire key spelling
/// (`timePrinted`, `msDiffPrinted`, `timeHHmmss`, `sequenceNumber`,
/// `ansiEnabled`, `stackTrace`). Optional fields that are absent are omitted
/// from the serialized object entirely. The payload contains only strings,
/// numbers, booleans, and arrays, so any JSON encoder can carry it.
///
/// The `message` field is the full console line post-formatting (time or
/// latency prefix included) but before any ANSI color wrapping.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEvent {
    /// Entry-point tag, one of `logi|logw|loge|logd|hex|chr|ansi`.
    pub kind: LogKind,
    /// RFC 3339 instant at which the event was dispatched.
    pub timestamp: String,
    /// Formatted console line, prefix included, never ANSI-wrapped.
    pub message: String,
    /// Whether the `[HH:mm:ss]` prefix was requested.
    pub time_printed: bool,
    /// Whether the `[HH:mm:ss] [+delta]` prefix was requested.
    ///
    /// Never true together with [`LogEvent::time_printed`]; the dispatcher
    /// rejects that combination before constructing an event.
    pub ms_diff_printed: bool,
    /// Wall-clock `HH:mm:ss`, present iff a time or latency prefix was
    /// requested.
    #[serde(rename = "timeHHmmss", skip_serializing_if = "Option::is_none")]
    pub time_hhmmss: Option<String>,
    /// Caller-supplied sequence number, passed through unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<u64>,
    /// Integer severity, 0 unless overridden.
    pub level: i32,
    /// Channel tag grouping related calls, empty unless overridden.
    pub name: String,
    /// Stringified execution-context handle, if one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    /// Textual representation of the associated error value, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Textual stack trace, if one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
    /// Snapshot of the logger's ANSI flag at dispatch time.
    pub ansi_enabled: bool,
    /// Resolved color, recorded by name.
    pub color: Color,
    /// Buffer kinds only: the raw bytes that were rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<Vec<u8>>,
    /// Buffer kinds only: the render mode tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render: Option<BufferRender>,
    /// Buffer kinds only: the rendered body, without the byte-count prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LogEvent {
        LogEvent {
            kind: LogKind::Info,
            timestamp: "2026-08-07T10:15:30.000000+00:00".to_owned(),
            message: "Hello, world!".to_owned(),
            time_printed: false,
            ms_diff_printed: false,
            time_hhmmss: None,
            sequence_number: None,
            level: 0,
            name: String::new(),
            zone: None,
            error: None,
            stack_trace: None,
            ansi_enabled: true,
            color: Color::Green,
            bytes: None,
            render: None,
            text: None,
        }
    }

    #[test]
    fn serializes_with_wire_keys() {
        let value = serde_json::to_value(sample()).expect("serialize");
        let object = value.as_object().expect("object");

        assert_eq!(object["kind"], "logi");
        assert_eq!(object["message"], "Hello, world!");
        assert_eq!(object["timePrinted"], false);
        assert_eq!(object["msDiffPrinted"], false);
        assert_eq!(object["level"], 0);
        assert_eq!(object["name"], "");
        assert_eq!(object["ansiEnabled"], true);
        assert_eq!(object["color"], "green");
    }

    #[test]
    fn absent_optionals_are_omitted() {
        let value = serde_json::to_value(sample()).expect("serialize");
        let object = value.as_object().expect("object");

        for key in [
            "timeHHmmss",
            "sequenceNumber",
            "zone",
            "error",
            "stackTrace",
            "bytes",
            "render",
            "text",
        ] {
            assert!(!object.contains_key(key), "unexpected key {key}");
        }
    }

    #[test]
    fn present_optionals_use_wire_keys() {
        let event = LogEvent {
            time_printed: true,
            time_hhmmss: Some("10:15:30".to_owned()),
            sequence_number: Some(7),
            zone: Some("request-42".to_owned()),
            error: Some("boom".to_owned()),
            stack_trace: Some("at main".to_owned()),
            ..sample()
        };

        let value = serde_json::to_value(event).expect("serialize");
        let object = value.as_object().expect("object");

        assert_eq!(object["timeHHmmss"], "10:15:30");
        assert_eq!(object["sequenceNumber"], 7);
        assert_eq!(object["zone"], "request-42");
        assert_eq!(object["error"], "boom");
        assert_eq!(object["stackTrace"], "at main");
    }

    #[test]
    fn buffer_fields_serialize_as_plain_data() {
        let event = LogEvent {
            kind: LogKind::Hex,
            message: "(4 bytes) 44 41 52 54".to_owned(),
            color: Color::Cyan,
            bytes: Some(vec![0x44, 0x41, 0x52, 0x54]),
            render: Some(BufferRender::Hex),
            text: Some("44 41 52 54".to_owned()),
            ..sample()
        };

        let value = serde_json::to_value(event).expect("serialize");
        let object = value.as_object().expect("object");

        assert_eq!(object["bytes"], serde_json::json!([68, 65, 82, 84]));
        assert_eq!(object["render"], "hex");
        assert_eq!(object["text"], "44 41 52 54");
    }
}
