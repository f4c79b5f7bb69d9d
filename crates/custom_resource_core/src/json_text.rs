//! Single-line JSON text with spaced separators (`", "` and `": "`) and
//! ASCII-only output, non-ASCII characters escaped as `\uXXXX`.

use std::io;

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

#[derive(Debug, Default, Clone, Copy)]
struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut ascii_start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[ascii_start..index])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            ascii_start = index + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[ascii_start..])
    }
}

pub fn to_spaced_json(value: &impl Serialize) -> Result<String, serde_json::Error> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, SpacedAsciiFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(serde_json::Error::custom)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn separators_are_spaced() {
        let value = json!({"StatusCode": 200, "Payload": {"ok": true}, "Tags": [1, 2]});
        assert_eq!(
            to_spaced_json(&value).expect("serialize"),
            r#"{"StatusCode": 200, "Payload": {"ok": true}, "Tags": [1, 2]}"#
        );
    }

    #[test]
    fn empty_containers_stay_compact() {
        assert_eq!(to_spaced_json(&json!({})).expect("serialize"), "{}");
        assert_eq!(to_spaced_json(&json!([])).expect("serialize"), "[]");
    }

    #[test]
    fn non_ascii_text_is_escaped() {
        let value = json!({"Payload": "café \u{1F600}"});
        assert_eq!(
            to_spaced_json(&value).expect("serialize"),
            r#"{"Payload": "caf\u00e9 \ud83d\ude00"}"#
        );
    }

    #[test]
    fn control_characters_keep_standard_escapes() {
        let value = json!("line\n\"quoted\"");
        assert_eq!(
            to_spaced_json(&value).expect("serialize"),
            r#""line\n\"quoted\"""#
        );
    }
}
