//! JSON text serializer.
//!
//! Two layouts are supported:
//! - [`Format::Compact`]: no whitespace at all, `,` and `:` unpadded.
//! - [`Format::Pretty`]: one element per line, nested levels indented by
//!   [`PRETTY_INDENT`], `": "` between key and value. Empty containers stay on
//!   one line as `[]` / `{}`.
//!
//! Object members are written in the object's iteration (insertion) order.

mod number;

pub use number::{write_f64, MAX_SAFE_INTEGER};

use crate::value::{Object, Value};

/// Indentation unit of the pretty layout: two spaces.
pub const PRETTY_INDENT: &str = "  ";

/// Output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Compact,
    Pretty,
}

/// Writes values into an owned text buffer.
pub struct Serializer {
    out: String,
    format: Format,
    level: usize,
}

impl Serializer {
    pub fn new(format: Format) -> Self {
        Self {
            out: String::new(),
            format,
            level: 0,
        }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Appends `value` to the buffer.
    pub fn write(&mut self, value: &Value) {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(true) => self.out.push_str("true"),
            Value::Bool(false) => self.out.push_str("false"),
            Value::Number(n) => write_f64(&mut self.out, *n),
            Value::String(s) => write_str(&mut self.out, s),
            Value::Array(items) => self.write_array(items),
            Value::Object(members) => self.write_object(members),
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn newline(&mut self) {
        if self.format == Format::Pretty {
            self.out.push('\n');
            for _ in 0..self.level {
                self.out.push_str(PRETTY_INDENT);
            }
        }
    }

    fn write_array(&mut self, items: &[Value]) {
        if items.is_empty() {
            self.out.push_str("[]");
            return;
        }
        self.out.push('[');
        self.level += 1;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.newline();
            self.write(item);
        }
        self.level -= 1;
        self.newline();
        self.out.push(']');
    }

    fn write_object(&mut self, members: &Object) {
        if members.is_empty() {
            self.out.push_str("{}");
            return;
        }
        self.out.push('{');
        self.level += 1;
        for (i, (key, value)) in members.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.newline();
            write_str(&mut self.out, key);
            self.out.push(':');
            if self.format == Format::Pretty {
                self.out.push(' ');
            }
            self.write(value);
        }
        self.level -= 1;
        self.newline();
        self.out.push('}');
    }
}

/// Renders `value` in the given layout.
pub fn to_string(value: &Value, format: Format) -> String {
    let mut serializer = Serializer::new(format);
    serializer.write(value);
    serializer.finish()
}

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Appends `s` as a quoted JSON string.
///
/// Quotes, backslashes and all control characters are escaped; everything
/// else, including `/` and non-ASCII text, is copied through.
pub fn write_str(out: &mut String, s: &str) {
    out.push('"');
    let mut run = 0;
    for (i, byte) in s.bytes().enumerate() {
        let short = match byte {
            b'"' => "\\\"",
            b'\\' => "\\\\",
            b'\n' => "\\n",
            b'\r' => "\\r",
            b'\t' => "\\t",
            0x08 => "\\b",
            0x0c => "\\f",
            0x00..=0x1f => "",
            _ => continue,
        };
        out.push_str(&s[run..i]);
        if short.is_empty() {
            out.push_str("\\u00");
            out.push(char::from(HEX[usize::from(byte >> 4)]));
            out.push(char::from(HEX[usize::from(byte & 0x0f)]));
        } else {
            out.push_str(short);
        }
        run = i + 1;
    }
    out.push_str(&s[run..]);
    out.push('"');
}
