//! Text-stream fallback for types without a field list.
//!
//! A type that can render itself to text and parse itself back implements
//! [`TextStream`] and registers with [`json_stream!`](crate::json_stream). It
//! is then stored as an opaque JSON string.

use crate::value::Value;

/// Text round-trip capability.
pub trait TextStream: Sized {
    fn render(&self) -> String;

    fn parse_text(text: &str) -> Option<Self>;
}

/// Stores the rendered text as a JSON string.
pub fn build<T: TextStream>(value: &T) -> Value {
    Value::String(value.render())
}

/// Parses a JSON string back through [`TextStream::parse_text`].
pub fn extract<T: TextStream>(value: &Value) -> Option<T> {
    T::parse_text(value.as_str()?)
}

/// Makes [`TextStream`] types convertible.
#[macro_export]
macro_rules! json_stream {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::ToJson for $ty {
                const CATEGORY: $crate::Category = $crate::Category::Stream;

                fn to_json(&self) -> $crate::Value {
                    $crate::convert::stream::build(self)
                }
            }

            impl $crate::FromJson for $ty {
                fn from_json(value: &$crate::Value) -> ::core::option::Option<Self> {
                    $crate::convert::stream::extract(value)
                }
            }
        )+
    };
}
