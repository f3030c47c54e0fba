//! nanojson - a small JSON library built around a type-directed conversion
//! layer.
//!
//! The crate has three parts:
//!
//! - [`Value`], an owned JSON tree whose objects keep insertion order;
//! - a strict RFC 8259 [parser](parse::Parser) and a compact/pretty
//!   [serializer](serialize::Serializer);
//! - the [`ToJson`] / [`FromJson`] conversion traits, which move native types
//!   to and from [`Value`] by [`Category`]: primitives, sequences, string-keyed
//!   maps, registered aggregates ([`json_adapt!`]) and text-stream types
//!   ([`json_stream!`]).
//!
//! # Example
//!
//! ```
//! let names: Vec<String> = nanojson::parse(r#"["a", "b", "c"]"#).unwrap();
//! assert_eq!(names, ["a", "b", "c"]);
//!
//! assert_eq!(nanojson::serialize(&[1, 2, 3]), "[1,2,3]");
//!
//! let err = nanojson::parse::<Vec<String>>("not json").unwrap_err();
//! assert!(err.is_syntax());
//! let err = nanojson::parse::<Vec<String>>("[1, 2]").unwrap_err();
//! assert!(err.is_shape());
//! ```

mod assign;
pub mod convert;
mod error;
pub mod parse;
pub mod serialize;
mod value;

pub use assign::{assign_tuple, Assign};
pub use convert::aggregate::{Aggregate, Field};
pub use convert::stream::TextStream;
pub use convert::{build, category, extract, Category, FromJson, ToJson};
pub use error::Error;
pub use parse::{ParseError, ParseErrorKind, ParseOptions};
pub use serialize::Format;
pub use value::{Array, Kind, Object, Value};

/// Parses `text` and extracts a `T` from it.
///
/// Fails with [`Error::Syntax`] when the text is not JSON and with
/// [`Error::Shape`] when it is JSON of a different shape.
pub fn parse<T: FromJson>(text: &str) -> Result<T, Error> {
    parse_with(text, ParseOptions::default())
}

/// [`parse`] with explicit parser options.
pub fn parse_with<T: FromJson>(text: &str, options: ParseOptions) -> Result<T, Error> {
    let value = parse::parse_value_with(text, options)?;
    T::from_json(&value).ok_or_else(|| {
        tracing::debug!(
            target_type = std::any::type_name::<T>(),
            kind = %value.kind(),
            "JSON value does not match requested type"
        );
        Error::shape::<T>()
    })
}

/// Builds `value` and renders it as compact JSON.
pub fn serialize<T: ToJson + ?Sized>(value: &T) -> String {
    value.to_json().serialize(Format::Compact)
}

/// Builds `value` and renders it with the pretty layout.
pub fn serialize_pretty<T: ToJson + ?Sized>(value: &T) -> String {
    value.to_json().serialize(Format::Pretty)
}
