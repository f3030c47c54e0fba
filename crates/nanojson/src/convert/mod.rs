//! Type-directed conversion between native types and [`Value`].
//!
//! Every convertible type belongs to exactly one [`Category`]. The categories,
//! from highest to lowest priority:
//!
//! 1. [`Category::Value`]: `Value` itself, converted by cloning.
//! 2. [`Category::Primitive`]: `()`, `bool`, the numeric types, strings.
//! 3. [`Category::Sequence`]: `Vec<U>`, `VecDeque<U>`, `[U; N]`, `[U]`.
//! 4. [`Category::Map`]: `BTreeMap`, `HashMap` and `IndexMap` keyed by `String`.
//! 5. [`Category::Aggregate`]: types registered with [`json_adapt!`](crate::json_adapt).
//! 6. [`Category::Stream`]: types registered with [`json_stream!`](crate::json_stream).
//!
//! The first four categories are implemented here for a closed set of types,
//! so user code can only add types to the last two. A type that both declares
//! a field list and implements [`TextStream`](stream::TextStream) is converted
//! as an aggregate as long as it is registered with `json_adapt!`; registering
//! one type with both macros does not compile.
//!
//! [`ToJson`] (build) is total. [`FromJson`] (extract) returns `None` on any
//! mismatch, including a mismatch deep inside a container or field; it never
//! returns a partially filled value.

pub mod aggregate;
mod interop;
mod map;
mod primitive;
mod sequence;
pub mod stream;

use std::fmt;

use crate::value::Value;

/// Conversion category of a native type.
///
/// Variants are declared, and ordered, by dispatch priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Value,
    Primitive,
    Sequence,
    Map,
    Aggregate,
    Stream,
}

impl Category {
    /// All categories, highest priority first.
    pub const ALL: [Category; 6] = [
        Category::Value,
        Category::Primitive,
        Category::Sequence,
        Category::Map,
        Category::Aggregate,
        Category::Stream,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Value => "value",
            Category::Primitive => "primitive",
            Category::Sequence => "sequence",
            Category::Map => "map",
            Category::Aggregate => "aggregate",
            Category::Stream => "stream",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Builds a [`Value`] from a native value. Never fails.
pub trait ToJson {
    const CATEGORY: Category;

    fn to_json(&self) -> Value;
}

/// Extracts a native value from a [`Value`].
pub trait FromJson: ToJson + Sized {
    fn from_json(value: &Value) -> Option<Self>;
}

/// Builds a [`Value`] from any convertible native value.
pub fn build<T: ToJson + ?Sized>(value: &T) -> Value {
    value.to_json()
}

/// Extracts `T` from `value`, or `None` if the shapes do not match.
pub fn extract<T: FromJson>(value: &Value) -> Option<T> {
    T::from_json(value)
}

/// The category `T` is dispatched through.
pub fn category<T: ToJson + ?Sized>() -> Category {
    T::CATEGORY
}

impl Value {
    /// Extracts `T` from this value. Same as [`extract`].
    pub fn to<T: FromJson>(&self) -> Option<T> {
        T::from_json(self)
    }
}

impl ToJson for Value {
    const CATEGORY: Category = Category::Value;

    fn to_json(&self) -> Value {
        self.clone()
    }
}

impl FromJson for Value {
    fn from_json(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl<T: ToJson + ?Sized> ToJson for &T {
    const CATEGORY: Category = T::CATEGORY;

    fn to_json(&self) -> Value {
        (**self).to_json()
    }
}
