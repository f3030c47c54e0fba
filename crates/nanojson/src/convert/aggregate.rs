//! User-declared aggregates: types that register an ordered field list.
//!
//! Each [`Field`] pairs an object key with two accessors, one that builds the
//! field's value and one that extracts it into a target. [`build`] and
//! [`extract`] walk the list generically. Registration normally goes through
//! [`json_adapt!`](crate::json_adapt):
//!
//! ```
//! #[derive(Debug, Default, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//!     label: String,
//! }
//!
//! nanojson::json_adapt!(Point { x, y, label as "name" });
//!
//! let text = nanojson::serialize(&Point { x: 1, y: 2, label: "p".into() });
//! assert_eq!(text, r#"{"x":1,"y":2,"name":"p"}"#);
//! let back: Point = nanojson::parse(&text).unwrap();
//! assert_eq!(back.label, "p");
//! ```

use std::any::type_name;

use crate::value::{Object, Value};

/// One declared field: object key plus accessors.
pub struct Field<T: 'static> {
    name: &'static str,
    build: fn(&T) -> Value,
    extract: fn(&mut T, &Value) -> Option<()>,
}

impl<T: 'static> Field<T> {
    pub const fn new(
        name: &'static str,
        build: fn(&T) -> Value,
        extract: fn(&mut T, &Value) -> Option<()>,
    ) -> Self {
        Self {
            name,
            build,
            extract,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// A type with a declared, ordered field list.
///
/// Extraction starts from `Default::default()` and overwrites every declared
/// field, so fields left out of the list keep their default.
pub trait Aggregate: Default + 'static {
    const FIELDS: &'static [Field<Self>];
}

/// Builds an object with one member per declared field, in declaration order.
pub fn build<T: Aggregate>(aggregate: &T) -> Value {
    let mut object = Object::with_capacity(T::FIELDS.len());
    for field in T::FIELDS {
        object.insert(field.name.to_owned(), (field.build)(aggregate));
    }
    Value::Object(object)
}

/// Extracts an aggregate from an object.
///
/// Every declared field must be present and convertible; members that are not
/// declared are ignored.
pub fn extract<T: Aggregate>(value: &Value) -> Option<T> {
    let object = value.as_object()?;
    let mut out = T::default();
    for field in T::FIELDS {
        let Some(member) = object.get(field.name) else {
            tracing::trace!(
                aggregate = type_name::<T>(),
                field = field.name,
                "aggregate field missing"
            );
            return None;
        };
        if (field.extract)(&mut out, member).is_none() {
            tracing::trace!(
                aggregate = type_name::<T>(),
                field = field.name,
                kind = %member.kind(),
                "aggregate field has the wrong shape"
            );
            return None;
        }
    }
    Some(out)
}

/// Registers a struct as an aggregate.
///
/// Lists the fields to map, in order. `field as "key"` maps a field to a
/// different object key. The struct must implement `Default`, and every listed
/// field's type must itself be convertible.
#[macro_export]
macro_rules! json_adapt {
    ($ty:ty { $($field:ident $(as $key:literal)?),+ $(,)? }) => {
        impl $crate::Aggregate for $ty {
            const FIELDS: &'static [$crate::Field<Self>] = &[
                $(
                    $crate::Field::new(
                        $crate::__field_key!($field $(, $key)?),
                        |this| $crate::ToJson::to_json(&this.$field),
                        |this, value| {
                            this.$field = $crate::FromJson::from_json(value)?;
                            ::core::option::Option::Some(())
                        },
                    ),
                )+
            ];
        }

        impl $crate::ToJson for $ty {
            const CATEGORY: $crate::Category = $crate::Category::Aggregate;

            fn to_json(&self) -> $crate::Value {
                $crate::convert::aggregate::build(self)
            }
        }

        impl $crate::FromJson for $ty {
            fn from_json(value: &$crate::Value) -> ::core::option::Option<Self> {
                $crate::convert::aggregate::extract(value)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_key {
    ($field:ident) => {
        ::core::stringify!($field)
    };
    ($field:ident, $key:literal) => {
        $key
    };
}
