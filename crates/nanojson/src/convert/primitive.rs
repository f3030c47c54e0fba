//! Primitive conversions: null, booleans, numbers and strings.
//!
//! Numbers are stored as `f64`. Extracting an integer succeeds only when the
//! stored number has no fractional part and lies inside the target type's
//! range; there is no truncation or saturation.

use super::{Category, FromJson, ToJson};
use crate::value::Value;

impl ToJson for () {
    const CATEGORY: Category = Category::Primitive;

    fn to_json(&self) -> Value {
        Value::Null
    }
}

impl FromJson for () {
    fn from_json(value: &Value) -> Option<Self> {
        value.is_null().then_some(())
    }
}

impl ToJson for bool {
    const CATEGORY: Category = Category::Primitive;

    fn to_json(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromJson for bool {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

/// `true` if `n` is a whole number in `[min, max]`.
///
/// `max + 1.0` keeps the comparison exact for 64-bit bounds, where `max` itself
/// rounds up to the next power of two.
fn integral_in_range(n: f64, min: f64, max: f64) -> bool {
    n.fract() == 0.0 && n >= min && n < max + 1.0
}

macro_rules! integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToJson for $ty {
                const CATEGORY: Category = Category::Primitive;

                fn to_json(&self) -> Value {
                    Value::Number(*self as f64)
                }
            }

            impl FromJson for $ty {
                fn from_json(value: &Value) -> Option<Self> {
                    let n = value.as_f64()?;
                    integral_in_range(n, <$ty>::MIN as f64, <$ty>::MAX as f64).then(|| n as $ty)
                }
            }
        )*
    };
}

integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ToJson for f64 {
    const CATEGORY: Category = Category::Primitive;

    fn to_json(&self) -> Value {
        Value::Number(*self)
    }
}

impl FromJson for f64 {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl ToJson for f32 {
    const CATEGORY: Category = Category::Primitive;

    fn to_json(&self) -> Value {
        Value::Number(f64::from(*self))
    }
}

impl FromJson for f32 {
    fn from_json(value: &Value) -> Option<Self> {
        let n = value.as_f64()?;
        if n.is_finite() && n.abs() > f64::from(f32::MAX) {
            return None;
        }
        Some(n as f32)
    }
}

impl ToJson for str {
    const CATEGORY: Category = Category::Primitive;

    fn to_json(&self) -> Value {
        Value::String(self.to_owned())
    }
}

impl ToJson for String {
    const CATEGORY: Category = Category::Primitive;

    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }
}

impl FromJson for String {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}
