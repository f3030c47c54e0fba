//! Sequences map to arrays, element by element, in order.

use std::collections::VecDeque;

use super::{Category, FromJson, ToJson};
use crate::value::Value;

fn extract_items<T: FromJson>(value: &Value) -> Option<Vec<T>> {
    value.as_array()?.iter().map(T::from_json).collect()
}

impl<T: ToJson> ToJson for [T] {
    const CATEGORY: Category = Category::Sequence;

    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(ToJson::to_json).collect())
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    const CATEGORY: Category = Category::Sequence;

    fn to_json(&self) -> Value {
        self.as_slice().to_json()
    }
}

impl<T: FromJson> FromJson for Vec<T> {
    fn from_json(value: &Value) -> Option<Self> {
        extract_items(value)
    }
}

impl<T: ToJson> ToJson for VecDeque<T> {
    const CATEGORY: Category = Category::Sequence;

    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(ToJson::to_json).collect())
    }
}

impl<T: FromJson> FromJson for VecDeque<T> {
    fn from_json(value: &Value) -> Option<Self> {
        extract_items(value).map(VecDeque::from)
    }
}

impl<T: ToJson, const N: usize> ToJson for [T; N] {
    const CATEGORY: Category = Category::Sequence;

    fn to_json(&self) -> Value {
        self.as_slice().to_json()
    }
}

/// Fixed-size arrays only accept arrays of exactly `N` elements.
impl<T: FromJson, const N: usize> FromJson for [T; N] {
    fn from_json(value: &Value) -> Option<Self> {
        if value.as_array()?.len() != N {
            return None;
        }
        extract_items::<T>(value)?.try_into().ok()
    }
}
