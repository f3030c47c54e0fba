//! String-keyed maps convert to objects, value by value.
//!
//! Objects built from a `BTreeMap` list keys in sorted order, from an
//! `IndexMap` in insertion order, from a `HashMap` in that map's iteration
//! order.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;

use super::{Category, FromJson, ToJson};
use crate::value::{Object, Value};

fn build_members<'a, T, I>(entries: I) -> Value
where
    T: ToJson + 'a,
    I: Iterator<Item = (&'a String, &'a T)>,
{
    let object: Object = entries.map(|(k, v)| (k.clone(), v.to_json())).collect();
    Value::Object(object)
}

fn extract_members<T, M>(value: &Value) -> Option<M>
where
    T: FromJson,
    M: FromIterator<(String, T)>,
{
    value
        .as_object()?
        .iter()
        .map(|(k, v)| Some((k.clone(), T::from_json(v)?)))
        .collect()
}

impl<T: ToJson> ToJson for BTreeMap<String, T> {
    const CATEGORY: Category = Category::Map;

    fn to_json(&self) -> Value {
        build_members(self.iter())
    }
}

impl<T: FromJson> FromJson for BTreeMap<String, T> {
    fn from_json(value: &Value) -> Option<Self> {
        extract_members(value)
    }
}

impl<T: ToJson, S: BuildHasher> ToJson for HashMap<String, T, S> {
    const CATEGORY: Category = Category::Map;

    fn to_json(&self) -> Value {
        build_members(self.iter())
    }
}

impl<T: FromJson, S: BuildHasher + Default> FromJson for HashMap<String, T, S> {
    fn from_json(value: &Value) -> Option<Self> {
        extract_members(value)
    }
}

impl<T: ToJson, S: BuildHasher> ToJson for IndexMap<String, T, S> {
    const CATEGORY: Category = Category::Map;

    fn to_json(&self) -> Value {
        build_members(self.iter())
    }
}

impl<T: FromJson, S: BuildHasher + Default> FromJson for IndexMap<String, T, S> {
    fn from_json(value: &Value) -> Option<Self> {
        extract_members(value)
    }
}
