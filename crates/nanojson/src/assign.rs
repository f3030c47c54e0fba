//! Positional extraction from an array into several targets.
//!
//! Failure is all-or-nothing: every element is extracted into a temporary
//! tuple first, and targets are written only after all of them succeeded. On
//! a length mismatch or a failed element no target is modified.

use std::any::type_name;

use crate::convert::FromJson;
use crate::error::Error;
use crate::value::Value;

/// Tuples that can be filled positionally from an array.
pub trait Assign: Sized {
    const LEN: usize;

    /// Extracts every position. `items` must hold exactly `LEN` elements.
    fn assign_from(items: &[Value]) -> Option<Self>;
}

macro_rules! tuple_assign {
    ($len:expr => $($name:ident $idx:tt),+) => {
        impl<$($name: FromJson),+> Assign for ($($name,)+) {
            const LEN: usize = $len;

            fn assign_from(items: &[Value]) -> Option<Self> {
                Some(($($name::from_json(items.get($idx)?)?,)+))
            }
        }
    };
}

tuple_assign!(1 => A 0);
tuple_assign!(2 => A 0, B 1);
tuple_assign!(3 => A 0, B 1, C 2);
tuple_assign!(4 => A 0, B 1, C 2, D 3);
tuple_assign!(5 => A 0, B 1, C 2, D 3, E 4);
tuple_assign!(6 => A 0, B 1, C 2, D 3, E 4, F 5);
tuple_assign!(7 => A 0, B 1, C 2, D 3, E 4, F 5, G 6);
tuple_assign!(8 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
tuple_assign!(9 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
tuple_assign!(10 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
tuple_assign!(11 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
tuple_assign!(12 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);

/// Extracts a tuple from an array of exactly matching length.
pub fn assign_tuple<T: Assign>(items: &[Value]) -> Result<T, Error> {
    if items.len() != T::LEN {
        tracing::debug!(
            expected = T::LEN,
            found = items.len(),
            "assign length mismatch"
        );
        return Err(Error::Length {
            expected: T::LEN,
            found: items.len(),
        });
    }
    T::assign_from(items).ok_or_else(|| {
        tracing::debug!(target_type = type_name::<T>(), "assign element mismatch");
        Error::shape::<T>()
    })
}

/// Writes the elements of an array into the given places, in order.
///
/// Evaluates to `Result<(), nanojson::Error>`. Nothing is written unless the
/// array length equals the number of places and every element converts.
///
/// ```
/// let array = nanojson::parse::<Vec<nanojson::Value>>("[1, 2, \"three\"]").unwrap();
/// let (mut a, mut b, mut c) = (0u8, 0i64, String::new());
/// nanojson::assign!(array, a, b, c).unwrap();
/// assert_eq!((a, b, c.as_str()), (1, 2, "three"));
/// ```
#[macro_export]
macro_rules! assign {
    ($array:expr, $($place:expr),+ $(,)?) => {
        match $crate::assign_tuple(::core::convert::AsRef::<[$crate::Value]>::as_ref(&$array)) {
            ::core::result::Result::Ok(values) => {
                ($($place,)+) = values;
                ::core::result::Result::<(), $crate::Error>::Ok(())
            }
            ::core::result::Result::Err(err) => ::core::result::Result::Err(err),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::build;

    #[test]
    fn tuple_from_matching_array() {
        let array = vec![Value::from(1), Value::from("x"), Value::Bool(true)];
        let (n, s, b): (i32, String, bool) = assign_tuple(&array).unwrap();
        assert_eq!((n, s.as_str(), b), (1, "x", true));
    }

    #[test]
    fn length_mismatch() {
        let array = vec![Value::from(1), Value::from(2), Value::from(3)];
        let err = assign_tuple::<(i32, i32)>(&array).unwrap_err();
        assert_eq!(
            err,
            Error::Length {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn element_mismatch() {
        let array = vec![Value::from(1), Value::from("two")];
        let err = assign_tuple::<(i32, i32)>(&array).unwrap_err();
        assert!(matches!(err, Error::Shape { .. }));
    }

    #[test]
    fn macro_writes_all_places() {
        let array = build(&[1, 2, 3]).into_array().unwrap();
        let (mut a, mut b, mut c) = (0, 0, 0);
        crate::assign!(array, a, b, c).unwrap();
        assert_eq!((a, b, c), (1, 2, 3));
    }

    #[test]
    fn macro_writes_nothing_on_failure() {
        let array = vec![Value::from(1), Value::from(2), Value::from("three")];
        let (mut a, mut b, mut c) = (-1, -1, -1);
        assert!(crate::assign!(array, a, b, c).is_err());
        assert_eq!((a, b, c), (-1, -1, -1));

        let (mut x, mut y) = (9, 9);
        let err = crate::assign!(array, x, y).unwrap_err();
        assert!(matches!(err, Error::Length { expected: 2, found: 3 }));
        assert_eq!((x, y), (9, 9));
    }

    #[test]
    fn macro_accepts_fields_and_slices() {
        struct Pair {
            left: String,
            right: f64,
        }
        let mut pair = Pair {
            left: String::new(),
            right: 0.0,
        };
        let items = [Value::from("l"), Value::from(0.25)];
        crate::assign!(&items[..], pair.left, pair.right).unwrap();
        assert_eq!(pair.left, "l");
        assert_eq!(pair.right, 0.25);
    }
}
