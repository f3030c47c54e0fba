//! Errors of the convenience entry points.

use std::any::type_name;

use thiserror::Error;

use crate::parse::ParseError;

/// Failure of [`parse`](crate::parse) or [`assign_tuple`](crate::assign_tuple).
///
/// `Syntax` means the text was not JSON; `Shape` and `Length` mean the JSON was
/// valid but did not have the requested shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("syntax error: {0}")]
    Syntax(#[from] ParseError),
    #[error("JSON value does not match type `{type_name}`")]
    Shape { type_name: &'static str },
    #[error("expected an array of {expected} elements, found {found}")]
    Length { expected: usize, found: usize },
}

impl Error {
    pub(crate) fn shape<T>() -> Self {
        Error::Shape {
            type_name: type_name::<T>(),
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax(_))
    }

    /// `true` for both `Shape` and `Length`.
    pub fn is_shape(&self) -> bool {
        matches!(self, Error::Shape { .. } | Error::Length { .. })
    }
}
