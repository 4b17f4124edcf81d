use std::num::IntErrorKind;

use thiserror::Error;

use crate::model::ScalarKind;

mod sealed {
    pub trait Sealed {}
}

/// A scalar type that can serve as a flag destination.
///
/// Implemented for exactly the supported kinds: `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32`,
/// `u64`, `f32`, `f64`, and `bool`. The trait is sealed, so binding any other type is a compile
/// error.
pub trait Destination: sealed::Sealed + Sized {
    /// The registry collection this type binds into.
    const KIND: ScalarKind;

    /// Convert a raw value token into this type.
    fn convert(token: &str) -> Result<Self, ConvertError>;
}

/// Why a value token failed to convert to its destination kind.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// The token is not valid text for the destination kind.
    #[error("invalid text")]
    Invalid,
    /// The token is numeric but does not fit the destination width.
    #[error("out of range")]
    OutOfRange,
}

macro_rules! bind_integer {
    ($($integer:ty => $kind:ident),* $(,)?) => {$(
        impl sealed::Sealed for $integer {}

        impl Destination for $integer {
            const KIND: ScalarKind = ScalarKind::$kind;

            fn convert(token: &str) -> Result<Self, ConvertError> {
                // Base-10 only; the width check comes along with the parse.
                token.parse::<$integer>().map_err(|error| match error.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        ConvertError::OutOfRange
                    }
                    _ => ConvertError::Invalid,
                })
            }
        }
    )*};
}

bind_integer!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
);

macro_rules! bind_float {
    ($($float:ty => $kind:ident),* $(,)?) => {$(
        impl sealed::Sealed for $float {}

        impl Destination for $float {
            const KIND: ScalarKind = ScalarKind::$kind;

            fn convert(token: &str) -> Result<Self, ConvertError> {
                token.parse::<$float>().map_err(|_| ConvertError::Invalid)
            }
        }
    )*};
}

bind_float!(f32 => F32, f64 => F64);

impl sealed::Sealed for bool {}

impl Destination for bool {
    const KIND: ScalarKind = ScalarKind::Bool;

    fn convert(token: &str) -> Result<Self, ConvertError> {
        match token {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(ConvertError::Invalid),
        }
    }
}
