//! Conversion of raw string values into the leaf types of a record.
use std::str::FromStr;

use crate::errors::ErrorKind;
use crate::record::{ScalarMut, Target};
use crate::source::Source;

/// A raw value that can't be coerced into the expected scalar type.
#[derive(Debug)]
pub(crate) struct Mismatch {
    value: String,
    expected_type: &'static str,
}

impl Mismatch {
    pub(crate) fn at(self, key: impl Into<String>) -> ErrorKind {
        ErrorKind::ParseFailure {
            key: key.into(),
            value: self.value,
            expected_type: self.expected_type,
        }
    }
}

/// Populate a leaf field from the values stored under `key`.
///
/// Absent keys are checked before looking at the type of the field, so an
/// optional field of an unsupported type decodes successfully if its key is missing.
pub(crate) fn leaf(
    source: &dyn Source,
    key: &str,
    optional: bool,
    target: Target<'_>,
) -> Result<(), ErrorKind> {
    let raw = match source.values(key) {
        Some(values) if !values.is_empty() => values,
        _ if optional => return Ok(()),
        _ => {
            return Err(ErrorKind::MissingValue {
                key: key.to_owned(),
            });
        }
    };
    match target {
        Target::Scalar(slot) => scalar(slot, &raw[0], optional).map_err(|e| e.at(key)),
        Target::Sequence(sequence) => sequence.assign(key, raw),
        Target::Unsupported(type_name) => Err(ErrorKind::UnsupportedType {
            key: key.to_owned(),
            type_name,
        }),
        // Records are walked by the descent, they never reach the coercer.
        Target::Record(record) => Err(ErrorKind::UnsupportedType {
            key: key.to_owned(),
            type_name: record.type_name(),
        }),
    }
}

/// Coerce `raw` into the scalar behind `slot`.
///
/// An empty value leaves the slot untouched when `optional` is set, for every
/// type other than `String` (which takes the empty string verbatim).
pub(crate) fn scalar(slot: ScalarMut<'_>, raw: &str, optional: bool) -> Result<(), Mismatch> {
    let mismatch = |expected_type| Mismatch {
        value: raw.to_owned(),
        expected_type,
    };
    let expected_type = slot.type_name();
    let outcome = match slot {
        ScalarMut::String(s) => {
            raw.clone_into(s);
            Ok(())
        }
        ScalarMut::Bool(b) => match raw {
            "true" => {
                *b = true;
                Ok(())
            }
            "false" => {
                *b = false;
                Ok(())
            }
            "" if optional => Ok(()),
            _ => Err(()),
        },
        ScalarMut::I8(n) => number(n, raw, optional),
        ScalarMut::I16(n) => number(n, raw, optional),
        ScalarMut::I32(n) => number(n, raw, optional),
        ScalarMut::I64(n) => number(n, raw, optional),
        ScalarMut::I128(n) => number(n, raw, optional),
        ScalarMut::Isize(n) => number(n, raw, optional),
        ScalarMut::U8(n) => number(n, raw, optional),
        ScalarMut::U16(n) => number(n, raw, optional),
        ScalarMut::U32(n) => number(n, raw, optional),
        ScalarMut::U64(n) => number(n, raw, optional),
        ScalarMut::U128(n) => number(n, raw, optional),
        ScalarMut::Usize(n) => number(n, raw, optional),
        ScalarMut::F32(n) => number(n, raw, optional),
        ScalarMut::F64(n) => number(n, raw, optional),
    };
    outcome.map_err(|()| mismatch(expected_type))
}

trait Number: FromStr + Copy {
    /// Whether a leading `-` is accepted.
    const SIGNED: bool;

    fn in_range(self) -> bool {
        true
    }
}

macro_rules! integers {
    ($($ty:ty),*) => {
        $(
            impl Number for $ty {
                const SIGNED: bool = <$ty>::MIN != 0;
            }
        )*
    };
}

integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! floats {
    ($($ty:ty),*) => {
        $(
            impl Number for $ty {
                const SIGNED: bool = false;

                // A finite literal overflows to infinity when it's out of range for the width.
                fn in_range(self) -> bool {
                    self.is_finite()
                }
            }
        )*
    };
}

floats!(f32, f64);

fn number<N: Number>(slot: &mut N, raw: &str, optional: bool) -> Result<(), ()> {
    match raw.as_bytes().first() {
        None if optional => return Ok(()),
        Some(b'0'..=b'9') => {}
        Some(b'-') if N::SIGNED => {}
        _ => return Err(()),
    }
    let value: N = raw.parse().map_err(|_| ())?;
    if !value.in_range() {
        return Err(());
    }
    *slot = value;
    Ok(())
}
