//! Minimal bit widths for bit-packed fields.
//!
//! Signed counts use the `0 -> 0` convention: a field of width zero decodes as zero, so a set of
//! all-zero values is packed into no bits at all.

use crate::foundation::error::{EmitError, EmitResult};

const SIGNED_MIN: i64 = -(1 << 31);
const SIGNED_MAX: i64 = (1 << 31) - 1;

/// Smallest `n` such that `value` fits in `n` unsigned bits.
///
/// Defined on `[0, 2^31)`.
pub fn unsigned_bit_count(value: u32) -> EmitResult<u32> {
    if value > SIGNED_MAX as u32 {
        return Err(EmitError::range(format!(
            "unsigned bit count input out of range: {value}"
        )));
    }
    Ok(u32::BITS - value.leading_zeros())
}

/// Smallest `n` such that `value` fits in `n` two's-complement bits.
///
/// Defined on `[-2^31, 2^31)`; `0` needs no bits.
pub fn signed_bit_count(value: i64) -> EmitResult<u32> {
    if !(SIGNED_MIN..=SIGNED_MAX).contains(&value) {
        return Err(EmitError::range(format!(
            "signed bit count input out of range: {value}"
        )));
    }
    let value = value as i32;
    Ok(match value {
        0 => 0,
        v if v < 0 => 33 - (!v).leading_zeros(),
        v => 33 - v.leading_zeros(),
    })
}

pub fn min_unsigned_bit_count(values: impl IntoIterator<Item = u32>) -> EmitResult<u32> {
    values
        .into_iter()
        .try_fold(0, |acc, v| -> EmitResult<u32> {
            Ok(acc.max(unsigned_bit_count(v)?))
        })
}

pub fn min_signed_bit_count(values: impl IntoIterator<Item = i64>) -> EmitResult<u32> {
    values
        .into_iter()
        .try_fold(0, |acc, v| -> EmitResult<u32> {
            Ok(acc.max(signed_bit_count(v)?))
        })
}

#[cfg(test)]
#[path = "../../tests/unit/io/bit_count.rs"]
mod tests;
