use num_traits::{NumCast, ToPrimitive};

use crate::{AdapterError, Result};

/// Convert a callback result into the element type.
#[inline]
pub(crate) fn convert_element<T: NumCast, R: ToPrimitive>(value: R, index: usize) -> Result<T> {
    <T as NumCast>::from(value).ok_or(AdapterError::TypeConversion { index })
}
