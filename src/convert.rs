use core::any::type_name;

use num_traits::NumCast;

use crate::error::{Error, Result};

/// Converts between numeric types, failing instead of narrowing silently.
///
/// Built on the `num-traits` cast machinery, tightened to exactness: a
/// conversion succeeds only when the value survives the round trip into the
/// target type and back unchanged. Out-of-range values, fraction-dropping
/// float-to-integer casts, and integer magnitudes past the float mantissa
/// all fail. `NaN` never converts, since it compares unequal to every value
/// including itself.
pub fn checked<S, T>(value: S) -> Result<T>
where
    S: NumCast + PartialEq + Copy,
    T: NumCast + Copy,
{
    let lossy = Error::Conversion {
        from: type_name::<S>(),
        to: type_name::<T>(),
    };
    let converted: T = num_traits::cast(value).ok_or(lossy)?;
    let round_trip: S = num_traits::cast(converted).ok_or(lossy)?;
    if round_trip != value {
        return Err(lossy);
    }
    Ok(converted)
}
