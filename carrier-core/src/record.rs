use crate::{CarrierError, CarrierResult};

/// Return the only record of `records`, or a precondition error.
pub fn ensure_one<T>(records: &[T]) -> CarrierResult<&T> {
    match records {
        [record] => Ok(record),
        _ => Err(CarrierError::Precondition {
            expected: "carrier",
            found: records.len(),
        }),
    }
}
