use std::ops::Range;

use crate::submodules::type_lib::NumericData;

pub fn extent<'a>(values: impl Iterator<Item = &'a NumericData>) -> (NumericData, NumericData) {
    values.fold((NumericData::INFINITY, NumericData::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

pub fn padded_range(lo: NumericData, hi: NumericData) -> Range<NumericData> {
    let pad = if hi > lo { 0.05 * (hi - lo) } else { 1.0 };
    lo - pad..hi + pad
}
