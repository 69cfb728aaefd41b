/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Subtract `step` from `value` without going below `floor`
///
/// Values already at or below `floor` are returned unchanged.
#[inline]
pub const fn sub_floor8(value: u8, step: u8, floor: u8) -> u8 {
    if value <= floor {
        return value;
    }
    let next = value.saturating_sub(step);
    if next < floor { floor } else { next }
}
