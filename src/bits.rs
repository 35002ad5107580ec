/// Extract the bits of `byte` in the range `[low, high)`, right-aligned.
///
/// Bit indices count from the least significant bit. `high` is exclusive, so
/// `take(b, 8, 2)` yields the top six bits of `b`. Offsets are fixed by the
/// instruction layout and must satisfy `low < high <= 8`.
pub fn take(byte: u8, high: u8, low: u8) -> u8 {
    debug_assert!(low < high && high <= 8, "invalid bit range {low}..{high}");
    let width = high - low;
    // Widen before shifting so a full 8-bit mask does not overflow
    let mask = ((1u16 << width) - 1) as u8;
    (byte >> low) & mask
}
