//! Bit-per-code arrays as returned by the evdev bitmap ioctls
//!
//! Bit `n` lives in bit `n % 8` of byte `n / 8`. Codes past the end of the
//! array read as unset.

/// Number of bytes needed to hold bits `0..=max_code`
pub fn bytes_for(max_code: u16) -> usize {
    max_code as usize / 8 + 1
}

/// Check whether `code` is set in `mask`
#[inline]
pub fn test_bit(mask: &[u8], code: u16) -> bool {
    mask.get(code as usize / 8)
        .is_some_and(|byte| (byte >> (code % 8)) & 1 == 1)
}

/// Iterate over the set bits of `mask` in ascending order
pub fn set_bits(mask: &[u8]) -> impl Iterator<Item = u16> + '_ {
    mask.iter().enumerate().flat_map(|(index, &byte)| {
        (0..8u16)
            .filter(move |bit| (byte >> bit) & 1 == 1)
            .map(move |bit| index as u16 * 8 + bit)
    })
}

/// Flatten kernel `unsigned long` words into the byte layout above
pub fn from_words(words: &[libc::c_ulong]) -> Vec<u8> {
    words.iter().flat_map(|word| word.to_le_bytes()).collect()
}
