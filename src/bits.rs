//! Bit-level packing primitives.
//!
//! Bits are packed most-significant-bit first: bit `i` of a stream lives in
//! byte `i / 8` at position `7 - i % 8`.

use crate::error::{Error, Result};

/// Accumulates bits into bytes, most significant bit first.
#[derive(Debug, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl BitWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            bit_len: 0,
        }
    }

    /// Number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Append one bit, 0 or 1.
    pub fn push_bit(&mut self, bit: u8) {
        debug_assert!(bit <= 1);
        if self.bit_len % 8 == 0 {
            self.bytes.push(0);
        }
        if bit != 0 {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 1 << (7 - self.bit_len % 8);
        }
        self.bit_len += 1;
    }

    /// Append every bit of a code in order.
    pub fn push_code(&mut self, code: &[u8]) {
        for &bit in code {
            self.push_bit(bit);
        }
    }

    /// Append zero bits up to the next byte boundary and return how many
    /// were added.
    ///
    /// An already-aligned stream still receives a full byte of eight zeros,
    /// so the result is always 1..=8 and a stored padding count can never
    /// mean "none".
    pub fn pad_to_byte(&mut self) -> u8 {
        let pad = 8 - (self.bit_len % 8) as u8;
        for _ in 0..pad {
            self.push_bit(0);
        }
        pad
    }

    /// Consume the writer and return the packed bytes.
    ///
    /// # Errors
    /// Returns [`Error::Internal`] if the bit count is not a whole number of
    /// bytes; callers must pad first.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        if self.bit_len % 8 != 0 {
            return Err(Error::Internal("bit stream not byte-aligned before packing"));
        }
        Ok(self.bytes)
    }
}

/// Iterates the first `bit_len` bits of a byte slice as 0/1 values.
#[derive(Debug)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    pos: usize,
    bit_len: usize,
}

impl<'a> BitReader<'a> {
    /// Read the first `bit_len` bits of `bytes`.
    ///
    /// `bit_len` must not exceed `8 * bytes.len()`.
    pub fn new(bytes: &'a [u8], bit_len: usize) -> Self {
        debug_assert!(bit_len <= bytes.len() * 8);
        Self {
            bytes,
            pos: 0,
            bit_len,
        }
    }
}

impl Iterator for BitReader<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.pos >= self.bit_len {
            return None;
        }
        let bit = (self.bytes[self.pos / 8] >> (7 - self.pos % 8)) & 1;
        self.pos += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.bit_len - self.pos;
        (left, Some(left))
    }
}

impl ExactSizeIterator for BitReader<'_> {}
