//! The compressed container: bit packing on the way in, tail-first parsing
//! and greedy code matching on the way out.
//!
//! # Container layout
//!
//! ```text
//! [ packed code bits + pad zero bits ][ pad count: 1 byte, 1..=8 ]
//! [ N entries of (symbol: 1 byte, code length L in bits: 1 byte, code: ceil(L/8) bytes) ]
//! [ table byte length T: 2 bytes LE ][ N - 1: 1 byte ]
//! ```
//!
//! Each serialized code sits right-justified in its byte group: the code is
//! the low-order `L` bits of the group read big-endian, and any higher bits
//! are zero padding to be discarded. The count byte stores `N - 1` so that
//! all 256 distinct symbols stay representable; empty input never reaches
//! the container path, so `N` is always at least 1.
//!
//! Empty input maps to an empty container and back, with no metadata at all.

use std::collections::HashMap;

use tracing::trace;

use crate::bits::{BitReader, BitWriter};
use crate::code::CodeBook;
use crate::error::{Error, Result};
use crate::freq::FreqTable;
use crate::tree;

/// Footer bytes after the code table: table length (2) + entry count (1).
const FOOTER_LEN: usize = 3;

/// Smallest legal non-empty container: one packed byte, the pad byte, one
/// minimal three-byte table entry and the footer.
const MIN_CONTAINER_LEN: usize = 8;

/// Compress a byte sequence into a self-describing container.
///
/// Empty input produces an empty container.
///
/// # Errors
/// Any input can be compressed; only [`Error::Internal`] is possible, and
/// only if the codec itself is defective.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let table = FreqTable::from_bytes(input);
    let root = tree::build(&table).ok_or(Error::Internal("no tree for non-empty input"))?;
    let book = CodeBook::from_tree(&root);

    let mut writer = BitWriter::new();
    for &byte in input {
        let code = book
            .get(byte)
            .ok_or(Error::Internal("symbol missing from code book"))?;
        writer.push_code(code);
    }
    let raw_bits = writer.bit_len();
    let pad = writer.pad_to_byte();

    let mut out = writer.into_bytes()?;
    out.push(pad);

    let table_start = out.len();
    write_table(&book, &mut out)?;
    let table_len = out.len() - table_start;
    // At most 256 entries of 34 bytes each, so the length fits a u16.
    out.extend_from_slice(&(table_len as u16).to_le_bytes());
    out.push((book.len() - 1) as u8);

    trace!(
        symbols = book.len(),
        raw_bits,
        pad,
        table_len,
        total = out.len(),
        "container assembled"
    );
    Ok(out)
}

/// Decompress a container produced by [`compress`].
///
/// # Errors
/// - [`Error::Truncated`] when the container's size fields claim more bytes
///   than are present.
/// - [`Error::Malformed`] for an invalid table or padding field: zero code
///   length, entries overrunning or underrunning their region, a repeated
///   symbol, a repeated code, one code prefixing another, or a padding
///   count outside 1..=8.
/// - [`Error::UnresolvedFragment`] when the packed bits end mid-code.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    if data.len() < MIN_CONTAINER_LEN {
        return Err(Error::Truncated {
            needed: MIN_CONTAINER_LEN,
            have: data.len(),
        });
    }

    let symbol_count = data[data.len() - 1] as usize + 1;
    let table_len = u16::from_le_bytes([data[data.len() - 3], data[data.len() - 2]]) as usize;

    // The table plus footer must leave the pad byte and at least one packed
    // byte in front.
    let needed = table_len + FOOTER_LEN + 2;
    if needed > data.len() {
        return Err(Error::Truncated {
            needed,
            have: data.len(),
        });
    }

    let table_end = data.len() - FOOTER_LEN;
    let table_start = table_end - table_len;
    let codes = parse_table(&data[table_start..table_end], symbol_count)?;

    let pad = data[table_start - 1];
    if !(1..=8).contains(&pad) {
        return Err(Error::Malformed(format!(
            "padding count {pad} outside 1..=8"
        )));
    }

    let packed = &data[..table_start - 1];
    let bit_len = packed.len() * 8 - pad as usize;

    let mut out = Vec::new();
    let mut candidate: Vec<u8> = Vec::new();
    for bit in BitReader::new(packed, bit_len) {
        candidate.push(bit);
        if let Some(&symbol) = codes.get(candidate.as_slice()) {
            out.push(symbol);
            candidate.clear();
        }
    }
    if !candidate.is_empty() {
        return Err(Error::UnresolvedFragment(candidate.len()));
    }

    trace!(
        symbols = codes.len(),
        bit_len,
        decoded = out.len(),
        "container decoded"
    );
    Ok(out)
}

/// Serialize the code table in ascending symbol order.
fn write_table(book: &CodeBook, out: &mut Vec<u8>) -> Result<()> {
    for (symbol, code) in book.iter() {
        if code.len() > 255 {
            return Err(Error::Internal("code longer than 255 bits"));
        }
        out.push(symbol);
        out.push(code.len() as u8);
        out.extend_from_slice(&pack_code(code));
    }
    Ok(())
}

/// Parse the table region into a code-to-symbol map, validating as it goes.
fn parse_table(region: &[u8], entries: usize) -> Result<HashMap<Vec<u8>, u8>> {
    let mut codes: HashMap<Vec<u8>, u8> = HashMap::with_capacity(entries);
    let mut seen = [false; 256];
    let mut pos = 0;

    for _ in 0..entries {
        if pos + 2 > region.len() {
            return Err(Error::Malformed(format!(
                "table entry at offset {pos} overruns its region"
            )));
        }
        let symbol = region[pos];
        let len_bits = region[pos + 1] as usize;
        if len_bits == 0 {
            return Err(Error::Malformed(format!(
                "zero-length code for symbol {symbol}"
            )));
        }
        let len_bytes = len_bits.div_ceil(8);
        pos += 2;
        if pos + len_bytes > region.len() {
            return Err(Error::Malformed(format!(
                "code bytes for symbol {symbol} overrun the table region"
            )));
        }
        let code = unpack_code(&region[pos..pos + len_bytes], len_bits);
        pos += len_bytes;

        if seen[symbol as usize] {
            return Err(Error::Malformed(format!("symbol {symbol} listed twice")));
        }
        seen[symbol as usize] = true;

        // A duplicate or prefix-related code would make greedy decoding
        // ambiguous, so a valid table never contains one.
        for existing in codes.keys() {
            if existing.starts_with(&code) || code.starts_with(existing) {
                return Err(Error::Malformed(format!(
                    "code of symbol {symbol} collides with another entry"
                )));
            }
        }
        codes.insert(code, symbol);
    }

    if pos != region.len() {
        return Err(Error::Malformed(format!(
            "table region has {} bytes beyond its {entries} entries",
            region.len() - pos
        )));
    }
    Ok(codes)
}

/// Pack a code into `ceil(len / 8)` bytes, right-justified: the code becomes
/// the low-order bits of the big-endian group.
fn pack_code(code: &[u8]) -> Vec<u8> {
    let len_bytes = code.len().div_ceil(8);
    let mut bytes = vec![0u8; len_bytes];
    for (i, &bit) in code.iter().enumerate() {
        if bit != 0 {
            let from_right = code.len() - 1 - i;
            bytes[len_bytes - 1 - from_right / 8] |= 1 << (from_right % 8);
        }
    }
    bytes
}

/// Recover the low-order `len_bits` bits of a big-endian byte group as a
/// code, discarding the group's high padding bits.
fn unpack_code(group: &[u8], len_bits: usize) -> Vec<u8> {
    (0..len_bits)
        .map(|i| {
            let from_right = len_bits - 1 - i;
            (group[group.len() - 1 - from_right / 8] >> (from_right % 8)) & 1
        })
        .collect()
}
