//! Bit-level base-32 codec
//!
//! RFC 4648-style alphabet (`A-Z`, `2-7`). Encoding emits no padding;
//! decoding strips trailing `=` and silently skips any byte outside the
//! alphabet, tolerating loosely formatted input. Both directions treat the
//! data as a contiguous MSB-first bitstream consumed five bits at a time.

/// Encode alphabet, indexed by 5-bit group value.
const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Sentinel for bytes with no 5-bit value.
const INVALID: u8 = 0xFF;

/// Decode table indexed by `byte - b'0'`, covering `'0'..='z'`. Letters map
/// case-insensitively; everything else decodes to [`INVALID`].
const LOOKUP: [u8; 75] = build_lookup();

const fn build_lookup() -> [u8; 75] {
    let mut table = [INVALID; 75];
    let mut group = 0usize;
    while group < 32 {
        let symbol = ALPHABET[group];
        table[(symbol - b'0') as usize] = group as u8;
        if symbol.is_ascii_uppercase() {
            table[(symbol.to_ascii_lowercase() - b'0') as usize] = group as u8;
        }
        group += 1;
    }
    table
}

/// Encode bytes as base-32 symbols, without padding.
///
/// Output length is always `ceil(8 * input.len() / 5)`.
pub fn encode(input: &[u8]) -> String {
    let output_len = (input.len() * 8 + 4) / 5;
    let mut output = String::with_capacity(output_len);

    let mut i = 0;
    let mut bit_index = 0usize;
    while i < input.len() {
        let curr = input[i] as usize;
        let group;

        if bit_index > 3 {
            // Group spans a byte boundary; a missing next byte contributes
            // zero bits, which is the implicit low-order padding
            let next = if i + 1 < input.len() { input[i + 1] as usize } else { 0 };
            let mut value = curr & (0xFF >> bit_index);
            bit_index = (bit_index + 5) % 8;
            value <<= bit_index;
            value |= next >> (8 - bit_index);
            group = value;
            i += 1;
        } else {
            group = (curr >> (8 - (bit_index + 5))) & 0x1F;
            bit_index = (bit_index + 5) % 8;
            if bit_index == 0 {
                i += 1;
            }
        }

        output.push(ALPHABET[group] as char);
    }

    output
}

/// Decode base-32 symbols back to bytes.
///
/// Trailing `=` padding is stripped first; unrecognized bytes are skipped,
/// not rejected. Output length is `floor(5 * stripped_len / 8)` counted over
/// the stripped input *including* skipped bytes, and decoding stops the
/// moment that many bytes are produced, whatever input remains. An input
/// containing skipped bytes therefore decodes to its significant bytes
/// followed by zeros; the output never shrinks to match the recognized
/// symbols alone.
pub fn decode(input: &[u8]) -> Vec<u8> {
    let mut stripped_len = input.len();
    while stripped_len > 0 && input[stripped_len - 1] == b'=' {
        stripped_len -= 1;
    }
    let input = &input[..stripped_len];

    let output_len = stripped_len * 5 / 8;
    let mut output = vec![0u8; output_len];
    if output_len == 0 {
        return output;
    }

    let mut bit_index = 0usize;
    let mut offset = 0usize;
    for &byte in input {
        let lookup = (byte as usize).wrapping_sub(b'0' as usize);
        if lookup >= LOOKUP.len() {
            continue;
        }
        let group = LOOKUP[lookup];
        if group == INVALID {
            continue;
        }
        let group = group as usize;

        if bit_index <= 3 {
            bit_index = (bit_index + 5) % 8;
            if bit_index == 0 {
                output[offset] |= group as u8;
                offset += 1;
                if offset >= output_len {
                    break;
                }
            } else {
                output[offset] |= (group << (8 - bit_index)) as u8;
            }
        } else {
            bit_index = (bit_index + 5) % 8;
            output[offset] |= (group >> bit_index) as u8;
            offset += 1;
            if offset >= output_len {
                break;
            }
            output[offset] |= (group << (8 - bit_index)) as u8;
        }
    }

    output
}
