use crate::foundation::error::{EmitError, EmitResult};
use crate::foundation::fixed::{Sfixed8P8, Sfixed16P16, Ufixed8P8, Ufixed16P16};

/// Append-only output buffer with bit-level and byte-level writes.
///
/// Bits are packed most-significant-bit first. Every byte-level write aligns the stream first,
/// so a pending partial byte is always zero-padded before a byte-sized field follows it.
///
/// Nested variable-length bodies are written into a fresh `WriteStream`, measured with
/// [`WriteStream::byte_position`], then spliced into the parent with [`WriteStream::write_stream`].
#[derive(Clone, Debug, Default)]
pub struct WriteStream {
    bytes: Vec<u8>,
    pending: u8,
    bit_pos: u32, // 0..=7
}

impl WriteStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fully written bytes; pending bits are not counted.
    pub fn byte_position(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_aligned(&self) -> bool {
        self.bit_pos == 0
    }

    /// Zero-pads and flushes a pending partial byte. No-op when already aligned.
    pub fn align(&mut self) {
        if self.bit_pos != 0 {
            self.bytes.push(self.pending);
            self.pending = 0;
            self.bit_pos = 0;
        }
    }

    /// Finalized copy of the buffer, with pending bits zero-padded. Does not mutate the stream.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.bytes.len() + 1);
        out.extend_from_slice(&self.bytes);
        if self.bit_pos != 0 {
            out.push(self.pending);
        }
        out
    }

    pub fn into_bytes(mut self) -> Vec<u8> {
        self.align();
        self.bytes
    }

    pub fn write_bool_bit(&mut self, value: bool) {
        self.push_bits(1, u32::from(value));
    }

    /// Writes `value` in exactly `width` bits (`UB[width]`).
    pub fn write_bits_unsigned(&mut self, width: u32, value: u32) -> EmitResult<()> {
        if width > 32 {
            return Err(EmitError::range(format!("bit width above 32: {width}")));
        }
        if width < 32 && (value >> width) != 0 {
            return Err(EmitError::range(format!(
                "value {value} does not fit in {width} unsigned bits"
            )));
        }
        self.push_bits(width, value);
        Ok(())
    }

    /// Writes `value` in exactly `width` two's-complement bits (`SB[width]`).
    pub fn write_bits_signed(&mut self, width: u32, value: i32) -> EmitResult<()> {
        if width > 32 {
            return Err(EmitError::range(format!("bit width above 32: {width}")));
        }
        let fits = match width {
            0 => value == 0,
            32 => true,
            w => {
                let half = 1i64 << (w - 1);
                (-half..half).contains(&i64::from(value))
            }
        };
        if !fits {
            return Err(EmitError::range(format!(
                "value {value} does not fit in {width} signed bits"
            )));
        }
        let mask = if width == 32 {
            u32::MAX
        } else {
            (1u32 << width) - 1
        };
        self.push_bits(width, (value as u32) & mask);
        Ok(())
    }

    fn push_bits(&mut self, width: u32, value: u32) {
        let mut remaining = width;
        while remaining > 0 {
            let available = 8 - self.bit_pos;
            let take = available.min(remaining);
            let chunk = ((value >> (remaining - take)) & ((1u32 << take) - 1)) as u8;
            self.pending |= chunk << (available - take);
            self.bit_pos += take;
            remaining -= take;
            if self.bit_pos == 8 {
                self.bytes.push(self.pending);
                self.pending = 0;
                self.bit_pos = 0;
            }
        }
    }

    pub fn write_bytes(&mut self, value: &[u8]) {
        self.align();
        self.bytes.extend_from_slice(value);
    }

    /// Splices the finalized contents of `other` into this stream.
    pub fn write_stream(&mut self, other: &WriteStream) {
        self.align();
        self.bytes.extend_from_slice(&other.bytes);
        if other.bit_pos != 0 {
            self.bytes.push(other.pending);
        }
    }

    pub fn write_u8(&mut self, value: u8) {
        self.write_bytes(&[value]);
    }

    pub fn write_i8(&mut self, value: i8) {
        self.write_bytes(&value.to_le_bytes());
    }

    pub fn write_u16_le(&mut self, value: u16) {
        self.write_bytes(&value.to_le_bytes());
    }

    pub fn write_u16_be(&mut self, value: u16) {
        self.write_bytes(&value.to_be_bytes());
    }

    pub fn write_i16_le(&mut self, value: i16) {
        self.write_bytes(&value.to_le_bytes());
    }

    pub fn write_u32_le(&mut self, value: u32) {
        self.write_bytes(&value.to_le_bytes());
    }

    pub fn write_u32_be(&mut self, value: u32) {
        self.write_bytes(&value.to_be_bytes());
    }

    pub fn write_i32_le(&mut self, value: i32) {
        self.write_bytes(&value.to_le_bytes());
    }

    pub fn write_f16_le(&mut self, value: f32) {
        self.write_u16_le(float16_bits(value));
    }

    pub fn write_f16_be(&mut self, value: f32) {
        self.write_u16_be(float16_bits(value));
    }

    pub fn write_f32_le(&mut self, value: f32) {
        self.write_bytes(&value.to_le_bytes());
    }

    pub fn write_f32_be(&mut self, value: f32) {
        self.write_bytes(&value.to_be_bytes());
    }

    pub fn write_f64_le(&mut self, value: f64) {
        self.write_bytes(&value.to_le_bytes());
    }

    pub fn write_f64_be(&mut self, value: f64) {
        self.write_bytes(&value.to_be_bytes());
    }

    pub fn write_sfixed8p8_le(&mut self, value: Sfixed8P8) {
        self.write_bytes(&value.epsilons.to_le_bytes());
    }

    pub fn write_ufixed8p8_le(&mut self, value: Ufixed8P8) {
        self.write_bytes(&value.epsilons.to_le_bytes());
    }

    pub fn write_sfixed16p16_le(&mut self, value: Sfixed16P16) {
        self.write_bytes(&value.epsilons.to_le_bytes());
    }

    pub fn write_ufixed16p16_le(&mut self, value: Ufixed16P16) {
        self.write_bytes(&value.epsilons.to_le_bytes());
    }

    /// UTF-8 bytes followed by a NUL terminator.
    pub fn write_c_string(&mut self, value: &str) {
        self.write_bytes(value.as_bytes());
        self.write_u8(0);
    }

    pub fn write_u32_leb128(&mut self, value: u32) {
        self.align();
        let mut rest = value;
        loop {
            let mut byte = (rest & 0x7f) as u8;
            rest >>= 7;
            if rest != 0 {
                byte |= 0x80;
            }
            self.bytes.push(byte);
            if rest == 0 {
                break;
            }
        }
    }
}

/// Half-precision bit pattern: 1 sign bit, 5 exponent bits, 10 fraction bits.
///
/// NaN collapses to `0xFFFF`. Magnitudes of `2^16` and above clamp to infinity.
pub fn float16_bits(value: f32) -> u16 {
    const MAX_EXPONENT: i32 = 0x1f;

    if value.is_nan() {
        return 0xffff;
    }
    let sign: u16 = if value.is_sign_negative() { 1 << 15 } else { 0 };
    let magnitude = f64::from(value.abs());

    if magnitude < 2f64.powi(-14) {
        let fraction = (magnitude / 2f64.powi(-24)).floor() as u16;
        return sign | (fraction & 0x03ff);
    }

    let mut exponent: i32 = 1;
    while exponent < MAX_EXPONENT && magnitude >= 2f64.powi(exponent - 14) {
        exponent += 1;
    }
    if exponent == MAX_EXPONENT {
        return sign | ((MAX_EXPONENT as u16) << 10);
    }
    let fraction =
        ((magnitude - 2f64.powi(exponent - 15)) / 2f64.powi(exponent - 25)).floor() as u16;
    sign | ((exponent as u16) << 10) | (fraction & 0x03ff)
}

#[cfg(test)]
#[path = "../../tests/unit/io/stream.rs"]
mod tests;
