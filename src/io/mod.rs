//! Output primitives: the bit/byte stream and the bit-width calculator.

/// Minimal bit widths for packed fields.
pub mod bit_count;
/// Buffered bit/byte writer.
pub mod stream;
