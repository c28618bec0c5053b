//! Binary digit strings for the `b` spec

/// Encode an unsigned magnitude as binary digits
///
/// Zero is the literal `0b0`. Any other value is zero-padded on the left to
/// a multiple of four digits and carries no prefix.
pub fn to_binary(magnitude: u128) -> String {
    if magnitude == 0 {
        return "0b0".to_string();
    }

    let bits = format!("{:b}", magnitude);
    let width = bits.len().div_ceil(4) * 4;
    format!("{:0>width$}", bits, width = width)
}
