pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Premultiply a straight-alpha RGBA8 value.
pub(crate) fn premul_rgba8(rgba: [u8; 4]) -> [u8; 4] {
    let a = u16::from(rgba[3]);
    [
        mul_div255_u8(u16::from(rgba[0]), a),
        mul_div255_u8(u16::from(rgba[1]), a),
        mul_div255_u8(u16::from(rgba[2]), a),
        rgba[3],
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
