//! Hex color code to normalized RGB conversion.
//!
//! A 24-bit color like `FF8000` splits into three 8-bit channels which are
//! divided by 255 and rounded to 3 decimal places, giving the component
//! values a `vec3` color literal carries in shader code.

use glam::Vec3;

use crate::error::{Error, Result};

/// Parse a hex color code into its integer value.
///
/// The input is trimmed, then parsed as base-16 with the full alphabet
/// `u64::from_str_radix` accepts. No length or range checks beyond that:
/// codes shorter or longer than 6 digits parse like any other base-16
/// number.
pub fn parse_hex(code: &str) -> Result<u64> {
    let code = code.trim();
    u64::from_str_radix(code, 16).map_err(|source| Error::InvalidHexCode {
        code: code.to_string(),
        source,
    })
}

/// Split an integer color into normalized RGB channels.
///
/// Red takes all bits above bit 15, so values wider than 24 bits are not
/// clamped and push the red channel past 1.0. Each channel is rounded to
/// 3 decimal places.
pub fn channels(value: u64) -> Vec3 {
    let r = (value >> 16) as f32 / 255.0;
    let g = ((value >> 8) & 0xFF) as f32 / 255.0;
    let b = (value & 0xFF) as f32 / 255.0;
    Vec3::new(round3(r), round3(g), round3(b))
}

/// Parse a hex color code and normalize it in one step.
pub fn hex_to_rgb(code: &str) -> Result<Vec3> {
    Ok(channels(parse_hex(code)?))
}

/// Format normalized channels as a `vec3` constructor literal.
///
/// Channels render with a decimal point even when whole (`1.0`, not `1`),
/// so the result pastes into GLSL as float arguments.
pub fn vec3_literal(rgb: Vec3) -> String {
    format!("vec3({:?}, {:?}, {:?})", rgb.x, rgb.y, rgb.z)
}

/// Round to 3 decimal places.
fn round3(x: f32) -> f32 {
    (x * 1000.0).round() / 1000.0
}
