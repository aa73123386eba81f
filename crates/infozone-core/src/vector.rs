use serde::{Deserialize, Serialize};

use crate::text::{parse_float_lenient, split_delimited};

/// Separators allowed between the components of a packed vector token.
const VECTOR_DELIMS: [char; 3] = [' ', '\t', ';'];

/// A 3-component world-space vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Parse a vector token such as `"1.5 -2 3"` or `1.5;-2;3`.
///
/// Returns `None` unless the token holds exactly three components. Each
/// component is converted leniently.
pub fn parse_vector(token: &str) -> Option<Vec3> {
    let mut parts = split_delimited(token, &VECTOR_DELIMS);
    let x = parts.next()?;
    let y = parts.next()?;
    let z = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    Some(Vec3::new(
        parse_float_lenient(x),
        parse_float_lenient(y),
        parse_float_lenient(z),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_space_separated() {
        assert_eq!(
            parse_vector("1.5 -2.0 3.25"),
            Some(Vec3::new(1.5, -2.0, 3.25))
        );
    }

    #[test]
    fn parses_semicolon_separated() {
        assert_eq!(parse_vector("10;20;-30"), Some(Vec3::new(10.0, 20.0, -30.0)));
        assert_eq!(parse_vector("1; 2;\t3"), Some(Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn wrong_arity_fails() {
        assert_eq!(parse_vector("1 2"), None);
        assert_eq!(parse_vector("1 2 3 4"), None);
        assert_eq!(parse_vector(""), None);
    }

    #[test]
    fn garbage_components_become_zero() {
        assert_eq!(parse_vector("abc 2x -"), Some(Vec3::new(0.0, 2.0, 0.0)));
    }
}
