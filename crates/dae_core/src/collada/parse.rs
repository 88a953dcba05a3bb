//! Whitespace-separated value parsing.
//!
//! COLLADA stores numbers as whitespace-separated text inside elements and
//! attributes (`<float_array>`, `<p>`, `<color>`, `@count`, ...).

use std::str::{FromStr, SplitWhitespace};

use glam::{Vec2, Vec3};
use thiserror::Error;

/// Errors that can occur while parsing element text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("missing value")]
    Missing,

    #[error("invalid number \"{0}\"")]
    InvalidNumber(String),

    #[error("expected {expected} values, found {found}")]
    Truncated { expected: usize, found: usize },
}

/// Result type for value parsing.
pub type ValueResult<T> = Result<T, ValueError>;

/// Fixed-size float vectors that can be built from parsed components.
pub trait FromComponents: Sized {
    /// Number of components of the vector type.
    const COMPONENTS: usize;

    /// Build from exactly `COMPONENTS` values.
    fn from_components(components: &[f32]) -> Self;
}

impl FromComponents for Vec2 {
    const COMPONENTS: usize = 2;

    fn from_components(c: &[f32]) -> Self {
        Vec2::new(c[0], c[1])
    }
}

impl FromComponents for Vec3 {
    const COMPONENTS: usize = 3;

    fn from_components(c: &[f32]) -> Self {
        Vec3::new(c[0], c[1], c[2])
    }
}

/// Sequential reader over whitespace-separated values.
pub struct ValueCursor<'a> {
    tokens: SplitWhitespace<'a>,
}

impl<'a> ValueCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            tokens: text.split_whitespace(),
        }
    }

    /// Read the next value.
    pub fn next_value<T: FromStr>(&mut self) -> ValueResult<T> {
        let token = self.tokens.next().ok_or(ValueError::Missing)?;
        token
            .parse()
            .map_err(|_| ValueError::InvalidNumber(token.to_string()))
    }

    /// Read one item of `size` values into a vector.
    ///
    /// Extra values beyond the vector's components are consumed and dropped,
    /// missing ones are zero.
    pub fn next_vector<T: FromComponents>(&mut self, size: usize) -> ValueResult<T> {
        let mut components = [0.0f32; 4];
        for i in 0..size {
            let value: f32 = self.next_value()?;
            if i < T::COMPONENTS {
                components[i] = value;
            }
        }
        Ok(T::from_components(&components[..T::COMPONENTS]))
    }
}

/// Parse the first value of `text`.
pub fn parse_scalar<T: FromStr>(text: &str) -> ValueResult<T> {
    ValueCursor::new(text).next_value()
}

/// Parse exactly `count` leading values of `text`, ignoring any that follow.
///
/// Preallocation is bounded by the number of tokens `text` can hold.
pub fn parse_array<T: FromStr>(text: &str, count: usize) -> ValueResult<Vec<T>> {
    let mut cursor = ValueCursor::new(text);
    let mut values = Vec::with_capacity(count.min(text.len() / 2 + 1));
    for found in 0..count {
        match cursor.next_value() {
            Ok(value) => values.push(value),
            Err(ValueError::Missing) => {
                return Err(ValueError::Truncated {
                    expected: count,
                    found,
                })
            }
            Err(e) => return Err(e),
        }
    }
    Ok(values)
}

/// Parse a vector from the leading components of `text`.
///
/// Colors are stored as RGBA, `parse_vector::<Vec3>` keeps RGB.
pub fn parse_vector<T: FromComponents>(text: &str) -> ValueResult<T> {
    let components: Vec<f32> = parse_array(text, T::COMPONENTS)?;
    Ok(T::from_components(&components))
}
