//! Vector helpers for agents and feature extraction
//!
//! Dense vectors are plain slices; sparse vectors are ordered maps from feature
//! name to weight so iteration is stable across runs.

use std::collections::BTreeMap;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::{Error, Result};

/// Sparse feature vector (missing keys read as zero)
pub type SparseVector = BTreeMap<String, f32>;

/// Reference direction for `angle_degrees` (positive y is "up" in velocity space)
const UP: [f32; 2] = [0.0, 1.0];

/// Grid cells per axis used by `discretize_location`
const LOCATION_GRID: u32 = 10;

#[inline]
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[inline]
pub fn magnitude(a: &[f32]) -> f32 {
    dot(a, a).sqrt()
}

/// Euclidean distance between two points
pub fn distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| (y - x) * (y - x)).sum::<f32>().sqrt()
}

/// Scale `a` to unit length
pub fn normalize(a: &[f32]) -> Result<Vec<f32>> {
    let len = magnitude(a);
    if len == 0.0 {
        return Err(Error::DivisionByZero);
    }
    Ok(a.iter().map(|x| x / len).collect())
}

/// Unsigned angle between two vectors in degrees, in [0, 180]
pub fn angle_between(a: &[f32], b: &[f32]) -> Result<f32> {
    let a = normalize(a)?;
    let b = normalize(b)?;
    // Rounding can push the cosine a hair past ±1
    let cos = dot(&a, &b).clamp(-1.0, 1.0);
    Ok(cos.acos().to_degrees())
}

/// Heading of a 2D vector in degrees, in [0, 360), measured clockwise from "up".
///
/// Vectors pointing left report `360 - angle_between(up, v)`.
pub fn angle_degrees(v: &[f32]) -> Result<f32> {
    let raw = angle_between(&UP, v)?;
    let heading = if v.first().copied().unwrap_or(0.0) < 0.0 { 360.0 - raw } else { raw };
    Ok(if heading >= 360.0 { 0.0 } else { heading })
}

/// `c * x1 + d * x2` over the union of keys.
///
/// Fails with `NumericInvalid` naming the first feature that comes out NaN.
pub fn linear_combine(c: f32, x1: &SparseVector, d: f32, x2: &SparseVector) -> Result<SparseVector> {
    let mut out = SparseVector::new();
    for key in x1.keys().chain(x2.keys()) {
        if out.contains_key(key) {
            continue;
        }
        let a = x1.get(key).copied().unwrap_or(0.0);
        let b = x2.get(key).copied().unwrap_or(0.0);
        let value = c * a + d * b;
        if value.is_nan() {
            return Err(Error::NumericInvalid {
                what: format!("feature '{key}'"),
            });
        }
        out.insert(key.clone(), value);
    }
    Ok(out)
}

/// Stable key for a binary sparse vector: its feature names, sorted and
/// `|`-joined. Brick features (any name containing `brick`) are left out
/// unless `use_bricks` is set.
pub fn serialize_binary_vector(v: &SparseVector, use_bricks: bool) -> String {
    v.keys()
        .filter(|key| use_bricks || !key.contains("brick"))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("|")
}

/// Index of the 10x10 screen cell containing `(x, y)`, row-major.
///
/// Points outside the screen land in the nearest edge cell.
pub fn discretize_location(x: f32, y: f32) -> u32 {
    let cell_w = SCREEN_WIDTH / LOCATION_GRID as f32;
    let cell_h = SCREEN_HEIGHT / LOCATION_GRID as f32;
    let max = (LOCATION_GRID - 1) as f32;
    let col = (x / cell_w).floor().clamp(0.0, max) as u32;
    let row = (y / cell_h).floor().clamp(0.0, max) as u32;
    col + row * LOCATION_GRID
}

/// 10-degree bucket (0..36) of a vector's heading
pub fn discretize_angle(v: &[f32]) -> Result<u32> {
    Ok((angle_degrees(v)? / 10.0) as u32)
}
