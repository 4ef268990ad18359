pub fn distance_squared(coord1: &[f64; 3], coord2: &[f64; 3]) -> f64 {
    let x = coord1[0] - coord2[0];
    let y = coord1[1] - coord2[1];
    let z = coord1[2] - coord2[2];
    x * x + y * y + z * z
}

pub fn norm_squared(v: &[f64; 3]) -> f64 {
    v[0] * v[0] + v[1] * v[1] + v[2] * v[2]
}

pub fn sub(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn scale(v: &[f64; 3], factor: f64) -> [f64; 3] {
    [v[0] * factor, v[1] * factor, v[2] * factor]
}

/// Component-wise sum of a set of vectors
pub fn sum(vectors: &[[f64; 3]]) -> [f64; 3] {
    vectors.iter().fold([0.0; 3], |acc, v| {
        [acc[0] + v[0], acc[1] + v[1], acc[2] + v[2]]
    })
}

/// Sum over atoms of the Euclidean distance between matching positions.
///
/// ```rust
/// use almd::utils::total_displacement;
///
/// let origin = vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];
/// let moved = vec![[3.0, 4.0, 0.0], [1.0, 1.0, 2.0]];
/// assert_eq!(total_displacement(&origin, &moved), 6.0);
/// ```
pub fn total_displacement(origin: &[[f64; 3]], positions: &[[f64; 3]]) -> f64 {
    assert_eq!(origin.len(), positions.len());
    origin
        .iter()
        .zip(positions.iter())
        .map(|(p0, p)| distance_squared(p0, p).sqrt())
        .sum()
}
