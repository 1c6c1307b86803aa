//! 3x3 rotation matrices
//!
//! Matrices are row-major: `m[row][col]`, applied as `m * v`.
//! Euler angles compose in XYZ order (`Rx * Ry * Rz`), so the Z rotation is
//! applied to a point first and the X rotation last.

use crate::Vec3;

/// 3x3 matrix type (row-major)
pub type Mat3 = [[f32; 3]; 3];

/// Identity matrix
pub const IDENTITY: Mat3 = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

/// Rotation about the X axis
pub fn rotation_x(angle: f32) -> Mat3 {
    let (s, c) = angle.sin_cos();
    [
        [1.0, 0.0, 0.0],
        [0.0, c, -s],
        [0.0, s, c],
    ]
}

/// Rotation about the Y axis
pub fn rotation_y(angle: f32) -> Mat3 {
    let (s, c) = angle.sin_cos();
    [
        [c, 0.0, s],
        [0.0, 1.0, 0.0],
        [-s, 0.0, c],
    ]
}

/// Rotation about the Z axis
pub fn rotation_z(angle: f32) -> Mat3 {
    let (s, c) = angle.sin_cos();
    [
        [c, -s, 0.0],
        [s, c, 0.0],
        [0.0, 0.0, 1.0],
    ]
}

/// Build the rotation matrix for XYZ-ordered Euler angles
pub fn from_euler_xyz(x: f32, y: f32, z: f32) -> Mat3 {
    mul(mul(rotation_x(x), rotation_y(y)), rotation_z(z))
}

/// Multiply two matrices: `a * b`
pub fn mul(a: Mat3, b: Mat3) -> Mat3 {
    let mut result = [[0.0f32; 3]; 3];
    for (i, row) in result.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
        }
    }
    result
}

/// Apply a matrix to a vector: `m * v`
#[inline]
pub fn transform(m: &Mat3, v: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
        m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
        m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
    )
}
