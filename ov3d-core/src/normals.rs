/// Vertex-normal synthesis for meshes without `vn` records
///
/// Normals are reconstructed in two passes: a unit normal per face from the
/// triangle winding, then an averaged normal per vertex over every face that
/// shares it. Both passes are pure functions of (positions, faces) and are
/// deterministic for identical inputs.
use nalgebra::{Point3, Vector3};

/// Compute one unit normal per face from its first three indices.
///
/// Faces are assumed triangulated; indices past the third are ignored here
/// (they still count for vertex sharing in `vertex_normals`). A zero-area
/// triangle cannot be normalized and yields the zero vector instead of NaN.
pub fn face_normals(positions: &[Point3<f32>], faces: &[Vec<usize>]) -> Vec<Vector3<f32>> {
    faces
        .iter()
        .map(|face| {
            let v0 = positions[face[0]];
            let v1 = positions[face[1]];
            let v2 = positions[face[2]];
            let cross = (v1 - v0).cross(&(v2 - v0));
            cross.try_normalize(f32::EPSILON).unwrap_or_else(Vector3::zeros)
        })
        .collect()
}

/// Compute one smooth normal per vertex by averaging the unit normals of
/// every face the vertex appears in.
///
/// The scan over faces is linear per vertex, O(V * F); fine for the small
/// meshes this crate targets. Vertices referenced by no face get the zero
/// vector. The output is aligned 1:1 with `positions`.
pub fn vertex_normals(positions: &[Point3<f32>], faces: &[Vec<usize>]) -> Vec<Vector3<f32>> {
    let per_face = face_normals(positions, faces);

    (0..positions.len())
        .map(|vertex| {
            let mut sum = Vector3::zeros();
            for (face, normal) in faces.iter().zip(&per_face) {
                if face.contains(&vertex) {
                    sum += normal;
                }
            }
            sum.try_normalize(f32::EPSILON).unwrap_or_else(Vector3::zeros)
        })
        .collect()
}
