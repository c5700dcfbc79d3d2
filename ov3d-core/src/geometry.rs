/// Geometry primitives for 3D rendering
use nalgebra::{Point3, Vector3};

use crate::error::{Error, Result};
use crate::normals;
use crate::obj::ObjData;

/// A 3D vertex with position and normal
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
}

impl Vertex {
    pub fn new(x: f32, y: f32, z: f32, nx: f32, ny: f32, nz: f32) -> Self {
        Self {
            position: Point3::new(x, y, z),
            normal: Vector3::new(nx, ny, nz),
        }
    }
}

/// An indexed triangle mesh.
///
/// `indices` holds 3 entries per triangle, referencing `vertices`. This is
/// the same layout a GPU backend would take as vertex/index buffers; the
/// flattening accessors below hand it over as plain float/int arrays.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an indexed mesh from parsed OBJ records.
    ///
    /// Every face index is validated against the parsed position count;
    /// faces are assumed triangulated and only the first three indices of
    /// each reach the index buffer. When the file carried no `vn` records,
    /// smooth per-vertex normals are synthesized from the face windings.
    pub fn from_obj(data: &ObjData) -> Result<Self> {
        for (face_number, face) in data.faces.iter().enumerate() {
            for &index in face {
                if index >= data.positions.len() {
                    return Err(Error::IndexOutOfRange {
                        face: face_number,
                        index,
                        vertex_count: data.positions.len(),
                    });
                }
            }
        }

        let mut vertex_normals = if data.normals.is_empty() {
            normals::vertex_normals(&data.positions, &data.faces)
        } else {
            data.normals.clone()
        };
        // Keep the 1:1 position/normal contract even if the file's vn
        // count disagrees with its v count
        vertex_normals.resize(data.positions.len(), Vector3::zeros());

        let vertices = data
            .positions
            .iter()
            .zip(&vertex_normals)
            .map(|(&position, &normal)| Vertex { position, normal })
            .collect();

        let indices = data
            .faces
            .iter()
            .flat_map(|face| face[..3].iter().map(|&i| i as u32))
            .collect();

        Ok(Self { vertices, indices })
    }

    /// Get number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of index entries, as a draw call would consume it
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Vertex positions flattened to 3 floats per vertex
    pub fn positions_flat(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.position.x, v.position.y, v.position.z])
            .collect()
    }

    /// Vertex normals flattened to 3 floats per vertex, aligned with
    /// `positions_flat`
    pub fn normals_flat(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.normal.x, v.normal.y, v.normal.z])
            .collect()
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Iterate over triangles as resolved vertex triples
    pub fn triangles(&self) -> impl Iterator<Item = [Vertex; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                self.vertices[tri[0] as usize],
                self.vertices[tri[1] as usize],
                self.vertices[tri[2] as usize],
            ]
        })
    }

    /// Greatest vertex distance from the origin; used to scale a model to
    /// fit the view
    pub fn bounding_radius(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| v.position.coords.norm())
            .fold(0.0, f32::max)
    }

    /// Create a simple cube mesh for testing and as the demo fallback
    pub fn cube(size: f32) -> Self {
        let half = size / 2.0;
        let positions = vec![
            Point3::new(-half, -half, -half),
            Point3::new(half, -half, -half),
            Point3::new(half, half, -half),
            Point3::new(-half, half, -half),
            Point3::new(-half, -half, half),
            Point3::new(half, -half, half),
            Point3::new(half, half, half),
            Point3::new(-half, half, half),
        ];
        // Counter-clockwise windings viewed from outside
        let faces: Vec<Vec<usize>> = vec![
            vec![4, 5, 6],
            vec![4, 6, 7],
            vec![1, 0, 3],
            vec![1, 3, 2],
            vec![0, 4, 7],
            vec![0, 7, 3],
            vec![5, 1, 2],
            vec![5, 2, 6],
            vec![7, 6, 2],
            vec![7, 2, 3],
            vec![0, 1, 5],
            vec![0, 5, 4],
        ];

        let normals = normals::vertex_normals(&positions, &faces);
        let vertices = positions
            .into_iter()
            .zip(normals)
            .map(|(position, normal)| Vertex { position, normal })
            .collect();
        let indices = faces
            .iter()
            .flat_map(|face| face.iter().map(|&i| i as u32))
            .collect();

        Self { vertices, indices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obj::parse_obj;
    use approx::assert_relative_eq;
    use std::io::Cursor;

    fn parse(src: &str) -> ObjData {
        parse_obj(Cursor::new(src)).unwrap()
    }

    #[test]
    fn test_from_obj_synthesizes_missing_normals() {
        let data = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n");
        let mesh = Mesh::from_obj(&data).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.indices(), &[0, 1, 2]);
        for v in &mesh.vertices {
            assert_relative_eq!(v.normal, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-5);
        }
    }

    #[test]
    fn test_from_obj_passes_parsed_normals_through() {
        // The file normal here disagrees with the winding, so passthrough
        // (rather than synthesis) is observable
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\n\
                   vn 1 0 0\nvn 1 0 0\nvn 1 0 0\nf 1 2 3\n";
        let mesh = Mesh::from_obj(&parse(src)).unwrap();
        for v in &mesh.vertices {
            assert_eq!(v.normal, Vector3::new(1.0, 0.0, 0.0));
        }
    }

    #[test]
    fn test_from_obj_rejects_out_of_range_index() {
        let data = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 4\n");
        let err = Mesh::from_obj(&data).unwrap_err();
        match err {
            Error::IndexOutOfRange {
                face,
                index,
                vertex_count,
            } => {
                assert_eq!(face, 0);
                assert_eq!(index, 3);
                assert_eq!(vertex_count, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_polygon_faces_use_first_three_indices() {
        let data = parse("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n");
        let mesh = Mesh::from_obj(&data).unwrap();
        assert_eq!(mesh.indices(), &[0, 1, 2]);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_flattened_buffers_match_consumer_contract() {
        let data = parse("v 1 2 3\nv 4 5 6\nv 7 8 9\nf 1 2 3\n");
        let mesh = Mesh::from_obj(&data).unwrap();
        let positions = mesh.positions_flat();
        let normals = mesh.normals_flat();
        assert_eq!(positions.len(), 3 * mesh.vertex_count());
        assert_eq!(normals.len(), positions.len());
        assert_eq!(&positions[..3], &[1.0, 2.0, 3.0]);
        assert_eq!(mesh.index_count(), 3);
    }

    #[test]
    fn test_triangles_iterator_resolves_vertices() {
        let data = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n");
        let mesh = Mesh::from_obj(&data).unwrap();
        let tris: Vec<_> = mesh.triangles().collect();
        assert_eq!(tris.len(), 1);
        assert_eq!(tris[0][1].position, Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_cube_shape() {
        let cube = Mesh::cube(2.0);
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.triangle_count(), 12);
        // Corner of a size-2 cube sits sqrt(3) from the origin
        assert_relative_eq!(cube.bounding_radius(), 3.0f32.sqrt(), epsilon = 1e-5);
        // Corner normals point outward along the corner diagonal
        for v in &cube.vertices {
            assert!(v.normal.dot(&v.position.coords) > 0.0);
        }
    }

    #[test]
    fn test_empty_mesh_bounding_radius() {
        assert_eq!(Mesh::new().bounding_radius(), 0.0);
    }
}
