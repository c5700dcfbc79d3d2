/// OV3D Core Library - Model loading and transformation logic
///
/// This library provides the stateless core functionality for 3D rendering,
/// including Wavefront OBJ parsing, vertex-normal synthesis, transformation
/// matrices, and projection calculations.

pub mod error;
pub mod geometry;
pub mod normals;
pub mod obj;
pub mod projection;
pub mod transform;

// Re-export commonly used types
pub use error::{Error, Result};
pub use geometry::{Mesh, Vertex};
pub use obj::{load_obj, parse_obj, ObjData};
pub use projection::{Camera, ProjectionMode};
pub use transform::{RotationState, Transform};
