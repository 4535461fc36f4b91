//! Indexed triangle mesh geometry.
//!
//! The mesh owns three buffers: vertex positions, a flat index buffer where
//! every three entries form one triangle, and one parametric (st) coordinate
//! per vertex. Construction validates that every index lands inside the
//! vertex buffer, so lookups by triangle index never go out of bounds.

use prism_math::Vec3;
use thiserror::Error;

/// Errors that can occur while building a mesh.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    #[error("Mesh has no triangles")]
    Empty,

    #[error("Index count {0} is not a multiple of 3")]
    PartialTriangle(usize),

    #[error("Index {index} out of range: only {available} vertices supplied")]
    VertexOutOfRange { index: u32, available: usize },

    #[error("Index {index} out of range: only {available} st coordinates supplied")]
    CoordinateOutOfRange { index: u32, available: usize },
}

/// A triangle mesh with per-vertex st coordinates.
#[derive(Clone, Debug)]
pub struct TriangleMesh {
    /// Vertex positions, sized to the highest referenced index + 1
    vertices: Vec<Vec3>,

    /// Triangle indices (every 3 indices form a triangle)
    indices: Vec<u32>,

    /// Per-vertex st coordinates, same length as `vertices`
    st: Vec<Vec3>,
}

impl TriangleMesh {
    /// Build a mesh by copying the referenced prefix of `vertices` and `st`.
    ///
    /// Only the first `max(indices) + 1` entries of each slice are kept.
    pub fn new(vertices: &[Vec3], indices: &[u32], st: &[Vec3]) -> Result<Self, MeshError> {
        if indices.is_empty() {
            return Err(MeshError::Empty);
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::PartialTriangle(indices.len()));
        }

        let max_index = indices.iter().copied().max().unwrap_or(0);
        let size = max_index as usize + 1;

        if vertices.len() < size {
            return Err(MeshError::VertexOutOfRange {
                index: max_index,
                available: vertices.len(),
            });
        }
        if st.len() < size {
            return Err(MeshError::CoordinateOutOfRange {
                index: max_index,
                available: st.len(),
            });
        }

        log::debug!(
            "Built triangle mesh: {} triangles, {} vertices",
            indices.len() / 3,
            size
        );

        Ok(Self {
            vertices: vertices[..size].to_vec(),
            indices: indices.to_vec(),
            st: st[..size].to_vec(),
        })
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Vertex indices of triangle `k`.
    ///
    /// # Panics
    /// If `k >= triangle_count()`.
    #[inline]
    fn triangle_indices(&self, k: usize) -> [usize; 3] {
        [
            self.indices[k * 3] as usize,
            self.indices[k * 3 + 1] as usize,
            self.indices[k * 3 + 2] as usize,
        ]
    }

    /// Positions of triangle `k` in winding order.
    #[inline]
    pub fn triangle(&self, k: usize) -> [Vec3; 3] {
        let [i0, i1, i2] = self.triangle_indices(k);
        [self.vertices[i0], self.vertices[i1], self.vertices[i2]]
    }

    /// st coordinates of triangle `k` in winding order.
    #[inline]
    pub fn triangle_st(&self, k: usize) -> [Vec3; 3] {
        let [i0, i1, i2] = self.triangle_indices(k);
        [self.st[i0], self.st[i1], self.st[i2]]
    }

    /// Iterate over all triangles as vertex triplets.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        (0..self.triangle_count()).map(move |k| self.triangle(k))
    }
}
