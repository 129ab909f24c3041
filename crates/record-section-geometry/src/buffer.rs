//! Packed vertex positions.

use glam::Vec3;

use crate::FLOATS_PER_VERTEX;

const _: () = assert!(std::mem::size_of::<Vec3>() == FLOATS_PER_VERTEX * 4);

/// Flat `x, y, z` float buffer, three tightly packed floats per vertex.
///
/// This is the layout a `vec3<f32>` vertex attribute expects, so
/// [`PositionBuffer::as_bytes`] can be uploaded as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionBuffer(Vec<f32>);

impl PositionBuffer {
    #[must_use]
    pub fn with_vertex_capacity(vertices: usize) -> Self {
        Self(Vec::with_capacity(vertices * FLOATS_PER_VERTEX))
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn push(&mut self, x: f64, y: f64, z: f64) {
        self.0.extend_from_slice(&[x as f32, y as f32, z as f32]);
    }

    /// Append every vertex of `other`.
    pub fn extend_from(&mut self, other: &PositionBuffer) {
        self.0.extend_from_slice(&other.0);
    }

    /// Number of vertices (a third of the float count).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.0.len() / FLOATS_PER_VERTEX
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw floats.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// The floats viewed as vertices.
    #[must_use]
    pub fn as_vertices(&self) -> &[Vec3] {
        bytemuck::cast_slice(&self.0)
    }

    /// The floats as native-endian bytes for a vertex buffer upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.0)
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<f32> {
        self.0
    }
}

impl FromIterator<Vec3> for PositionBuffer {
    fn from_iter<I: IntoIterator<Item = Vec3>>(iter: I) -> Self {
        Self(iter.into_iter().flat_map(|v| v.to_array()).collect())
    }
}

impl AsRef<[f32]> for PositionBuffer {
    fn as_ref(&self) -> &[f32] {
        &self.0
    }
}

impl From<PositionBuffer> for Vec<f32> {
    fn from(buffer: PositionBuffer) -> Self {
        buffer.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_view_the_same_floats() {
        let mut buffer = PositionBuffer::with_vertex_capacity(2);
        buffer.push(1.0, 2.0, 0.0);
        buffer.push(3.0, 4.0, 0.0);

        assert_eq!(buffer.vertex_count(), 2);
        assert_eq!(buffer.as_slice(), &[1.0, 2.0, 0.0, 3.0, 4.0, 0.0]);
        assert_eq!(
            buffer.as_vertices(),
            &[Vec3::new(1.0, 2.0, 0.0), Vec3::new(3.0, 4.0, 0.0)]
        );
        assert_eq!(buffer.as_bytes().len(), 24);
    }

    #[test]
    fn extend_appends_vertices() {
        let mut first = PositionBuffer::default();
        first.push(0.0, 0.0, 0.0);
        let mut second = PositionBuffer::default();
        second.push(1.0, 1.0, 0.0);

        first.extend_from(&second);
        assert_eq!(first.vertex_count(), 2);
        assert_eq!(Vec::from(first), vec![0.0, 0.0, 0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn collects_from_vertices() {
        let buffer: PositionBuffer = [Vec3::X, Vec3::Y].into_iter().collect();
        assert_eq!(buffer.as_slice(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    }
}
