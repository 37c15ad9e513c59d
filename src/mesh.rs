use {
    bitflags::bitflags,
    glam::Vec3,
    serde::{Deserialize, Serialize},
};

/// Three vertex indices of a single triangle, in file order.
pub type Triangle = [u16; 3];

bitflags! {
    /// The fourth field of each face record.
    ///
    /// Bits other than the ones named here are retained as-is.
    #[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
    pub struct FaceFlags: u16 {
        const AC_VISIBLE = 1 << 0;
        const BC_VISIBLE = 1 << 1;
        const AB_VISIBLE = 1 << 2;
        const U_WRAP = 1 << 3;
        const V_WRAP = 1 << 4;
    }
}

/// A named triangle mesh read from a scene.
///
/// Indices are not checked against the vertex count while decoding; see
/// [`MeshObject::out_of_range_indices`].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct MeshObject {
    name: String,
    vertices: Vec<Vec3>,
    triangles: Vec<Triangle>,
    face_flags: Vec<FaceFlags>,
}

impl MeshObject {
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<Vec3>,
        triangles: Vec<Triangle>,
        face_flags: Vec<FaceFlags>,
    ) -> Self {
        debug_assert_eq!(triangles.len(), face_flags.len());

        Self {
            name: name.into(),
            vertices,
            triangles,
            face_flags,
        }
    }

    /// Flags for each triangle, parallel to [`MeshObject::triangles`].
    pub fn face_flags(&self) -> &[FaceFlags] {
        &self.face_flags
    }

    /// Flattens the triangle list into three indices per triangle.
    pub fn index_buffer(&self) -> Vec<u32> {
        self.triangles
            .iter()
            .flatten()
            .copied()
            .map(u32::from)
            .collect()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.triangles.is_empty()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the positions of any triangles which reference a vertex that does not exist.
    pub fn out_of_range_indices(&self) -> impl Iterator<Item = usize> + '_ {
        let vertex_count = self.vertices.len();

        self.triangles
            .iter()
            .enumerate()
            .filter(move |(_, triangle)| {
                triangle
                    .iter()
                    .any(|&idx| idx as usize >= vertex_count)
            })
            .map(|(idx, _)| idx)
    }

    pub(crate) fn push_triangle(&mut self, triangle: Triangle, flags: FaceFlags) {
        self.triangles.push(triangle);
        self.face_flags.push(flags);
    }

    pub(crate) fn push_vertex(&mut self, vertex: Vec3) {
        self.vertices.push(vertex);
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }
}
