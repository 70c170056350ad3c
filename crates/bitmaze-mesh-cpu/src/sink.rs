use crate::mesh_build::{MeshBuild, Vertex};

/// Receiver for finished triangle-list meshes (a GPU upload, an exporter, ...).
pub trait MeshSink {
    fn upload(&mut self, vertices: &[Vertex], indices: &[u32]);
}

impl MeshSink for MeshBuild {
    #[inline]
    fn upload(&mut self, vertices: &[Vertex], indices: &[u32]) {
        self.append(vertices, indices);
    }
}

impl MeshSink for Vec<MeshBuild> {
    #[inline]
    fn upload(&mut self, vertices: &[Vertex], indices: &[u32]) {
        let mut mb = MeshBuild::default();
        mb.append(vertices, indices);
        self.push(mb);
    }
}
