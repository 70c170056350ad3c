//! Wavefront OBJ export through the mesh sink.

use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use bitmaze_geom::Vec3;
use bitmaze_level::{Door, Level};
use bitmaze_mesh_cpu::{MeshSink, Vertex};

/// Streams uploaded meshes as `v`/`vt`/`f` records. Face indices are rebased
/// so every upload lands after the previous ones.
pub struct ObjSink<W: Write> {
    out: W,
    written: u32,
    err: Option<io::Error>,
}

impl<W: Write> ObjSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            written: 0,
            err: None,
        }
    }

    /// Starts a named object; following uploads belong to it.
    pub fn object(&mut self, name: &str) {
        if self.err.is_none() {
            if let Err(e) = writeln!(self.out, "o {}", name) {
                self.err = Some(e);
            }
        }
    }

    fn write_mesh(&mut self, vertices: &[Vertex], indices: &[u32]) -> io::Result<()> {
        for v in vertices {
            writeln!(self.out, "v {} {} {}", v.pos.x, v.pos.y, v.pos.z)?;
        }
        for v in vertices {
            writeln!(self.out, "vt {} {}", v.uv.x, v.uv.y)?;
        }
        let base = self.written + 1;
        for tri in indices.chunks_exact(3) {
            let [a, b, c] = [tri[0] + base, tri[1] + base, tri[2] + base];
            writeln!(self.out, "f {a}/{a} {b}/{b} {c}/{c}")?;
        }
        self.written += vertices.len() as u32;
        Ok(())
    }

    /// Flushes and hands back the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.err.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> MeshSink for ObjSink<W> {
    fn upload(&mut self, vertices: &[Vertex], indices: &[u32]) {
        if self.err.is_some() {
            return;
        }
        if let Err(e) = self.write_mesh(vertices, indices) {
            self.err = Some(e);
        }
    }
}

/// Moves a panel-local point into the world with the door's yaw and
/// translation.
fn place(local: Vec3, door: &Door) -> Vec3 {
    let (s, c) = door.yaw().to_radians().sin_cos();
    Vec3::new(local.x * c - local.z * s, local.y, local.x * s + local.z * c) + door.translation()
}

/// Writes the static level followed by one object per door at its current
/// position.
pub fn write_level<W: Write>(level: &Level, sink: &mut ObjSink<W>) {
    sink.object("level");
    level.upload_to(sink);
    let panel = level.door_mesh();
    for door in level.doors() {
        let site = door.site();
        sink.object(&format!("door_{}_{}", site.x, site.z));
        let placed: Vec<Vertex> = panel
            .vertices
            .iter()
            .map(|v| Vertex::new(place(v.pos, door), v.uv))
            .collect();
        sink.upload(&placed, &panel.idx);
    }
}

pub fn export_level(level: &Level, path: &Path) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    let mut sink = ObjSink::new(BufWriter::new(file));
    write_level(level, &mut sink);
    sink.finish()?;
    log::info!("wrote {}", path.display());
    Ok(())
}
