use std::error::Error;
use std::path::{Path, PathBuf};

use bitmaze_map::Grid;

/// Resolves a map argument to a file on disk.
pub fn resolve_map_path(arg: &Path) -> PathBuf {
    // Precedence: path as given -> BITMAZE_ASSETS/maps -> nearby assets/maps -> as given
    if arg.exists() {
        return arg.to_path_buf();
    }
    if let Ok(p) = std::env::var("BITMAZE_ASSETS") {
        let pb = maps_dir(Path::new(&p)).join(arg);
        if pb.exists() {
            return pb;
        }
    }
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd);
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.to_path_buf());
        }
    }
    candidates.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")));

    for base in candidates {
        let mut cur = base;
        for _ in 0..5 {
            let check = maps_dir(&cur).join(arg);
            if check.exists() {
                return check;
            }
            match cur.parent() {
                Some(parent) => cur = parent.to_path_buf(),
                None => break,
            }
        }
    }
    arg.to_path_buf()
}

pub fn maps_dir(root: &Path) -> PathBuf {
    root.join("assets/maps")
}

/// Decodes a map image into a grid. Rows are flipped so that image row 0
/// becomes the last row of the level.
pub fn load_map(path: &Path) -> Result<Grid, Box<dyn Error>> {
    let img = image::open(path).map_err(|e| format!("failed to load {}: {}", path.display(), e))?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    let grid = Grid::from_rgba8(w as usize, h as usize, rgba.as_raw()).flipped_y();
    log::info!("loaded map {} ({}x{})", path.display(), w, h);
    Ok(grid)
}
