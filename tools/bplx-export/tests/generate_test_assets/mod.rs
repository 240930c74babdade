//! Source assets for integration tests

use std::fs;
use std::io;
use std::path::Path;

/// Cube with shared corners, quad faces and per-face normals (1-based)
pub fn generate_cube_obj(path: &Path) -> io::Result<()> {
    let obj = "\
# cube
o Cube
v -1 -1 1
v 1 -1 1
v -1 1 1
v 1 1 1
v -1 -1 -1
v 1 -1 -1
v -1 1 -1
v 1 1 -1
vt 0 0
vt 1 0
vt 1 1
vt 0 1
vn 0 0 1
vn 0 0 -1
vn -1 0 0
vn 1 0 0
vn 0 1 0
vn 0 -1 0
f 1/1/1 2/2/1 4/3/1 3/4/1
f 6/1/2 5/2/2 7/3/2 8/4/2
f 5/1/3 1/2/3 3/3/3 7/4/3
f 2/1/4 6/2/4 8/3/4 4/4/4
f 3/1/5 4/2/5 8/3/5 7/4/5
f 5/1/6 6/2/6 2/3/6 1/4/6
";
    fs::write(path, obj)
}

/// Single triangle with already zero-based indices
pub fn generate_zero_based_triangle_obj(path: &Path) -> io::Result<()> {
    fs::write(path, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 1 2\n")
}
