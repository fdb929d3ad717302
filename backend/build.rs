use std::fs;
use std::path::Path;

const PLACEHOLDER: &str = "<!DOCTYPE html>
<html>
<head><meta charset=\"utf-8\"><title>Invoice Template Editor</title></head>
<body><p>The editor bundle was not built. Run <code>trunk build --release</code> in <code>frontend/</code> and rebuild the backend.</p></body>
</html>
";

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .unwrap();
    } else {
        // include_dir! needs static/dist to exist even without a frontend build
        let embedded = out_dir.join("dist");
        let index = embedded.join("index.html");
        if !index.exists() {
            fs::create_dir_all(&embedded).unwrap();
            fs::write(index, PLACEHOLDER).unwrap();
        }
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
