use std::env;
use std::path::{Path, PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=data");
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    xtask::pack_tables(Path::new("data"), &out_dir.join("ucd_tables.postcard.zst"))
        .expect("failed to pack UCD tables from data/");
}
