use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn usage() -> ExitCode {
    eprintln!("Usage:");
    eprintln!("  cargo run -p xtask -- ucd <UCD_DIR>                 regenerate data/*.tsv");
    eprintln!("  cargo run -p xtask -- pack <OUT_FILE>               pack data/ like build.rs does");
    eprintln!("  cargo run -p xtask --features wasm-opt -- dist <IN.wasm> <OUT.wasm>");
    ExitCode::FAILURE
}

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../data")
}

#[cfg(feature = "wasm-opt")]
fn dist(input: &str, output: &str) -> Result<(), String> {
    wasm_opt::OptimizationOptions::new_optimize_for_size_aggressively()
        .run(input, output)
        .map_err(|e| e.to_string())
}

#[cfg(not(feature = "wasm-opt"))]
fn dist(_input: &str, _output: &str) -> Result<(), String> {
    Err("rebuild xtask with `--features wasm-opt` to use `dist`".to_string())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["ucd", ucd_dir] => xtask::ucd::generate(Path::new(ucd_dir), &data_dir())
            .map_err(|e| e.to_string()),
        ["pack", out] => xtask::pack_tables(&data_dir(), Path::new(out)).map_err(|e| e.to_string()),
        ["dist", input, output] => dist(input, output),
        _ => return usage(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
