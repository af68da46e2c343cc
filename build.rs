//! Build script for Galactic Cocktails
//!
//! Bumps a local build counter and embeds build metadata. The embedded
//! price and catalog tables live in `data/`, so edits there also trigger a rebuild.

use std::fs;
use std::path::Path;

const BUILD_NUMBER_FILE: &str = "build_number.txt";

fn read_build_number(path: &Path) -> u64 {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=data");

    let counter = Path::new(BUILD_NUMBER_FILE);
    let build = read_build_number(counter) + 1;

    if let Err(e) = fs::write(counter, build.to_string()) {
        println!("cargo:warning=could not persist build number: {}", e);
    }

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    println!("cargo:rustc-env=GALACTIC_BUILD_NUMBER={}", build);
    println!("cargo:rustc-env=GALACTIC_BUILD_TIMESTAMP={}", timestamp);
    println!("cargo:warning=Galactic Cocktails build #{} at {}", build, timestamp);
}
