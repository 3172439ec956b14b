use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    // Copy config.toml next to the built binary
    let config_path = Path::new("config.toml");
    if !config_path.exists() {
        return;
    }
    let dest_path = Path::new(&out_dir)
        .ancestors()
        .nth(3)
        .expect("OUT_DIR sits three levels below the profile directory")
        .join("config.toml");

    fs::copy(config_path, dest_path).expect("Failed to copy config.toml");
}
