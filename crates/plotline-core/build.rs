// File: crates/plotline-core/build.rs
// Summary: Build script to link required Windows system libraries for the Skia raster backend.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager needs RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
