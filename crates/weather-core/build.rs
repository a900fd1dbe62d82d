// File: crates/weather-core/build.rs
// Summary: Links the Windows system libraries Skia/ICU expect when the dashboard renderer is built.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW (font manager lookups)
        println!("cargo:rustc-link-lib=advapi32");
    }
}
