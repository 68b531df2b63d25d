fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Set empty build version (git hash not available in packaged builds)
    println!("cargo:rustc-env=BUILD_VERSION=");
}
