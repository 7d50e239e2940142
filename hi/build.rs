fn main() {
    // `linux-rt` provides `_start`; keep the C runtime's startup objects out of the binary and make
    // sure the archive member that defines `_start` gets linked in
    println!("cargo:rustc-link-arg-bins=-nostartfiles");
    println!("cargo:rustc-link-arg-bins=-Wl,--undefined=_start");
    println!("cargo:rerun-if-changed=build.rs");
}
