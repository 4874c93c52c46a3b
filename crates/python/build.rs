//! Linker setup for building `comment_strip` as a Python extension module.

fn main() {
    // Wheel builds enable `extension-module`; plain `cargo test` links
    // against libpython instead and must not get these args.
    if std::env::var_os("CARGO_FEATURE_EXTENSION_MODULE").is_some() {
        pyo3_build_config::add_extension_module_link_args();
    }
}
