fn main() {
    println!("cargo:rerun-if-env-changed=BB_API_LIB_DIR");

    #[cfg(feature = "bb-api")]
    {
        if let Ok(dir) = std::env::var("BB_API_LIB_DIR") {
            println!("cargo:rustc-link-search=native={}", dir);
        }
        println!("cargo:rustc-link-lib=bb_api");
    }
}
