use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=LIVECATALOG_CATALOG_HINT");

    let hint = env::var("LIVECATALOG_CATALOG_HINT").ok().or_else(|| {
        env::var("CARGO_MANIFEST_DIR")
            .ok()
            .map(|dir| format!("{dir}/fixtures/catalog.json"))
    });

    if let Some(raw_hint) = hint {
        let candidate = PathBuf::from(raw_hint);
        let canonical = candidate.canonicalize().unwrap_or(candidate);

        println!(
            "cargo:rustc-env=LIVECATALOG_CATALOG_HINT={}",
            canonical.display()
        );
    }
}
