// Stamps BUILD_TIME (rfc3339) so the footer can print the year the site was built.
fn main() {
    let stamped = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={stamped}");
    println!("cargo:rerun-if-changed=build.rs");
}
