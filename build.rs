fn main() {
    // The footer's copyright year comes from this stamp, so a deployed build
    // keeps the year it was made in.
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={build_time}");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=profiles");
}
