use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
}

fn main() {
    let git_hash = git(&["rev-parse", "--short=7", "HEAD"])
        .map_or_else(|| "gunknown".to_string(), |s| format!("g{s}"));

    // Untagged checkouts fall back to the manifest version
    let git_version = git(&["describe", "--tags", "--abbrev=0"]).map_or_else(
        || env!("CARGO_PKG_VERSION").to_string(),
        |s| s.strip_prefix('v').unwrap_or(&s).to_string(),
    );

    println!("cargo::rerun-if-changed=.git/HEAD");
    println!("cargo::rerun-if-changed=.git/refs/heads");
    println!("cargo::rerun-if-changed=Cargo.toml");

    println!("cargo:rustc-env=GIT_HASH={git_hash}");
    println!("cargo:rustc-env=GIT_VERSION={git_version}");
}
