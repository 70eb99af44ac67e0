use std::env;
use std::process::Command;

// Release builds are stamped with the git commit they were built from,
// and refuse to build from a dirty tree.
fn main() {
    let opt_level = env::var("OPT_LEVEL").unwrap_or_else(|_| "0".to_string());

    let release = if opt_level != "0" {
        let status = Command::new("git")
            .args(["status", "--porcelain"])
            .output()
            .expect("Failed to execute git status --porcelain");

        if !status.stdout.is_empty() {
            panic!("Uncommited files exist")
        }

        let commit = Command::new("git")
            .args(["rev-parse", "--short", "HEAD"])
            .output()
            .expect("Failed to get git commit hash")
            .stdout;

        String::from_utf8(commit).expect("Invalid UTF-8 data")
    } else {
        "Development build".into()
    };

    println!("cargo:rustc-env=RELEASE={}", release.trim());
}
