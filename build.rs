//! Embeds version-control metadata as compile-time environment variables.
//!
//! Emits `GREENLIGHT_VCS_REVISION`, `GREENLIGHT_VCS_MODIFIED` and
//! `GREENLIGHT_VCS_TIME` when `git` is available and the crate is built from a
//! repository. Nothing is emitted otherwise; the version resolver treats
//! missing values as empty.

use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git")
        .args(args)
        .env("TZ", "UTC")
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let Some(revision) = git(&["rev-parse", "HEAD"]) else {
        return;
    };
    println!("cargo:rustc-env=GREENLIGHT_VCS_REVISION={revision}");

    if let Some(status) = git(&["status", "--porcelain", "--untracked-files=no"]) {
        let modified = !status.is_empty();
        println!("cargo:rustc-env=GREENLIGHT_VCS_MODIFIED={modified}");
    }

    // Commit time in UTC, matching the RFC 3339 "Z" form.
    if let Some(time) = git(&[
        "-c",
        "log.showSignature=false",
        "log",
        "-1",
        "--date=format-local:%Y-%m-%dT%H:%M:%SZ",
        "--format=%cd",
    ]) {
        if !time.is_empty() {
            println!("cargo:rustc-env=GREENLIGHT_VCS_TIME={time}");
        }
    }
}
