//! Custom cargo commands for docmatch.
//!
//! Usage:
//!   cargo xtask verify          - Run full verification suite
//!   cargo xtask test            - Run all tests (default and no-default features)
//!   cargo xtask check           - Quick check (check + test + clippy)
//!   cargo xtask bench           - Run benchmarks
//!   cargo xtask fuzz <target>   - Run a fuzz target (needs cargo-fuzz, nightly)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["evaluate_queries", "log_score"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref(), args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify                  Run full verification suite (markers + tests + clippy)
  test                    Run all Rust tests, with and without the parallel feature
  check                   Quick check (cargo check + test + clippy)
  bench                   Run benchmarks
  fuzz <target> [secs]    Run a fuzz target for [secs] seconds (default 60)

Fuzz targets: {}
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("docmatch Verification Suite");
    println!("==========================================\n");

    println!("[1/3] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/3] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    println!("[3/3] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests, once per feature set
fn test() -> Result<()> {
    run_cargo(&["test"])?;
    run_cargo(&["test", "--no-default-features", "--quiet"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run one fuzz target under cargo-fuzz
fn fuzz(target: Option<&str>, seconds: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("missing fuzz target, expected one of: {}", FUZZ_TARGETS.join(", "));
    };
    if !FUZZ_TARGETS.contains(&target) {
        bail!("unknown fuzz target '{}', expected one of: {}", target, FUZZ_TARGETS.join(", "));
    }
    let seconds: u64 = seconds
        .unwrap_or("60")
        .parse()
        .with_context(|| format!("invalid duration '{}'", seconds.unwrap_or_default()))?;

    let max_time = format!("-max_total_time={}", seconds);
    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", &max_time])
        .current_dir(project_root()?)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("fuzz target {} failed", target);
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 5 {
        bail!(
            "Expected at least 5 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}
