use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn main() {
    let hash = short_commit_hash().unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=FINGERPAINT_GIT_HASH={hash}");

    if let Some(git_dir) = git_dir() {
        for watched in ["HEAD", "refs", "packed-refs"] {
            rerun_if_exists(&git_dir.join(watched));
        }
    }
}

fn short_commit_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!hash.is_empty()).then_some(hash)
}

fn git_dir() -> Option<PathBuf> {
    if let Some(from_env) = env::var_os("GIT_DIR") {
        return Some(PathBuf::from(from_env));
    }

    let dot_git = PathBuf::from(".git");
    if dot_git.is_dir() {
        return Some(dot_git);
    }

    // Worktrees and submodules point at the real directory from a file.
    let contents = fs::read_to_string(&dot_git).ok()?;
    let target = PathBuf::from(contents.strip_prefix("gitdir:")?.trim());
    Some(if target.is_relative() {
        dot_git.parent().map(|p| p.join(&target)).unwrap_or(target)
    } else {
        target
    })
}

fn rerun_if_exists(path: &Path) {
    if path.exists()
        && let Some(display) = path.to_str()
    {
        println!("cargo:rerun-if-changed={display}");
    }
}
