use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

pub(crate) const STATIONS_HEADER: &str = "station_cd,station_g_cd,station_name,station_name_r,line_cd";
pub(crate) const TYPES_HEADER: &str = "id,type_cd,type_name,type_name_r";
pub(crate) const LINES_HEADER: &str = "line_cd,company_cd,line_name";
pub(crate) const SST_HEADER: &str = "id,station_cd,type_cd,line_group_cd,pass";

/// Create a git repository containing `files` in a single initial commit.
pub(crate) fn create_data_repo(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    for (name, content) in files {
        write_file(path, name, content);
    }
    commit_all(path, "Initial data");

    temp_dir
}

pub(crate) fn write_file(repo_dir: &Path, name: &str, content: &str) {
    let target = repo_dir.join(name);
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(target, content).unwrap();
}

pub(crate) fn commit_all(repo_dir: &Path, message: &str) {
    git(repo_dir, &["add", "-A"]);
    git(repo_dir, &["commit", "--allow-empty", "-m", message]);
}

/// Join a header and rows into CSV file content with a trailing newline.
pub(crate) fn csv(header: &str, rows: &[&str]) -> String {
    let mut out = String::from(header);
    out.push('\n');
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    out
}

pub(crate) fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}
