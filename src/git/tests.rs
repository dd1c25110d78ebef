// repohop: Locate, inspect, and jump between local git checkouts
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::config::Config;
use crate::config::paths::PathsConfig;
use crate::error::{GitError, HopError};
use crate::git::classify::{Freshness, classify};
use crate::git::cmd::{fetch, status_text};
use crate::git::discovery::{filter_repos, find_dirs, find_repos};
use crate::git::ops::{FetchOutcome, RepoStatus, check_repo, survey_repos};
use crate::git::query::is_git_repo;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn config_with_root(root: &Path) -> Config {
    Config {
        paths: PathsConfig {
            root: Some(root.to_path_buf()),
        },
        ..Default::default()
    }
}

/// Initialize a git repository with an initial commit.
/// Uses shell git so fixtures go through the same binary the crate drives.
/// Returns the name of the default branch (master or main depending on git config).
fn init_repo_with_commit(path: &Path) -> std::io::Result<String> {
    // git init
    let output = Command::new("git")
        .args(["init", "--quiet"])
        .current_dir(path)
        .output()?;
    if !output.status.success() {
        return Err(std::io::Error::other(
            String::from_utf8_lossy(&output.stderr).to_string(),
        ));
    }

    // git config (needed for commit)
    Command::new("git")
        .args(["config", "user.email", "test@example.com"])
        .current_dir(path)
        .output()?;
    Command::new("git")
        .args(["config", "user.name", "Test"])
        .current_dir(path)
        .output()?;

    // git commit --allow-empty (creates initial commit without files)
    let output = Command::new("git")
        .args(["commit", "--allow-empty", "-m", "Initial commit", "--quiet"])
        .current_dir(path)
        .output()?;
    if !output.status.success() {
        return Err(std::io::Error::other(
            String::from_utf8_lossy(&output.stderr).to_string(),
        ));
    }

    // Get the current branch name (could be master or main)
    let output = Command::new("git")
        .args(["branch", "--show-current"])
        .current_dir(path)
        .output()?;
    let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();

    Ok(branch)
}

/// Add an empty commit on top of an existing repository.
fn add_commit(path: &Path, message: &str) -> std::io::Result<()> {
    let output = Command::new("git")
        .args(["commit", "--allow-empty", "-m", message, "--quiet"])
        .current_dir(path)
        .output()?;
    if !output.status.success() {
        return Err(std::io::Error::other(
            String::from_utf8_lossy(&output.stderr).to_string(),
        ));
    }
    Ok(())
}

/// Clone `src` to `dst` over a file:// URL so origin tracking is set up
/// without network access.
fn clone_repo(src: &Path, dst: &Path) -> std::io::Result<()> {
    let url = format!("file://{}", src.display());
    let output = Command::new("git")
        .args(["clone", "--quiet", &url])
        .arg(dst)
        .output()?;
    if !output.status.success() {
        return Err(std::io::Error::other(
            String::from_utf8_lossy(&output.stderr).to_string(),
        ));
    }
    Ok(())
}

// --- classify ---

#[test]
fn test_classify_behind_is_stale() {
    let text = "On branch main\n\
        Your branch is behind 'origin/main' by 2 commits, and can be fast-forwarded.\n\
        \n\
        nothing to commit, working tree clean";
    assert_eq!(classify(text), Freshness::Stale);
}

#[test]
fn test_classify_up_to_date() {
    let text = "On branch main\n\
        Your branch is up to date with 'origin/main'.\n\
        \n\
        nothing to commit, working tree clean";
    assert_eq!(classify(text), Freshness::UpToDate);
}

#[test]
fn test_classify_hyphenated_spelling() {
    // git before 2.15 spells the phrase with hyphens
    let text = "On branch main\nYour branch is up-to-date with 'origin/main'.";
    assert_eq!(classify(text), Freshness::UpToDate);
}

#[test]
fn test_classify_ignores_case() {
    let text = "Your branch is Up To Date with 'origin/main'.";
    assert_eq!(classify(text), Freshness::UpToDate);
}

#[test]
fn test_classify_behind_wins_over_up_to_date() {
    // Both phrases in one output: the behind marker decides
    let text = "Your branch is behind 'origin/main' by 1 commit.\n\
        Your branch is up to date with 'origin/main'.";
    assert_eq!(classify(text), Freshness::Stale);
}

#[test]
fn test_classify_ahead_is_unknown() {
    let text = "On branch main\nYour branch is ahead of 'origin/main' by 1 commit.";
    assert_eq!(classify(text), Freshness::Unknown);
}

#[test]
fn test_classify_diverged_is_unknown() {
    let text = "Your branch and 'origin/main' have diverged,\n\
        and have 1 and 2 different commits each, respectively.";
    assert_eq!(classify(text), Freshness::Unknown);
}

#[test]
fn test_classify_empty_is_unknown() {
    assert_eq!(classify(""), Freshness::Unknown);
}

#[test]
fn test_freshness_display_labels() {
    insta::assert_snapshot!(Freshness::Stale, @"stale");
    insta::assert_snapshot!(Freshness::UpToDate, @"up-to-date");
    insta::assert_snapshot!(Freshness::Unknown, @"unknown");
}

// --- query ---

#[test]
fn test_is_git_repo_detects_marker() {
    let temp = temp_dir();
    let repo = temp.path().join("repo");
    std::fs::create_dir_all(repo.join(".git")).expect("failed to create .git");
    assert!(is_git_repo(&repo));
}

#[test]
fn test_is_git_repo_rejects_plain_directory() {
    let temp = temp_dir();
    let plain = temp.path().join("plain");
    std::fs::create_dir_all(&plain).expect("failed to create dir");
    assert!(!is_git_repo(&plain));
}

#[test]
fn test_is_git_repo_accepts_gitfile() {
    // Worktrees and submodules carry a .git file instead of a directory
    let temp = temp_dir();
    let worktree = temp.path().join("worktree");
    std::fs::create_dir_all(&worktree).expect("failed to create dir");
    std::fs::write(worktree.join(".git"), "gitdir: ../elsewhere").expect("failed to write marker");
    assert!(is_git_repo(&worktree));
}

// --- discovery ---

#[test]
fn test_find_dirs_matches_case_insensitively() {
    let temp = temp_dir();
    for name in ["Alpha-api", "beta-API", "gamma-web"] {
        std::fs::create_dir_all(temp.path().join(name)).expect("failed to create dir");
    }

    let config = config_with_root(temp.path());
    let dirs = find_dirs(&config, "api").expect("find_dirs should succeed");

    let names: Vec<_> = dirs
        .iter()
        .filter_map(|p| p.file_name())
        .filter_map(|n| n.to_str())
        .collect();
    assert_eq!(names, vec!["Alpha-api", "beta-API"]);
}

#[test]
fn test_find_dirs_empty_term_matches_everything() {
    let temp = temp_dir();
    for name in ["one", "two"] {
        std::fs::create_dir_all(temp.path().join(name)).expect("failed to create dir");
    }

    let config = config_with_root(temp.path());
    let dirs = find_dirs(&config, "").expect("find_dirs should succeed");
    assert_eq!(dirs.len(), 2);
}

#[test]
fn test_find_dirs_skips_hidden_and_files() {
    let temp = temp_dir();
    std::fs::create_dir_all(temp.path().join("api")).expect("failed to create dir");
    std::fs::create_dir_all(temp.path().join(".api-cache")).expect("failed to create hidden dir");
    std::fs::write(temp.path().join("api.txt"), "notes").expect("failed to create file");

    let config = config_with_root(temp.path());
    let dirs = find_dirs(&config, "api").expect("find_dirs should succeed");

    let names: Vec<_> = dirs
        .iter()
        .filter_map(|p| p.file_name())
        .filter_map(|n| n.to_str())
        .collect();
    assert_eq!(names, vec!["api"]);
}

#[test]
fn test_find_dirs_returns_sorted_paths() {
    let temp = temp_dir();
    for name in ["zeta", "alpha", "mid"] {
        std::fs::create_dir_all(temp.path().join(name)).expect("failed to create dir");
    }

    let config = config_with_root(temp.path());
    let dirs = find_dirs(&config, "").expect("find_dirs should succeed");

    let names: Vec<_> = dirs
        .iter()
        .filter_map(|p| p.file_name())
        .filter_map(|n| n.to_str())
        .collect();
    assert_eq!(names, vec!["alpha", "mid", "zeta"]);
}

#[test]
fn test_find_dirs_errors_without_root() {
    let config = Config::default();
    let result = find_dirs(&config, "api");
    assert!(
        result.is_err(),
        "should error when paths.root is not configured"
    );
    let err_msg = result.unwrap_err().to_string();
    assert!(
        err_msg.contains("'root'") && err_msg.contains("[paths]"),
        "error message should name the missing key, got: {err_msg}"
    );
}

#[test]
fn test_filter_repos_keeps_only_repositories() {
    let temp = temp_dir();
    let repo = temp.path().join("api-server");
    let plain = temp.path().join("api-docs");
    std::fs::create_dir_all(repo.join(".git")).expect("failed to create repo marker");
    std::fs::create_dir_all(&plain).expect("failed to create dir");

    let filtered = filter_repos(vec![repo.clone(), plain]);
    assert_eq!(filtered, vec![repo]);
}

#[test]
fn test_filter_repos_is_idempotent() {
    let temp = temp_dir();
    let repo = temp.path().join("api-server");
    let plain = temp.path().join("api-docs");
    std::fs::create_dir_all(repo.join(".git")).expect("failed to create repo marker");
    std::fs::create_dir_all(&plain).expect("failed to create dir");

    let once = filter_repos(vec![repo, plain]);
    let twice = filter_repos(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn test_find_repos_composes_match_and_filter() {
    let temp = temp_dir();
    let repo = temp.path().join("api-server");
    std::fs::create_dir_all(&repo).expect("failed to create dir");
    init_repo_with_commit(&repo).expect("failed to init repo");
    std::fs::create_dir_all(temp.path().join("api-notes")).expect("failed to create dir");

    let config = config_with_root(temp.path());
    let repos = find_repos(&config, "api").expect("find_repos should succeed");
    assert_eq!(repos, vec![repo]);
}

// --- cmd ---

#[test]
fn test_status_text_reports_branch_state() {
    let temp = temp_dir();
    let branch = init_repo_with_commit(temp.path()).expect("failed to init repo");

    let text = status_text(temp.path()).expect("status should succeed");
    assert!(
        text.contains(&branch),
        "status should mention the current branch, got: {text}"
    );
}

#[test]
fn test_status_text_rejects_plain_directory() {
    let temp = temp_dir();
    let err = status_text(temp.path()).expect_err("status in a plain directory should fail");
    match err {
        HopError::Git(e) => assert!(matches!(*e, GitError::NotARepository { .. })),
        other => panic!("expected a git error, got {other:?}"),
    }
}

#[test]
fn test_fetch_rejects_plain_directory() {
    let temp = temp_dir();
    let err = fetch(temp.path()).expect_err("fetch in a plain directory should fail");
    assert!(
        err.to_string().contains("not a git repository"),
        "unexpected error: {err}"
    );
}

// --- ops ---

#[test]
fn test_check_repo_skips_non_repository() {
    let temp = temp_dir();
    let plain = temp.path().join("plain");
    std::fs::create_dir_all(&plain).expect("failed to create dir");

    let status = check_repo(&plain);
    assert_eq!(status.freshness, Freshness::Unknown);
    assert_eq!(status.fetch, FetchOutcome::Skipped);
    assert!(!status.is_stale());
}

#[test]
fn test_check_repo_fresh_clone_is_up_to_date() {
    let origin = temp_dir();
    init_repo_with_commit(origin.path()).expect("failed to init origin");

    let work = temp_dir();
    let clone = work.path().join("clone");
    clone_repo(origin.path(), &clone).expect("failed to clone");

    let status = check_repo(&clone);
    assert_eq!(status.fetch, FetchOutcome::Completed);
    assert_eq!(status.freshness, Freshness::UpToDate);
}

#[test]
fn test_check_repo_detects_stale_clone() {
    let origin = temp_dir();
    init_repo_with_commit(origin.path()).expect("failed to init origin");

    let work = temp_dir();
    let clone = work.path().join("clone");
    clone_repo(origin.path(), &clone).expect("failed to clone");

    // Origin moves ahead; the clone is now behind
    add_commit(origin.path(), "Second commit").expect("failed to commit");

    let status = check_repo(&clone);
    assert_eq!(status.fetch, FetchOutcome::Completed);
    assert_eq!(status.freshness, Freshness::Stale);
    assert!(status.is_stale());
}

#[test]
fn test_check_repo_marks_unreachable_remote() {
    let origin = temp_dir();
    init_repo_with_commit(origin.path()).expect("failed to init origin");

    let work = temp_dir();
    let clone = work.path().join("clone");
    clone_repo(origin.path(), &clone).expect("failed to clone");

    // Remove the remote out from under the clone; fetch now fails but the
    // remote-tracking ref still answers the status query
    drop(origin);

    let status = check_repo(&clone);
    assert_eq!(status.fetch, FetchOutcome::Failed);
    assert_eq!(status.freshness, Freshness::UpToDate);
    insta::assert_snapshot!(status.freshness_label(), @"up-to-date (network-unconfirmed)");
}

#[test]
fn test_freshness_label_marks_failed_fetch() {
    let status = RepoStatus {
        path: PathBuf::from("/somewhere/api-server"),
        freshness: Freshness::Stale,
        fetch: FetchOutcome::Failed,
    };
    insta::assert_snapshot!(status.freshness_label(), @"stale (network-unconfirmed)");

    let confirmed = RepoStatus {
        fetch: FetchOutcome::Completed,
        ..status
    };
    insta::assert_snapshot!(confirmed.freshness_label(), @"stale");
}

#[test]
fn test_repo_status_name_uses_final_component() {
    let status = RepoStatus {
        path: PathBuf::from("/somewhere/api-server"),
        freshness: Freshness::Unknown,
        fetch: FetchOutcome::Skipped,
    };
    assert_eq!(status.name(), "api-server");
}

#[test]
fn test_survey_counts_matches_and_repos() {
    let temp = temp_dir();
    let repo = temp.path().join("api-server");
    std::fs::create_dir_all(&repo).expect("failed to create dir");
    init_repo_with_commit(&repo).expect("failed to init repo");
    // Matches the term but carries no marker, so it gets no status
    std::fs::create_dir_all(temp.path().join("api-notes")).expect("failed to create dir");

    let config = config_with_root(temp.path());
    let survey = survey_repos(&config, "api").expect("survey should succeed");

    assert_eq!(survey.matched_dirs, 2);
    assert_eq!(survey.statuses.len(), 1);
    assert_eq!(survey.statuses[0].name(), "api-server");
}

#[test]
fn test_survey_without_matches_is_empty() {
    let temp = temp_dir();
    std::fs::create_dir_all(temp.path().join("unrelated")).expect("failed to create dir");

    let config = config_with_root(temp.path());
    let survey = survey_repos(&config, "zzz").expect("survey should succeed");

    assert_eq!(survey.matched_dirs, 0);
    assert!(survey.statuses.is_empty());
    assert!(survey.stale().is_empty());
}

#[test]
fn test_survey_stale_filters_statuses() {
    let origin = temp_dir();
    init_repo_with_commit(origin.path()).expect("failed to init origin");

    let root = temp_dir();
    let fresh = root.path().join("api-fresh");
    let behind = root.path().join("api-behind");
    clone_repo(origin.path(), &fresh).expect("failed to clone fresh");
    clone_repo(origin.path(), &behind).expect("failed to clone behind");

    add_commit(origin.path(), "Second commit").expect("failed to commit");

    // Bring the fresh clone current again; the other clone stays behind
    let output = Command::new("git")
        .args(["pull", "--quiet"])
        .current_dir(&fresh)
        .output()
        .expect("failed to run git pull");
    assert!(
        output.status.success(),
        "git pull should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let config = config_with_root(root.path());
    let survey = survey_repos(&config, "api").expect("survey should succeed");

    assert_eq!(survey.statuses.len(), 2);
    let stale: Vec<_> = survey
        .stale()
        .iter()
        .map(|s| s.name().to_string())
        .collect();
    assert_eq!(stale, vec!["api-behind"]);
}
