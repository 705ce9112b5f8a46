use ghissues_core::paths::GITHUB_DIR;
use std::path::{Path, PathBuf};

/// Resolve the project root.
///
/// Priority:
/// 1. `--root` flag / `GHISSUES_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `.github/`
/// 3. Walk upward from `cwd` looking for `.git/`
/// 4. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    discover_root(&cwd)
}

fn discover_root(start: &Path) -> PathBuf {
    find_ancestor_with(start, GITHUB_DIR)
        .or_else(|| find_ancestor_with(start, ".git"))
        .unwrap_or_else(|| start.to_path_buf())
}

fn find_ancestor_with(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).is_dir())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_root_wins() {
        let dir = TempDir::new().unwrap();
        let result = resolve_root(Some(dir.path()));
        assert_eq!(result, dir.path());
    }

    #[test]
    fn finds_github_dir_above_cwd() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".github")).unwrap();
        let subdir = dir.path().join("src/deep");
        std::fs::create_dir_all(&subdir).unwrap();

        assert_eq!(discover_root(&subdir), dir.path());
    }

    #[test]
    fn github_dir_preferred_over_git_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".git")).unwrap();
        let project = dir.path().join("project");
        std::fs::create_dir_all(project.join(".github")).unwrap();
        let subdir = project.join("docs");
        std::fs::create_dir_all(&subdir).unwrap();

        assert_eq!(discover_root(&subdir), project);
    }
}
