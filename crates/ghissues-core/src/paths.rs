use std::path::{Path, PathBuf};

pub const GITHUB_DIR: &str = ".github";
pub const PROJECT_TASKS_FILE: &str = ".github/project_tasks.json";

pub fn project_tasks_path(root: &Path) -> PathBuf {
    root.join(PROJECT_TASKS_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_tasks_path_is_under_github_dir() {
        let path = project_tasks_path(Path::new("/repo"));
        assert_eq!(path, PathBuf::from("/repo/.github/project_tasks.json"));
        assert!(path.starts_with(Path::new("/repo").join(GITHUB_DIR)));
    }
}
