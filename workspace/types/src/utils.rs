use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Expands `~` and resolves relative paths against `base` (or the current directory).
pub fn expand_path(dir: &Path, base: Option<&Path>) -> PathBuf {
    if dir.to_string_lossy().starts_with('~') {
        let dir_str = dir.to_string_lossy();
        PathBuf::from(shellexpand::tilde(&dir_str).to_string())
    } else if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        let parent_dir = match base {
            Some(path) => path.to_path_buf(),
            None => env::current_dir().unwrap_or_default(),
        };

        let path = parent_dir.join(dir);
        fs::canonicalize(&path).unwrap_or(path)
    }
}
