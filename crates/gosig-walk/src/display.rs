//! Display paths relative to the working directory.

use std::path::{Component, Path, PathBuf};

/// Render `path` relative to `cwd`, stepping out with `..` when it lies
/// outside. Purely lexical; symlinks are not resolved.
#[must_use]
pub fn display_path(path: &Path, cwd: &Path) -> String {
    let absolute = normalize(&cwd.join(path));
    let base = normalize(cwd);

    let ours: Vec<Component<'_>> = absolute.components().collect();
    let theirs: Vec<Component<'_>> = base.components().collect();

    // Different roots (e.g. Windows drives): nothing to be relative to.
    if ours.first() != theirs.first() {
        return absolute.display().to_string();
    }

    let shared = ours
        .iter()
        .zip(&theirs)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in shared..theirs.len() {
        relative.push("..");
    }
    for component in &ours[shared..] {
        relative.push(component.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        ".".to_string()
    } else {
        relative.display().to_string()
    }
}

/// Drop `.` components and fold `..` into its parent.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("pkg/a.go", "pkg/a.go")]
    #[case("./pkg/a.go", "pkg/a.go")]
    #[case("/work/proj/pkg/a.go", "pkg/a.go")]
    #[case("/work/other/b.go", "../other/b.go")]
    #[case("../proj/c.go", "c.go")]
    #[case("pkg/../d.go", "d.go")]
    #[case("/elsewhere/e.go", "../../elsewhere/e.go")]
    fn relative_to_working_directory(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(
            display_path(Path::new(path), Path::new("/work/proj")),
            expected
        );
    }

    #[test]
    fn working_directory_itself() {
        assert_eq!(display_path(Path::new("."), Path::new("/work")), ".");
    }
}
