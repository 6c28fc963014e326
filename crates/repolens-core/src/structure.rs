use std::collections::BTreeSet;

/// Render the directory tree implied by a list of relative file paths.
///
/// Only directories are listed, one per line, indented by depth:
///
/// ```text
/// .
/// └── cmd
///   └── server
/// └── internal
/// ```
pub fn build_dir_structure<S: AsRef<str>>(files: &[S]) -> String {
    let mut dirs = BTreeSet::new();
    for file in files {
        let mut path = file.as_ref().trim_start_matches("./");
        while let Some((parent, _)) = path.rsplit_once('/') {
            if parent.is_empty() || parent == "." {
                break;
            }
            dirs.insert(parent);
            path = parent;
        }
    }

    let mut out = String::from(".\n");
    for dir in dirs {
        let depth = dir.matches('/').count();
        let name = dir.rsplit('/').next().unwrap_or(dir);
        out.push_str(&"  ".repeat(depth));
        out.push_str("└── ");
        out.push_str(name);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nested_directories() {
        let files = [
            "README.md",
            "cmd/server/main.go",
            "internal/api/handler.go",
            "internal/db.go",
        ];
        assert_eq!(
            build_dir_structure(&files),
            ".\n└── cmd\n  └── server\n└── internal\n  └── api\n"
        );
    }

    #[test]
    fn test_flat_repository() {
        assert_eq!(build_dir_structure(&["a.rs", "b.rs"]), ".\n");
        assert_eq!(build_dir_structure::<&str>(&[]), ".\n");
    }
}
