//! Dependency extraction from package manifests.

use std::collections::BTreeMap;
use tracing::debug;

/// Collect `name -> version` pairs from every recognised manifest in `files`.
///
/// Unparseable manifests are skipped. When several manifests name the same
/// dependency, the lexically last path wins.
pub fn find_dependencies<'a, I>(files: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    let mut deps = BTreeMap::new();
    for (path, content) in files {
        let name = path.rsplit('/').next().unwrap_or(path);
        let parsed = match name {
            "Cargo.toml" => parse_cargo_toml(content),
            "package.json" => parse_package_json(content),
            "go.mod" => Some(parse_go_mod(content)),
            "requirements.txt" => Some(parse_requirements(content)),
            _ => continue,
        };
        match parsed {
            Some(found) => deps.extend(found),
            None => debug!(path = %path, "skipping unparseable manifest"),
        }
    }
    deps
}

fn parse_cargo_toml(content: &str) -> Option<Vec<(String, String)>> {
    let doc: toml::Table = content.parse().ok()?;
    let mut out = Vec::new();
    for section in ["dependencies", "workspace.dependencies"] {
        let table = section
            .split('.')
            .try_fold(&doc, |table, key| table.get(key)?.as_table());
        let Some(table) = table else { continue };
        for (name, spec) in table {
            let version = match spec {
                toml::Value::String(v) => v.clone(),
                toml::Value::Table(t) => t
                    .get("version")
                    .and_then(|v| v.as_str())
                    .unwrap_or("*")
                    .to_string(),
                _ => "*".to_string(),
            };
            out.push((name.clone(), version));
        }
    }
    Some(out)
}

fn parse_package_json(content: &str) -> Option<Vec<(String, String)>> {
    let doc: serde_json::Value = serde_json::from_str(content).ok()?;
    let deps = doc.get("dependencies").and_then(|d| d.as_object());
    Some(
        deps.into_iter()
            .flatten()
            .map(|(name, version)| {
                let version = version.as_str().unwrap_or("*").to_string();
                (name.clone(), version)
            })
            .collect(),
    )
}

fn parse_go_mod(content: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    let mut in_block = false;
    for line in content.lines() {
        let line = line.split("//").next().unwrap_or("").trim();
        if in_block {
            if line == ")" {
                in_block = false;
                continue;
            }
        } else if line == "require (" {
            in_block = true;
            continue;
        }

        let spec = if in_block {
            line
        } else if let Some(rest) = line.strip_prefix("require ") {
            rest.trim()
        } else {
            continue;
        };

        let mut parts = spec.split_whitespace();
        if let (Some(module), Some(version)) = (parts.next(), parts.next()) {
            out.push((module.to_string(), version.to_string()));
        }
    }
    out
}

fn parse_requirements(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty() && !line.starts_with('-'))
        .map(|line| {
            match line.find(|c: char| matches!(c, '=' | '>' | '<' | '~' | '!')) {
                Some(idx) => (line[..idx].trim().to_string(), line[idx..].trim().to_string()),
                None => (line.to_string(), "*".to_string()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn deps(files: &[(&str, &str)]) -> BTreeMap<String, String> {
        let map: BTreeMap<String, String> = files
            .iter()
            .map(|(p, c)| (p.to_string(), c.to_string()))
            .collect();
        find_dependencies(&map)
    }

    #[test]
    fn test_cargo_toml() {
        let found = deps(&[(
            "Cargo.toml",
            r#"
[package]
name = "demo"

[dependencies]
serde = { version = "1.0", features = ["derive"] }
anyhow = "1"
local = { path = "../local" }
"#,
        )]);
        assert_eq!(found.get("serde").map(String::as_str), Some("1.0"));
        assert_eq!(found.get("anyhow").map(String::as_str), Some("1"));
        assert_eq!(found.get("local").map(String::as_str), Some("*"));
    }

    #[test]
    fn test_package_json() {
        let found = deps(&[(
            "web/package.json",
            r#"{ "name": "x", "dependencies": { "react": "^18.2.0" }, "devDependencies": { "jest": "29" } }"#,
        )]);
        assert_eq!(found.len(), 1);
        assert_eq!(found["react"], "^18.2.0");
    }

    #[test]
    fn test_go_mod() {
        let found = deps(&[(
            "go.mod",
            "module example.com/x\n\ngo 1.21\n\nrequire github.com/spf13/cobra v1.8.0\n\nrequire (\n\tgopkg.in/yaml.v3 v3.0.1 // indirect\n\tgithub.com/a/b v0.1.0\n)\n",
        )]);
        assert_eq!(found["github.com/spf13/cobra"], "v1.8.0");
        assert_eq!(found["gopkg.in/yaml.v3"], "v3.0.1");
        assert_eq!(found["github.com/a/b"], "v0.1.0");
    }

    #[test]
    fn test_requirements_txt() {
        let found = deps(&[(
            "requirements.txt",
            "# tooling\nrequests==2.31.0\nflask >= 2.0\nnumpy\n-r other.txt\n",
        )]);
        assert_eq!(found["requests"], "==2.31.0");
        assert_eq!(found["flask"], ">= 2.0");
        assert_eq!(found["numpy"], "*");
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn test_non_manifests_and_garbage_ignored() {
        let found = deps(&[("src/main.rs", "fn main() {}"), ("package.json", "{ nope")]);
        assert!(found.is_empty());
    }
}
