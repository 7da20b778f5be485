use crate::{
    common::error::{ReadingFile, Result, TemplateWalk, WritingFile},
    scaffold::config::CicdConfig,
};
use snafu::ResultExt;
use std::path::Path;
use tracing::info;
use walkdir::WalkDir;

/// Mapping from literal placeholder token to its replacement string.
#[derive(Debug, Clone)]
pub struct Replacements {
    map: Vec<(String, String)>,
}

impl Replacements {
    /// The two-token replacement map sourced from `.cicd.yaml`.
    pub fn from_config(config: &CicdConfig) -> Self {
        Self {
            map: vec![
                (
                    constants::PROJECT_NAME_TOKEN.to_string(),
                    config.project().to_string(),
                ),
                (
                    constants::APP_NAME_TOKEN.to_string(),
                    config.app().to_string(),
                ),
            ],
        }
    }

    /// Replace every occurrence of every token in `content`. This is deliberately a literal
    /// whole-file string replace, not structural YAML editing.
    pub fn apply(&self, content: &str) -> String {
        self.map
            .iter()
            .fold(content.to_string(), |content, (token, value)| {
                content.replace(token.as_str(), value.as_str())
            })
    }
}

/// Substitute the placeholder tokens in every `.yaml` file under `directory`. Files with any
/// other extension are left untouched.
pub fn substitute_tree(directory: &Path, replacements: &Replacements) -> Result<()> {
    for entry in WalkDir::new(directory) {
        let entry = entry.context(TemplateWalk {
            path: directory.to_path_buf(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_chart_file = entry
            .path()
            .extension()
            .map(|extension| extension == constants::CHART_FILE_EXTENSION)
            .unwrap_or(false);
        if !is_chart_file {
            continue;
        }

        let filepath = entry.path();
        let content = std::fs::read_to_string(filepath).context(ReadingFile {
            filepath: filepath.to_path_buf(),
        })?;
        let substituted = replacements.apply(content.as_str());
        if substituted != content {
            std::fs::write(filepath, substituted).context(WritingFile {
                filepath: filepath.to_path_buf(),
            })?;
            info!(filepath = %filepath.display(), "Substituted placeholder tokens");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{substitute_tree, Replacements};
    use crate::scaffold::config::CicdConfig;

    fn replacements() -> Replacements {
        let config: CicdConfig = serde_yaml::from_str("project: payments\napp: api\n").unwrap();
        Replacements::from_config(&config)
    }

    #[test]
    fn replaces_every_occurrence_of_both_tokens() {
        let substituted = replacements().apply(
            "name: <<PROJECT_NAME>>\napp: <<APP_NAME>>\nrelease: <<PROJECT_NAME>>-<<APP_NAME>>\n",
        );
        assert_eq!(
            substituted,
            "name: payments\napp: api\nrelease: payments-api\n"
        );
    }

    #[test]
    fn substitutes_yaml_files_only() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("templates");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            dir.path().join("values.yaml"),
            "app: <<APP_NAME>>\n",
        )
        .unwrap();
        std::fs::write(
            nested.join("deployment.yaml"),
            "name: <<PROJECT_NAME>>\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("README.md"), "# <<PROJECT_NAME>>\n").unwrap();

        substitute_tree(dir.path(), &replacements()).unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.path().join("values.yaml")).unwrap(),
            "app: api\n"
        );
        assert_eq!(
            std::fs::read_to_string(nested.join("deployment.yaml")).unwrap(),
            "name: payments\n"
        );
        assert_eq!(
            std::fs::read_to_string(dir.path().join("README.md")).unwrap(),
            "# <<PROJECT_NAME>>\n"
        );
    }
}
