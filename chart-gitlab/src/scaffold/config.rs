use crate::common::error::{MissingConfigFile, OpeningFile, Result, YamlParseFromFile};
use serde::Deserialize;
use snafu::{ensure, ResultExt};
use std::{fs::File, path::Path};

/// Per-repository CI configuration, read from `.cicd.yaml` in the source directory. Carries
/// the values substituted for the placeholder tokens in the template chart.
#[derive(Deserialize, Debug)]
pub struct CicdConfig {
    project: String,
    app: String,
}

impl CicdConfig {
    /// Read `.cicd.yaml` from the source directory. A missing file is fatal.
    pub fn load(source_dir: &Path) -> Result<Self> {
        let filepath = source_dir.join(constants::CICD_CONFIG_FILE);
        ensure!(
            filepath.is_file(),
            MissingConfigFile {
                filepath: filepath.clone(),
            }
        );
        let file = File::open(filepath.as_path()).context(OpeningFile {
            filepath: filepath.clone(),
        })?;
        serde_yaml::from_reader(file).context(YamlParseFromFile { filepath })
    }

    pub fn project(&self) -> &str {
        self.project.as_str()
    }

    pub fn app(&self) -> &str {
        self.app.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::CicdConfig;

    #[test]
    fn loads_project_and_app() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(constants::CICD_CONFIG_FILE),
            "project: payments\napp: api\n",
        )
        .unwrap();

        let config = CicdConfig::load(dir.path()).unwrap();
        assert_eq!(config.project(), "payments");
        assert_eq!(config.app(), "api");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CicdConfig::load(dir.path()).is_err());
    }

    #[test]
    fn missing_key_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(constants::CICD_CONFIG_FILE),
            "project: payments\n",
        )
        .unwrap();
        assert!(CicdConfig::load(dir.path()).is_err());
    }
}
