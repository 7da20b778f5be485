use crate::common::error::{ReadingFile, Result, WritingFile, YamlParseFromFile, YamlSerialize};
use serde_yaml::Value;
use snafu::ResultExt;
use std::path::Path;
use tracing::{info, warn};

/// Overwrite the scalar at `image.tag` in a values file, keeping the rest of the document
/// (including key order) intact. Returns false, leaving the file untouched, when the
/// `image.tag` path is absent.
pub fn update_image_tag(values_path: &Path, new_tag: &str) -> Result<bool> {
    let content = std::fs::read_to_string(values_path).context(ReadingFile {
        filepath: values_path.to_path_buf(),
    })?;
    let mut values: Value = serde_yaml::from_str(content.as_str()).context(YamlParseFromFile {
        filepath: values_path.to_path_buf(),
    })?;

    let tag = match values.get_mut("image").and_then(|image| image.get_mut("tag")) {
        Some(tag) => tag,
        None => {
            warn!(
                filepath = %values_path.display(),
                "No image tag found in values file, leaving it untouched"
            );
            return Ok(false);
        }
    };
    info!(tag = new_tag, "Updating the image tag");
    *tag = Value::String(new_tag.to_string());

    let updated = serde_yaml::to_string(&values).context(YamlSerialize {
        filepath: values_path.to_path_buf(),
    })?;
    std::fs::write(values_path, updated).context(WritingFile {
        filepath: values_path.to_path_buf(),
    })?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::update_image_tag;

    const VALUES: &str = "replicaCount: 1
image:
  repository: nginx
  tag: v1.4.1
  pullPolicy: IfNotPresent
service:
  port: 80
";

    #[test]
    fn rewrites_tag_and_keeps_key_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.yaml");
        std::fs::write(&path, VALUES).unwrap();

        assert!(update_image_tag(&path, "v1.4.2").unwrap());

        let updated = std::fs::read_to_string(&path).unwrap();
        assert!(updated.contains("tag: v1.4.2"));
        assert!(!updated.contains("v1.4.1"));

        let order: Vec<usize> = ["replicaCount", "repository", "tag", "pullPolicy", "port"]
            .iter()
            .map(|key| updated.find(key).unwrap())
            .collect();
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(order, sorted);
    }

    #[test]
    fn flow_style_mapping_is_updated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.yaml");
        std::fs::write(&path, "image: {tag: v1.4.1}\n").unwrap();

        assert!(update_image_tag(&path, "v1.4.2").unwrap());

        let updated: serde_yaml::Value =
            serde_yaml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(updated["image"]["tag"], "v1.4.2");
    }

    #[test]
    fn absent_image_leaves_file_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.yaml");
        std::fs::write(&path, "replicaCount: 1\n").unwrap();

        assert!(!update_image_tag(&path, "v1.4.2").unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "replicaCount: 1\n");
    }

    #[test]
    fn absent_tag_leaves_file_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.yaml");
        let content = "image:\n  repository: nginx\n";
        std::fs::write(&path, content).unwrap();

        assert!(!update_image_tag(&path, "v1.4.2").unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    }
}
