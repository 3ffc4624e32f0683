use crate::domain::ResourceBundle;
use std::fs;

/// Loads alternate resource packs (prompts, descriptions, ASCII art) from disk.
///
/// A pack is a JSON object with `select`, `squeeze`, `drink`, and
/// `empty_glass` entries; a pack missing any of them is rejected at
/// deserialization time.
pub struct ResourceRepository;

impl ResourceRepository {
    pub fn load_bundle(path: &str) -> Result<(ResourceBundle, String), String> {
        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<ResourceBundle>(&content) {
                Ok(bundle) => Ok((bundle, path.to_string())),
                Err(e) => Err(format!("Invalid resource pack - {}", e)),
            },
            Err(e) => Err(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Step;
    use std::path::Path;

    fn write_pack(dir: &Path, name: &str, content: &str) -> String {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_load_bundle_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut bundle = ResourceBundle::default();
        bundle.squeeze.prompt = "Squeeze harder".to_string();
        let json = serde_json::to_string_pretty(&bundle).unwrap();
        let path = write_pack(dir.path(), "pack.json", &json);

        let (loaded, loaded_path) = ResourceRepository::load_bundle(&path).unwrap();

        assert_eq!(loaded, bundle);
        assert_eq!(loaded_path, path);
        assert_eq!(loaded.for_step(Step::Squeeze).prompt, "Squeeze harder");
    }

    #[test]
    fn test_load_bundle_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let result = ResourceRepository::load_bundle(&path.to_string_lossy());

        assert!(result.is_err());
    }

    #[test]
    fn test_load_bundle_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pack(dir.path(), "broken.json", "{ not json");

        let error = ResourceRepository::load_bundle(&path).unwrap_err();

        assert!(error.contains("Invalid resource pack"));
    }

    #[test]
    fn test_load_bundle_rejects_incomplete_pack() {
        let dir = tempfile::tempdir().unwrap();
        // No drink or empty_glass entries
        let json = r#"{
            "select": {"prompt": "a", "description": "b", "art": "c"},
            "squeeze": {"prompt": "a", "description": "b", "art": "c"}
        }"#;
        let path = write_pack(dir.path(), "partial.json", json);

        let error = ResourceRepository::load_bundle(&path).unwrap_err();

        assert!(error.contains("Invalid resource pack"));
    }
}
