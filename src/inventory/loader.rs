//! Inventory loading and lookup

use eyre::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::{Inventory, builtin};

/// Loads user-defined inventories from a directory of YAML files
pub struct InventoryLoader {
    inventories_dir: PathBuf,
}

impl InventoryLoader {
    pub fn new(inventories_dir: PathBuf) -> Self {
        Self { inventories_dir }
    }

    /// Try every YAML file in the directory, keeping the per-file outcome
    pub fn scan(&self) -> Result<Vec<(PathBuf, Result<Inventory>)>> {
        let mut results = Vec::new();

        if !self.inventories_dir.exists() {
            log::debug!("Inventories directory {} does not exist", self.inventories_dir.display());
            return Ok(results);
        }

        let entries = fs::read_dir(&self.inventories_dir).with_context(|| {
            format!(
                "Failed to read inventories directory: {}",
                self.inventories_dir.display()
            )
        })?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().map(|e| e == "yaml" || e == "yml").unwrap_or(false) {
                let result = self.load_inventory(&path);
                results.push((path, result));
            }
        }

        results.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(results)
    }

    /// Load every valid inventory in the directory, skipping broken files
    pub fn load_all(&self) -> Result<Vec<Inventory>> {
        let mut inventories = Vec::new();

        for (path, result) in self.scan()? {
            match result {
                Ok(inventory) => {
                    log::debug!("Loaded inventory '{}' from {}", inventory.id, path.display());
                    inventories.push(inventory);
                }
                Err(e) => {
                    log::warn!("Failed to load inventory from {}: {:#}", path.display(), e);
                }
            }
        }

        inventories.sort_by(|a, b| a.id.cmp(&b.id));

        Ok(inventories)
    }

    /// Load and validate a single inventory file
    pub fn load_inventory(&self, path: &Path) -> Result<Inventory> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read inventory file: {}", path.display()))?;

        let inventory: Inventory = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse inventory file: {}", path.display()))?;

        inventory.validate()?;

        Ok(inventory)
    }
}

/// Built-in inventories plus those loaded from disk
pub struct Catalog {
    custom: Vec<Inventory>,
}

impl Catalog {
    /// Build the catalog, dropping custom inventories that shadow a built-in id
    pub fn load(inventories_dir: PathBuf) -> Result<Self> {
        let loaded = InventoryLoader::new(inventories_dir).load_all()?;
        Ok(Self::from_loaded(loaded))
    }

    fn from_loaded(loaded: Vec<Inventory>) -> Self {
        let custom = loaded
            .into_iter()
            .filter(|inv| {
                let shadows = builtin::get(&inv.id).is_some();
                if shadows {
                    log::warn!("Ignoring custom inventory '{}': id is reserved by a built-in", inv.id);
                }
                !shadows
            })
            .collect();

        Self { custom }
    }

    /// Find an inventory by id (case-insensitive), built-ins first
    pub fn find(&self, id: &str) -> Option<&Inventory> {
        builtin::get(id).or_else(|| self.custom.iter().find(|inv| inv.id.eq_ignore_ascii_case(id)))
    }

    /// All inventories with a flag telling whether each is built in
    pub fn entries(&self) -> impl Iterator<Item = (&Inventory, bool)> {
        builtin::all()
            .iter()
            .map(|inv| (inv, true))
            .chain(self.custom.iter().map(|inv| (inv, false)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::traits::Trait;
    use tempfile::TempDir;

    const MINI: &str = r#"
id: mini
name: Mini inventory
scale:
  max: 7
items:
  - text: Talkative
    trait: Extraversion
  - text: Quiet
    trait: Extraversion
    reversed: true
narratives:
  Extraversion:
    high: { text: Outgoing, example: Throws parties }
    moderatelyHigh: { text: Sociable, example: Goes to parties }
    moderatelyLow: { text: Selective, example: Prefers small groups }
    low: { text: Reserved, example: Stays home }
"#;

    #[test]
    fn test_load_all_missing_dir() {
        let temp = TempDir::new().unwrap();
        let loader = InventoryLoader::new(temp.path().join("nope"));
        assert!(loader.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_load_inventory_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mini.yaml");
        fs::write(&path, MINI).unwrap();

        let inv = InventoryLoader::new(temp.path().to_path_buf()).load_inventory(&path).unwrap();
        assert_eq!(inv.id, "mini");
        assert_eq!(inv.stem, "I see myself as:");
        assert!(inv.items[1].reversed);
        assert!(!inv.items[0].reversed);
        assert_eq!(inv.thresholds().low, 4.0);
        assert_eq!(inv.traits().into_iter().collect::<Vec<_>>(), vec![Trait::Extraversion]);
    }

    #[test]
    fn test_load_all_skips_invalid_and_other_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("mini.yml"), MINI).unwrap();
        fs::write(temp.path().join("broken.yaml"), "id: [unterminated").unwrap();
        fs::write(temp.path().join("notes.txt"), "not an inventory").unwrap();

        let incomplete = MINI.replace("    low: { text: Reserved, example: Stays home }\n", "");
        fs::write(temp.path().join("incomplete.yaml"), incomplete.replace("id: mini", "id: incomplete")).unwrap();

        let loader = InventoryLoader::new(temp.path().to_path_buf());
        let loaded = loader.load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "mini");

        let scanned = loader.scan().unwrap();
        assert_eq!(scanned.len(), 3);
        let failures: Vec<_> = scanned.iter().filter(|(_, r)| r.is_err()).map(|(p, _)| p.clone()).collect();
        assert_eq!(
            failures,
            vec![temp.path().join("broken.yaml"), temp.path().join("incomplete.yaml")]
        );
    }

    #[test]
    fn test_load_inventory_lenient_trait_names() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lenient.yaml");
        let yaml = r#"
id: lenient
name: Lenient names
scale:
  max: 5
items:
  - text: Curious
    trait: openness
  - text: Calm
    trait: emotional-stability
    reversed: true
narratives:
  OPENNESS:
    high: { text: a, example: a }
    moderatelyHigh: { text: b, example: b }
    moderatelyLow: { text: c, example: c }
    low: { text: d, example: d }
  emotional_stability:
    high: { text: a, example: a }
    moderatelyHigh: { text: b, example: b }
    moderatelyLow: { text: c, example: c }
    low: { text: d, example: d }
"#;
        fs::write(&path, yaml).unwrap();

        let inv = InventoryLoader::new(temp.path().to_path_buf()).load_inventory(&path).unwrap();
        assert_eq!(inv.items[0].trait_, Trait::Openness);
        assert_eq!(inv.items[1].trait_, Trait::EmotionalStability);
        assert_eq!(
            inv.narratives.keys().copied().collect::<Vec<_>>(),
            vec![Trait::Openness, Trait::EmotionalStability]
        );
    }

    #[test]
    fn test_load_inventory_rejects_huge_scale() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("huge.yaml");
        fs::write(&path, MINI.replace("max: 7", "max: 2147483647")).unwrap();

        let err = InventoryLoader::new(temp.path().to_path_buf()).load_inventory(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("at most 100 points"), "{:#}", err);
    }

    #[test]
    fn test_catalog_find_and_shadowing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("mini.yaml"), MINI).unwrap();
        fs::write(temp.path().join("tipi.yaml"), MINI.replace("id: mini", "id: tipi")).unwrap();

        let catalog = Catalog::load(temp.path().to_path_buf()).unwrap();
        assert_eq!(catalog.find("MINI").unwrap().name, "Mini inventory");
        assert_eq!(catalog.find("tipi").unwrap().items.len(), 10);
        assert!(catalog.find("unknown").is_none());

        let custom: Vec<_> = catalog.entries().filter(|(_, builtin)| !builtin).collect();
        assert_eq!(custom.len(), 1);
        assert_eq!(catalog.entries().count(), builtin::all().len() + 1);
    }
}
