use std::path::Path;

use serde::Serialize;

use crate::{cards::Player, err, Res};

pub const STARTING_COINS: u64 = 1000;

/// Everything that survives between sessions.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SaveState {
    coins: u64,
    inventory: Vec<Player>,
}

impl Default for SaveState {
    fn default() -> Self {
        Self::new(STARTING_COINS)
    }
}

impl SaveState {
    pub fn new(coins: u64) -> Self {
        Self {
            coins,
            inventory: Vec::new(),
        }
    }

    pub fn coins(&self) -> u64 {
        self.coins
    }

    /// Pulled players, oldest first.
    pub fn inventory(&self) -> &[Player] {
        &self.inventory
    }

    pub fn can_afford(&self, cost: u64) -> bool {
        self.coins >= cost
    }

    pub fn spend(&mut self, cost: u64) -> Res<()> {
        match self.coins.checked_sub(cost) {
            Some(remaining) => {
                self.coins = remaining;
                Ok(())
            }
            None => err(format!("Cannot spend {cost} coins, only have {}.", self.coins)),
        }
    }

    pub fn collect(&mut self, player: Player) {
        self.inventory.push(player);
    }

    /// Load the save at `path`, or a fresh save if there is no file there yet.
    pub fn load(path: &Path) -> Res<Self> {
        if !path.exists() {
            tracing::debug!("No save at {}, starting fresh.", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        let save: Self = serde_json::from_str(&raw)
            .map_err(|e| format!("Failed to parse {}: {e}", path.display()))?;
        tracing::debug!(
            "Loaded save with {} coins and {} players.",
            save.coins,
            save.inventory.len()
        );
        Ok(save)
    }

    /// Overwrite the save at `path` with this state.
    pub fn store(&self, path: &Path) -> Res<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| e.to_string())?;
        }

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser).map_err(|e| e.to_string())?;

        std::fs::write(path, buf).map_err(|e| format!("Failed to write {}: {e}", path.display()))
    }
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use crate::cards::{Player, Rarity};

    use super::{SaveState, STARTING_COINS};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "pack-opener-save-{name}-{}",
            std::process::id()
        ));
        std::fs::remove_dir_all(&dir).ok();
        dir
    }

    #[test]
    fn test_round_trip() {
        let dir = scratch_dir("round-trip");
        let path = dir.join("save.json");

        let mut save = SaveState::new(750);
        save.collect(Player::sample(Rarity::Rare));
        save.collect(Player::sample(Rarity::Common));
        save.collect(Player::sample(Rarity::Rare));
        save.store(&path).unwrap();

        let loaded = SaveState::load(&path).unwrap();
        assert_eq!(loaded, save);
        assert_eq!(loaded.inventory()[1].rarity, Rarity::Common);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_store_overwrites() {
        let dir = scratch_dir("overwrite");
        let path = dir.join("save.json");

        let mut save = SaveState::default();
        save.collect(Player::sample(Rarity::Epic));
        save.store(&path).unwrap();

        let fresh = SaveState::new(5);
        fresh.store(&path).unwrap();
        assert_eq!(SaveState::load(&path).unwrap(), fresh);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_file_defaults() {
        let dir = scratch_dir("missing");
        let save = SaveState::load(&dir.join("save.json")).unwrap();
        assert_eq!(save.coins(), STARTING_COINS);
        assert!(save.inventory().is_empty());
    }

    #[test]
    fn test_file_format() {
        let dir = scratch_dir("format");
        let path = dir.join("save.json");

        let mut save = SaveState::new(900);
        save.collect(Player::new("Stephen Curry".to_string(), 93, Rarity::Legendary));
        save.store(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\n    \"coins\": 900"));
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "coins": 900,
                "inventory": [{"name": "Stephen Curry", "overall": 93, "rarity": "Legendary"}]
            })
        );

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_reject_malformed() {
        let dir = scratch_dir("malformed");
        let path = dir.join("save.json");
        std::fs::create_dir_all(&dir).unwrap();

        std::fs::write(&path, r#"{"coins": -5, "inventory": []}"#).unwrap();
        assert!(SaveState::load(&path).is_err());

        std::fs::write(&path, "not json").unwrap();
        assert!(SaveState::load(&path).is_err());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_spend() {
        let mut save = SaveState::new(300);
        assert!(save.can_afford(300));
        assert!(!save.can_afford(301));
        assert!(save.spend(301).is_err());
        assert_eq!(save.coins(), 300);
        save.spend(250).unwrap();
        assert_eq!(save.coins(), 50);
    }
}
