use std::{collections::HashMap, path::Path};

use crate::{
    cards::{Player, PlayerCatalog, Rarity},
    err, Res,
};

#[derive(serde::Deserialize, Debug)]
struct CatalogEntry {
    name: String,

    /// Overall rating.
    overall: u32,

    /// Some catalogs repeat the rarity on each record. The grouping key wins.
    #[serde(default)]
    rarity: Option<String>,
}

impl CatalogEntry {
    fn to_player(self, rarity: Rarity) -> Player {
        if let Some(listed) = self.rarity.as_deref() {
            if listed != rarity.to_string() {
                tracing::warn!(
                    "{} listed as {listed} but filed under {rarity}, using {rarity}.",
                    self.name
                );
            }
        }
        Player::new(self.name, self.overall, rarity)
    }
}

/// Decode a catalog JSON object keyed by rarity name into a catalog.
pub fn decode_catalog(data: &str) -> Res<PlayerCatalog> {
    let raw: HashMap<String, Vec<CatalogEntry>> =
        serde_json::from_str(data).map_err(|e| e.to_string())?;

    let mut catalog = PlayerCatalog::new();
    for (key, entries) in raw {
        let Some(rarity) = Rarity::from_name(&key) else {
            return err(format!("Unknown rarity in catalog: {key}"));
        };
        for entry in entries {
            catalog.add(entry.to_player(rarity));
        }
    }

    Ok(catalog)
}

/// Check that every listed rarity can actually produce a player.
pub fn ensure_covers(
    catalog: &PlayerCatalog,
    rarities: impl IntoIterator<Item = Rarity>,
) -> Res<()> {
    for rarity in rarities {
        if catalog.players_of(rarity).is_empty() {
            return err(format!("Catalog has no {rarity} players."));
        }
    }
    Ok(())
}

pub fn load_catalog(path: &Path) -> Res<PlayerCatalog> {
    tracing::debug!("Loading player catalog from {}.", path.display());

    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    tracing::debug!("Read catalog from disk. Parsing JSON.");
    let catalog = decode_catalog(&raw)?;
    tracing::debug!("Loaded {} players: {catalog:?}.", catalog.size());
    Ok(catalog)
}
