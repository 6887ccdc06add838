use std::path::PathBuf;

use rand::Rng;

use crate::{
    cards::{players, Player, PlayerCatalog},
    err, layout, Res,
};

pub mod clock;
pub mod packs;
pub mod particles;
pub mod save;

use clock::FrameClock;
use packs::{Pack, PACKS};
use particles::Particles;
use save::SaveState;

#[derive(Debug)]
pub struct GameConfig {
    data: PathBuf,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::with_data_dir("data")
    }

    pub fn with_data_dir<P: Into<PathBuf>>(data: P) -> Self {
        GameConfig { data: data.into() }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data.join("players.json")
    }

    pub fn save_path(&self) -> PathBuf {
        self.data.join("save.json")
    }
}

/// All state owned by the running game. Frame updates and input handling go
/// through this rather than through globals.
pub struct App {
    catalog: PlayerCatalog,
    packs: &'static [Pack],
    save: SaveState,
    save_path: PathBuf,
    particles: Particles,
    clock: FrameClock,

    /// Most recently pulled player, shown until the next pull.
    pulled: Option<Player>,
}

impl App {
    pub fn new(
        catalog: PlayerCatalog,
        packs: &'static [Pack],
        save: SaveState,
        save_path: PathBuf,
    ) -> Self {
        Self {
            catalog,
            packs,
            save,
            save_path,
            particles: Particles::new(),
            clock: FrameClock::new(),
            pulled: None,
        }
    }

    /// Load the catalog and save from disk. Any failure here means the game
    /// can't start.
    pub fn load(config: &GameConfig) -> Res<Self> {
        let catalog = players::load_catalog(&config.catalog_path())?;
        players::ensure_covers(&catalog, PACKS.iter().flat_map(|pack| pack.rarities()))?;
        let save = SaveState::load(&config.save_path())?;
        Ok(Self::new(catalog, PACKS, save, config.save_path()))
    }

    pub fn packs(&self) -> &[Pack] {
        self.packs
    }

    pub fn save(&self) -> &SaveState {
        &self.save
    }

    #[cfg(test)]
    pub fn save_path(&self) -> &std::path::Path {
        &self.save_path
    }

    pub fn particles(&self) -> &Particles {
        &self.particles
    }

    pub fn pulled(&self) -> Option<&Player> {
        self.pulled.as_ref()
    }

    /// Buy the pack at `index`. On success the pull is shown, a burst is
    /// spawned and the game is saved.
    pub fn purchase<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) -> Res<Player> {
        let table = self.packs;
        let Some(pack) = table.get(index) else {
            return err(format!("No pack at index {index}."));
        };

        let player = match packs::open_pack(pack, &self.catalog, &mut self.save, rng) {
            Ok(player) => player,
            Err(e) => {
                tracing::warn!("{e}");
                return Err(e);
            }
        };

        tracing::info!(
            "Opened {} for {} coins: {} ({} {}), {} coins left.",
            pack.name,
            pack.cost,
            player.name(),
            player.rarity,
            player.overall(),
            self.save.coins()
        );

        self.particles.burst(layout::BURST_ORIGIN, player.rarity, rng);
        self.pulled = Some(player.clone());
        self.persist();
        Ok(player)
    }

    /// Handle a left click at screen position (`x`, `y`). Returns the player
    /// pulled if the click bought a pack.
    pub fn handle_click<R: Rng + ?Sized>(
        &mut self,
        x: f32,
        y: f32,
        rng: &mut R,
    ) -> Option<Player> {
        let index = layout::pack_at(y, self.packs.len())?;
        tracing::debug!("Click at ({x}, {y}) on pack {index}.");
        self.purchase(index, rng).ok()
    }

    /// Advance one fixed step.
    pub fn tick(&mut self) {
        self.particles.step();
    }

    /// Run however many fixed steps `dt` seconds of frame time cover.
    pub fn update(&mut self, dt: f32) {
        for _ in 0..self.clock.advance(dt) {
            self.tick();
        }
    }

    /// Write the save to disk. Failures are logged and play continues.
    pub fn persist(&self) {
        match self.save.store(&self.save_path) {
            Ok(()) => tracing::info!("Saved progress to {}.", self.save_path.display()),
            Err(e) => tracing::error!("Failed to save progress: {e}"),
        }
    }
}
