use std::fmt::Debug;

use rand::{seq::SliceRandom, Rng};

use crate::{err, Res};

pub mod players;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Common" => Some(Rarity::Common),
            "Uncommon" => Some(Rarity::Uncommon),
            "Rare" => Some(Rarity::Rare),
            "Epic" => Some(Rarity::Epic),
            "Legendary" => Some(Rarity::Legendary),
            _ => None,
        }
    }

    /// Card and particle colour, as RGB.
    pub fn colour(self) -> (u8, u8, u8) {
        match self {
            Rarity::Common => (160, 160, 160),
            Rarity::Uncommon => (80, 200, 120),
            Rarity::Rare => (50, 150, 255),
            Rarity::Epic => (170, 50, 255),
            Rarity::Legendary => (255, 215, 0),
        }
    }

    /// Number of particles spawned when a card of this rarity is pulled.
    pub fn burst_size(self) -> usize {
        match self {
            Rarity::Common => 20,
            Rarity::Uncommon => 35,
            Rarity::Rare => 50,
            Rarity::Epic => 70,
            Rarity::Legendary => 90,
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Player {
    name: String,
    overall: u32,
    pub rarity: Rarity,
}

impl Player {
    pub fn new(name: String, overall: u32, rarity: Rarity) -> Self {
        Self {
            name,
            overall,
            rarity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn overall(&self) -> u32 {
        self.overall
    }

    #[cfg(test)]
    pub fn sample(rarity: Rarity) -> Self {
        static ID: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(1);

        let id = ID.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        Self {
            name: format!("Player {id}"),
            overall: 60 + (id % 40) as u32,
            rarity,
        }
    }
}

/// Every player that can be pulled from a pack, grouped by rarity.
#[derive(Clone)]
pub struct PlayerCatalog {
    legendaries: Vec<Player>,
    epics: Vec<Player>,
    rares: Vec<Player>,
    uncommons: Vec<Player>,
    commons: Vec<Player>,
}

impl PlayerCatalog {
    pub fn new() -> Self {
        Self {
            legendaries: Vec::new(),
            epics: Vec::new(),
            rares: Vec::new(),
            uncommons: Vec::new(),
            commons: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn sample(per_rarity: usize) -> Self {
        let mut catalog = Self::new();
        for rarity in Rarity::ALL {
            for _ in 0..per_rarity {
                catalog.add(Player::sample(rarity));
            }
        }
        catalog
    }

    pub fn add(&mut self, player: Player) {
        match player.rarity {
            Rarity::Legendary => self.legendaries.push(player),
            Rarity::Epic => self.epics.push(player),
            Rarity::Rare => self.rares.push(player),
            Rarity::Uncommon => self.uncommons.push(player),
            Rarity::Common => self.commons.push(player),
        }
    }

    pub fn players_of(&self, rarity: Rarity) -> &[Player] {
        match rarity {
            Rarity::Legendary => &self.legendaries,
            Rarity::Epic => &self.epics,
            Rarity::Rare => &self.rares,
            Rarity::Uncommon => &self.uncommons,
            Rarity::Common => &self.commons,
        }
    }

    pub fn size(&self) -> usize {
        Rarity::ALL.iter().map(|r| self.players_of(*r).len()).sum()
    }

    /// Pick a player of the given rarity uniformly at random.
    pub fn roll<R: Rng + ?Sized>(&self, rarity: Rarity, rng: &mut R) -> Res<Player> {
        match self.players_of(rarity).choose(rng) {
            Some(player) => Ok(player.clone()),
            None => err(format!("No {rarity} players in catalog.")),
        }
    }
}

impl Debug for PlayerCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PlayerCatalog {{ legendaries: {}, epics: {}, rares: {}, uncommons: {}, commons: {} }}",
            self.legendaries.len(),
            self.epics.len(),
            self.rares.len(),
            self.uncommons.len(),
            self.commons.len()
        )
    }
}
