use rand::{seq::SliceRandom, Rng};

use crate::{
    cards::{
        Player, PlayerCatalog, Rarity,
        Rarity::{Common, Epic, Legendary, Rare, Uncommon},
    },
    err, Res,
};

use super::save::SaveState;

#[derive(Debug)]
pub struct Pack {
    pub name: &'static str,
    pub cost: u64,

    /// Relative draw weight of each rarity the pack can contain. Rarities not
    /// listed are never drawn. Weights need not sum to 100.
    pub weights: &'static [(Rarity, u32)],
}

impl Pack {
    pub fn rarities(&self) -> impl Iterator<Item = Rarity> + '_ {
        self.weights.iter().map(|(rarity, _)| *rarity)
    }
}

pub const PACKS: &[Pack] = &[
    Pack {
        name: "Bronze Pack",
        cost: 100,
        weights: &[(Common, 80), (Uncommon, 15), (Rare, 5)],
    },
    Pack {
        name: "Silver Pack",
        cost: 250,
        weights: &[(Common, 60), (Uncommon, 30), (Rare, 10)],
    },
    Pack {
        name: "Gold Pack",
        cost: 500,
        weights: &[(Uncommon, 50), (Rare, 35), (Epic, 15)],
    },
    Pack {
        name: "Diamond Pack",
        cost: 1200,
        weights: &[(Rare, 40), (Epic, 40), (Legendary, 20)],
    },
    Pack {
        name: "Galaxy Pack",
        cost: 3000,
        weights: &[(Epic, 60), (Legendary, 40)],
    },
];

/// Draw a rarity with probability proportional to its weight.
pub fn draw_rarity<R: Rng + ?Sized>(weights: &[(Rarity, u32)], rng: &mut R) -> Res<Rarity> {
    weights
        .choose_weighted(rng, |(_, weight)| *weight)
        .map(|(rarity, _)| *rarity)
        .map_err(|e| format!("Invalid pack weights: {e}"))
}

/// Buy and open a pack, returning the player pulled. Nothing in the save
/// changes unless the whole purchase succeeds.
pub fn open_pack<R: Rng + ?Sized>(
    pack: &Pack,
    catalog: &PlayerCatalog,
    save: &mut SaveState,
    rng: &mut R,
) -> Res<Player> {
    if !save.can_afford(pack.cost) {
        return err(format!(
            "Not enough coins for {}: have {}, need {}.",
            pack.name,
            save.coins(),
            pack.cost
        ));
    }

    let rarity = draw_rarity(pack.weights, rng)?;
    let player = catalog.roll(rarity, rng)?;

    save.spend(pack.cost)?;
    save.collect(player.clone());
    Ok(player)
}
