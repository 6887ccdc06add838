use macroquad::{
    color::{Color, WHITE},
    shapes::{draw_circle, draw_rectangle},
    text::draw_text,
    window::clear_background,
};

use crate::{
    cards::Player,
    game::{packs::Pack, particles::Particles, App},
    layout,
};

const BACKGROUND: (u8, u8, u8) = (30, 30, 30);
const FONT_SIZE: f32 = 30.0;

fn colour((r, g, b): (u8, u8, u8)) -> Color {
    Color::from_rgba(r, g, b, 255)
}

/// Draw text with its top-left corner at (x, y). Macroquad positions text by
/// baseline.
fn text(s: &str, x: f32, y: f32, colour: Color) {
    draw_text(s, x, y + FONT_SIZE * 0.75, FONT_SIZE, colour);
}

fn draw_coins(coins: u64) {
    let (x, y) = layout::COINS_POS;
    text(&format!("Coins: {coins}"), x, y, WHITE);
}

fn collection_label(players: &[Player]) -> String {
    match players.last() {
        Some(last) => format!("Collection: {} (last: {})", players.len(), last.name()),
        None => "Collection: 0".to_string(),
    }
}

fn draw_collection(players: &[Player]) {
    let (x, y) = layout::COLLECTION_POS;
    text(&collection_label(players), x, y, WHITE);
}

fn draw_packs(packs: &[Pack]) {
    for (i, pack) in packs.iter().enumerate() {
        text(
            &format!("{} - {} coins", pack.name, pack.cost),
            layout::PACK_LIST_LEFT,
            layout::pack_row_top(i),
            WHITE,
        );
    }
}

fn draw_particles(particles: &Particles) {
    for p in particles.iter() {
        draw_circle(p.x, p.y, p.radius, colour(p.colour));
    }
}

fn draw_card(player: &Player) {
    let rarity_colour = colour(player.rarity.colour());
    let (x, y, w, h) = layout::CARD_RECT;
    draw_rectangle(x, y, w, h, rarity_colour);

    text(player.name(), layout::CARD_TEXT_LEFT, layout::CARD_NAME_TOP, WHITE);
    text(
        &format!("OVR: {}", player.overall()),
        layout::CARD_TEXT_LEFT,
        layout::CARD_OVERALL_TOP,
        WHITE,
    );
    text(
        &format!("Rarity: {}", player.rarity),
        layout::CARD_TEXT_LEFT,
        layout::CARD_RARITY_TOP,
        rarity_colour,
    );
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Layer {
    Hud,
    Packs,
    Card,
    Particles,
}

/// Back to front. Bursts start over the card, so they go on top of it.
const LAYERS: [Layer; 4] = [Layer::Hud, Layer::Packs, Layer::Card, Layer::Particles];

/// Draw one frame of the game.
pub fn draw(app: &App) {
    clear_background(colour(BACKGROUND));
    for layer in LAYERS {
        match layer {
            Layer::Hud => {
                draw_coins(app.save().coins());
                draw_collection(app.save().inventory());
            }
            Layer::Packs => draw_packs(app.packs()),
            Layer::Card => {
                if let Some(player) = app.pulled() {
                    draw_card(player);
                }
            }
            Layer::Particles => draw_particles(app.particles()),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{
        cards::{Player, Rarity},
        layout,
    };

    use super::{collection_label, Layer, LAYERS};

    fn depth(layer: Layer) -> usize {
        LAYERS.iter().position(|l| *l == layer).unwrap()
    }

    #[test]
    fn test_burst_drawn_over_card() {
        let (bx, by) = layout::BURST_ORIGIN;
        let (x, y, w, h) = layout::CARD_RECT;
        assert!(bx > x && bx < x + w && by > y && by < y + h);

        assert!(depth(Layer::Particles) > depth(Layer::Card));
        assert_eq!(LAYERS.last(), Some(&Layer::Particles));
    }

    #[test]
    fn test_collection_label() {
        assert_eq!(collection_label(&[]), "Collection: 0");

        let players = vec![
            Player::sample(Rarity::Common),
            Player::new("Luka Doncic".to_string(), 96, Rarity::Legendary),
        ];
        assert_eq!(
            collection_label(&players),
            "Collection: 2 (last: Luka Doncic)"
        );
    }
}
