//! Fixed screen geometry shared by drawing and click handling.

pub const WINDOW_WIDTH: i32 = 900;
pub const WINDOW_HEIGHT: i32 = 600;

/// Particle bursts start from the middle of the window.
pub const BURST_ORIGIN: (f32, f32) = (WINDOW_WIDTH as f32 / 2.0, WINDOW_HEIGHT as f32 / 2.0);

pub const COINS_POS: (f32, f32) = (20.0, 20.0);
pub const COLLECTION_POS: (f32, f32) = (300.0, 20.0);

pub const PACK_LIST_LEFT: f32 = 50.0;
pub const PACK_LIST_TOP: f32 = 100.0;
pub const PACK_ROW_HEIGHT: f32 = 50.0;

/// Pulled card as (x, y, width, height).
pub const CARD_RECT: (f32, f32, f32, f32) = (300.0, 120.0, 300.0, 360.0);
pub const CARD_TEXT_LEFT: f32 = 330.0;
pub const CARD_NAME_TOP: f32 = 150.0;
pub const CARD_OVERALL_TOP: f32 = 200.0;
pub const CARD_RARITY_TOP: f32 = 250.0;

pub fn pack_row_top(index: usize) -> f32 {
    PACK_LIST_TOP + index as f32 * PACK_ROW_HEIGHT
}

/// Index of the pack row under screen height `y`, if any.
pub fn pack_at(y: f32, pack_count: usize) -> Option<usize> {
    if y < PACK_LIST_TOP {
        return None;
    }

    let index = ((y - PACK_LIST_TOP) / PACK_ROW_HEIGHT) as usize;
    if index < pack_count {
        Some(index)
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::{pack_at, pack_row_top};

    #[test]
    fn test_pack_at_rows() {
        assert_eq!(pack_at(100.0, 5), Some(0));
        assert_eq!(pack_at(149.9, 5), Some(0));
        assert_eq!(pack_at(150.0, 5), Some(1));
        assert_eq!(pack_at(275.0, 5), Some(3));
        assert_eq!(pack_at(349.0, 5), Some(4));
    }

    #[test]
    fn test_pack_at_outside() {
        assert_eq!(pack_at(0.0, 5), None);
        assert_eq!(pack_at(99.9, 5), None);
        assert_eq!(pack_at(-20.0, 5), None);
        assert_eq!(pack_at(350.0, 5), None);
        assert_eq!(pack_at(590.0, 5), None);
        assert_eq!(pack_at(120.0, 0), None);
    }

    #[test]
    fn test_rows_round_trip() {
        for index in 0..5 {
            assert_eq!(pack_at(pack_row_top(index), 5), Some(index));
            assert_eq!(pack_at(pack_row_top(index) + 49.0, 5), Some(index));
        }
    }
}
