//! Test fixtures and constants.

/// Palette colors as byte triples, in raw index order
pub mod colors {
    pub const BLACK: [u8; 3] = [0, 0, 0];
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const GREEN: [u8; 3] = [0, 255, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const YELLOW: [u8; 3] = [255, 255, 0];
    pub const ORANGE: [u8; 3] = [255, 128, 0];

    pub const ALL: [[u8; 3]; 7] = [BLACK, WHITE, GREEN, BLUE, RED, YELLOW, ORANGE];
}

/// Layout of the embedded raw test pattern
pub mod pattern {
    /// Rows 0..BANDS_HEIGHT hold seven vertical bands, index `x * 7 / 800`
    pub const BANDS_HEIGHT: u32 = 400;

    /// Rows below the bands hold a 40-pixel black/white checker
    pub const CHECKER_SIZE: u32 = 40;

    /// Expected palette index of the pattern at `(x, y)`
    pub fn index_at(x: u32, y: u32) -> usize {
        if y < BANDS_HEIGHT {
            (x * 7 / 800) as usize
        } else {
            ((x / CHECKER_SIZE + y / CHECKER_SIZE) % 2) as usize
        }
    }
}

/// Horizontal gray ramp
pub fn gray_ramp(x: u32, width: u32) -> [u8; 3] {
    let v = (x * 255 / (width - 1).max(1)) as u8;
    [v, v, v]
}
