//! Fixed color palette with checkout/checkin.

use crate::error::{Error, Result};
use crate::plotting::Color;

/// The palette, in checkout order.
pub const PALETTE: [&str; 10] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

/// A pool of palette colors. Each slot is handed out at most once until it
/// is checked back in.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Color>,
    in_use: Vec<bool>,
}

impl Palette {
    pub fn new() -> Self {
        let colors: Vec<Color> = PALETTE.iter().map(|hex| Color::from(*hex)).collect();
        let in_use = vec![false; colors.len()];
        Palette { colors, in_use }
    }

    /// Take the first free color.
    pub fn checkout(&mut self) -> Result<Color> {
        let slot = self
            .in_use
            .iter()
            .position(|used| !used)
            .ok_or(Error::PaletteExhausted(self.colors.len()))?;
        self.in_use[slot] = true;
        Ok(self.colors[slot].clone())
    }

    /// Return a color to the pool. Colors that are not palette entries are
    /// ignored.
    pub fn checkin(&mut self, color: &Color) {
        if let Some(slot) = self.colors.iter().position(|c| c == color) {
            self.in_use[slot] = false;
        }
    }

    /// Number of colors still free.
    pub fn available(&self) -> usize {
        self.in_use.iter().filter(|used| !**used).count()
    }

    pub fn is_checked_out(&self, color: &Color) -> bool {
        self.colors
            .iter()
            .position(|c| c == color)
            .is_some_and(|slot| self.in_use[slot])
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_in_order_until_exhausted() {
        let mut palette = Palette::new();
        for hex in PALETTE {
            assert_eq!(palette.checkout().unwrap(), Color::from(hex));
        }
        assert!(matches!(palette.checkout(), Err(Error::PaletteExhausted(10))));
        assert_eq!(palette.available(), 0);
    }

    #[test]
    fn test_checkin_frees_slot() {
        let mut palette = Palette::new();
        for _ in 0..10 {
            palette.checkout().unwrap();
        }
        palette.checkin(&Color::from("#e15759"));
        assert_eq!(palette.available(), 1);
        let color = palette.checkout().unwrap();
        assert_eq!(color, Color::from("#e15759"));
        assert!(palette.colors().contains(&color));
    }

    #[test]
    fn test_foreign_checkin_is_noop() {
        let mut palette = Palette::new();
        palette.checkout().unwrap();
        palette.checkin(&Color::from("#666666"));
        palette.checkin(&Color::RED);
        assert_eq!(palette.available(), 9);
        assert!(palette.is_checked_out(&Color::from("#4e79a7")));
    }
}
