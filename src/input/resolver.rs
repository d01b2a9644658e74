//! Two-stage coordinate resolution.
//!
//! A touch-down selects the coarse zone; the release selects the cell inside
//! it. Both ends use the same three-way split of the draw rectangle: the
//! zoomed rendering the user sees between down and up is a visual aid only.
//! A finger that drifts across zone borders before lifting therefore picks by
//! where it lifts within the whole rectangle, not by its offset from the
//! down point.

use super::geometry::{DrawRect, Quadrant};
use crate::layout::{Mode, Token, current_table};
use log::debug;

/// Holds the zone chosen by the most recent touch-down.
#[derive(Debug, Default, Clone)]
pub struct QuadrantResolver {
    quadrant: Option<Quadrant>,
}

impl QuadrantResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the zone under a touch-down, replacing any previous zone.
    pub fn touch_down(&mut self, raw_x: i32, raw_y: i32, rect: &DrawRect) -> Quadrant {
        let (xi, yi) = rect.third_index(raw_x, raw_y);
        let quadrant = Quadrant::from_index(xi, yi);
        debug!("touch_down ({raw_x}, {raw_y}) -> zone {quadrant:?}");
        self.quadrant = Some(quadrant);
        quadrant
    }

    /// Resolves a release to the token in `mode`'s table.
    ///
    /// Returns [`Token::Empty`] if no touch-down has set a zone.
    pub fn touch_up(&self, raw_x: i32, raw_y: i32, rect: &DrawRect, mode: Mode) -> Token {
        let Some(quadrant) = self.quadrant else {
            debug!("touch_up ({raw_x}, {raw_y}) without a zone");
            return Token::Empty;
        };
        let (xi, yi) = rect.third_index(raw_x, raw_y);
        current_table(mode).cell(quadrant.y + yi, quadrant.x + xi)
    }

    pub fn quadrant(&self) -> Option<Quadrant> {
        self.quadrant
    }

    /// Forgets the current zone.
    pub fn reset(&mut self) {
        self.quadrant = None;
    }
}
