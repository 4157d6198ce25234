use ratatui::style::Color;

/// Cells per axis of the square playfield.
pub const DEFAULT_TILE_COUNT: u16 = 20;

/// Logical pixel size of one grid cell, reported to renderers.
pub const GRID_CELL_SIZE_PX: u16 = 20;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 50;

/// Interval reduction applied on each speed-up, in milliseconds.
pub const SPEED_UP_STEP_MS: u64 = 10;

/// Points between consecutive speed-ups.
pub const POINTS_PER_SPEED_UP: u32 = 5;

/// Gameplay parameters fixed for one engine instance.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub tile_count: u16,
    pub cell_size_px: u16,
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_count: DEFAULT_TILE_COUNT,
            cell_size_px: GRID_CELL_SIZE_PX,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

/// A color theme applied to all visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_fg: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Green snake on dark, matching the classic look.
pub const THEME_GARDEN: Theme = Theme {
    name: "garden",
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    border_fg: Color::White,
    border_bg: Color::Black,
    hud_fg: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Cyan on dark.
pub const THEME_OCEAN: Theme = Theme {
    name: "ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    border_fg: Color::Cyan,
    border_bg: Color::Black,
    hud_fg: Color::Cyan,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// Magenta and yellow.
pub const THEME_NEON: Theme = Theme {
    name: "neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    border_fg: Color::Magenta,
    border_bg: Color::Black,
    hud_fg: Color::Magenta,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// All available themes.
pub const THEMES: &[Theme] = &[THEME_GARDEN, THEME_OCEAN, THEME_NEON];

/// Looks a theme up by its case-insensitive name.
#[must_use]
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}

/// Food glyph.
pub const GLYPH_FOOD: &str = "●";

/// Body segment glyph.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Tail segment glyph.
pub const GLYPH_SNAKE_TAIL: &str = "▓";

/// Head glyph when moving up.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";

/// Head glyph when moving down.
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";

/// Head glyph when moving left.
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";

/// Head glyph when moving right.
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

#[cfg(test)]
mod tests {
    use super::{theme_by_name, THEMES};

    #[test]
    fn theme_lookup_is_case_insensitive() {
        let theme = theme_by_name("Ocean").expect("ocean theme exists");
        assert_eq!(theme.name, "ocean");
    }

    #[test]
    fn every_theme_is_reachable_by_name() {
        for theme in THEMES {
            assert!(theme_by_name(theme.name).is_some());
        }
    }
}
