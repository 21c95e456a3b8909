//! Sprite table: the visual assets addressed by [`ImageHandle`]s

use ratatui::style::Color;
use starter_core::ImageHandle;

use crate::theme::palette;

/// A fixed block of text drawn in one color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub lines: &'static [&'static str],
    pub color: Color,
}

impl Sprite {
    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }

    pub fn width(&self) -> u16 {
        self.lines
            .iter()
            .map(|l| l.chars().count() as u16)
            .max()
            .unwrap_or(0)
    }
}

/// Height reserved for creature sprites
pub const CREATURE_HEIGHT: u16 = 5;

const LOGO: Sprite = Sprite {
    lines: &[
        r" ___  ___  _  __ ___ ",
        r"| _ \/ _ \| |/ /| __|",
        r"|  _/ (_) | ' < | _| ",
        r"|_|  \___/|_|\_\|___|",
    ],
    color: palette::LOGO,
};

const MARKER_SELECTED: Sprite = Sprite {
    lines: &["(●)"],
    color: palette::MARKER_SELECTED,
};

const MARKER_UNSELECTED: Sprite = Sprite {
    lines: &["(○)"],
    color: palette::MARKER_UNSELECTED,
};

const BULBASAUR: Sprite = Sprite {
    lines: &[
        r"   _,.-==-._  ",
        r"  /  \_/\_/ \ ",
        r" (  o     o  )",
        r"  \   ~~~~   /",
        r"   '-w----w-' ",
    ],
    color: palette::GRASS,
};

const CHARMANDER: Sprite = Sprite {
    lines: &[
        r"    .--.    ) ",
        r"   ( o o)  (( ",
        r"    \ ~ /__)) ",
        r"    /   \__/  ",
        r"   (_/ \_)    ",
    ],
    color: palette::FIRE,
};

const SQUIRTLE: Sprite = Sprite {
    lines: &[
        r"    .---.     ",
        r"   ( o o )___ ",
        r"    \ ~ /####\",
        r"    /|_|\####/",
        r"   (_/ \_)--' ",
    ],
    color: palette::WATER,
};

/// Look up the sprite for an image handle
pub fn sprite(handle: ImageHandle) -> Option<Sprite> {
    match handle {
        ImageHandle::LOGO => Some(LOGO),
        ImageHandle::MARKER_SELECTED => Some(MARKER_SELECTED),
        ImageHandle::MARKER_UNSELECTED => Some(MARKER_UNSELECTED),
        ImageHandle::BULBASAUR => Some(BULBASAUR),
        ImageHandle::CHARMANDER => Some(CHARMANDER),
        ImageHandle::SQUIRTLE => Some(SQUIRTLE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starter_core::catalog;

    #[test]
    fn test_every_catalog_image_has_a_sprite() {
        for starter in catalog() {
            assert!(
                sprite(starter.image()).is_some(),
                "missing sprite for {}",
                starter
            );
        }
    }

    #[test]
    fn test_creature_sprites_fit_reserved_height() {
        for starter in catalog() {
            let s = sprite(starter.image()).unwrap();
            assert_eq!(s.height(), CREATURE_HEIGHT);
        }
    }

    #[test]
    fn test_unknown_handle_has_no_sprite() {
        assert!(sprite(ImageHandle::from_raw(999)).is_none());
    }

    #[test]
    fn test_sprite_dimensions() {
        assert_eq!(LOGO.height(), 4);
        assert_eq!(LOGO.width(), 21);
        assert_eq!(MARKER_SELECTED.width(), 3);
    }
}
