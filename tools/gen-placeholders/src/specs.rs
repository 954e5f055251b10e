//! Static asset tables - single source of truth for what gets generated
//!
//! All paths are relative to the resource root.

/// Output encoding for an image
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ImageFormat {
    /// RGBA8 canvas
    Png,
    /// RGB8 canvas (JPEG has no alpha channel)
    Jpeg,
}

impl ImageFormat {
    pub fn name(self) -> &'static str {
        match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Jpeg => "JPEG",
        }
    }
}

/// Placeholder image: solid fill with an optional centered label
#[derive(Clone, Debug)]
pub struct ImageSpec {
    pub path: &'static str,
    pub width: u32,
    pub height: u32,
    /// Fill color as `#RRGGBB`
    pub color: &'static str,
    /// Label drawn in white; empty for none
    pub label: &'static str,
    pub format: ImageFormat,
}

/// Placeholder font; content is fixed
#[derive(Clone, Debug)]
pub struct FontSpec {
    pub path: &'static str,
}

/// Silent mono 16-bit WAV clip
#[derive(Clone, Debug)]
pub struct WaveAudioSpec {
    pub path: &'static str,
    pub duration_secs: f64,
    pub sample_rate: u32,
}

/// Single silent MP3 frame
#[derive(Clone, Debug)]
pub struct CompressedAudioSpec {
    pub path: &'static str,
}

#[derive(Clone, Debug)]
pub enum AudioSpec {
    Wave(WaveAudioSpec),
    Compressed(CompressedAudioSpec),
}

impl AudioSpec {
    pub fn path(&self) -> &'static str {
        match self {
            AudioSpec::Wave(spec) => spec.path,
            AudioSpec::Compressed(spec) => spec.path,
        }
    }
}

const fn img(
    path: &'static str,
    width: u32,
    height: u32,
    color: &'static str,
    label: &'static str,
    format: ImageFormat,
) -> ImageSpec {
    ImageSpec {
        path,
        width,
        height,
        color,
        label,
        format,
    }
}

use ImageFormat::{Jpeg, Png};

pub const IMAGE_SPECS: &[ImageSpec] = &[
    // Sprites and backgrounds
    img("images/player.png", 64, 64, "#5B8DEE", "P", Png),
    img("images/enemies.png", 64, 64, "#EE5B5B", "E", Png),
    img("images/items.png", 32, 32, "#F0C040", "I", Png),
    img("images/main_menu_bg.jpg", 1280, 720, "#1A1A3E", "BG", Jpeg),
    img("images/app_icon.png", 64, 64, "#40B050", "G", Png),
    // Menu and class icons
    img("icons/new_game.png", 32, 32, "#6090D0", "N", Png),
    img("icons/load_game.png", 32, 32, "#6090D0", "L", Png),
    img("icons/settings.png", 32, 32, "#808080", "S", Png),
    img("icons/exit.png", 32, 32, "#D06060", "X", Png),
    img("icons/warrior.png", 32, 32, "#C08040", "W", Png),
    img("icons/mage.png", 32, 32, "#8040C0", "M", Png),
    img("icons/archer.png", 32, 32, "#40C040", "A", Png),
    img("icons/inventory.png", 32, 32, "#A0A060", "In", Png),
    img("icons/quests.png", 32, 32, "#D0A040", "Q", Png),
    img("icons/skills.png", 32, 32, "#40A0D0", "Sk", Png),
    img("icons/skill_1.png", 32, 32, "#E06040", "1", Png),
    img("icons/skill_2.png", 32, 32, "#40B0E0", "2", Png),
    img("icons/skill_3.png", 32, 32, "#60E060", "3", Png),
    // HUD, save slots and items
    img("icons/save.png", 32, 32, "#5080C0", "Sv", Png),
    img("icons/chapter.png", 32, 32, "#7060A0", "Ch", Png),
    img("icons/location.png", 32, 32, "#60A060", "Lo", Png),
    img("icons/time.png", 32, 32, "#A09050", "Ti", Png),
    img("icons/quest.png", 32, 32, "#D0A040", "Qu", Png),
    img("icons/skill_attack.png", 32, 32, "#E04040", "At", Png),
    img("icons/skill_heal.png", 32, 32, "#40E040", "He", Png),
    img("icons/skill_fireball.png", 32, 32, "#E08020", "Fi", Png),
    img("icons/skill_default.png", 32, 32, "#808080", "Df", Png),
    img("icons/health_potion.png", 32, 32, "#E04040", "HP", Png),
    img("icons/mana_potion.png", 32, 32, "#4040E0", "MP", Png),
    img("icons/iron_sword.png", 32, 32, "#A0A0B0", "Sw", Png),
    img("images/player_avatar.png", 64, 64, "#5B8DEE", "PA", Png),
    img("images/default_item.png", 32, 32, "#808080", "?", Png),
    // UI widgets
    img("images/ui/button_normal.png", 200, 50, "#3A5A8C", "BTN", Png),
    img("images/ui/button_hover.png", 200, 50, "#4A7ABE", "BTN", Png),
    img("images/ui/button_pressed.png", 200, 50, "#2A3A5C", "BTN", Png),
    img("images/ui/background.png", 1280, 720, "#1E1E2E", "", Png),
];

pub const FONT_SPECS: &[FontSpec] = &[
    FontSpec {
        path: "fonts/game_font.ttf",
    },
    FontSpec {
        path: "fonts/ui_font.ttf",
    },
];

pub const AUDIO_SPECS: &[AudioSpec] = &[
    AudioSpec::Compressed(CompressedAudioSpec {
        path: "sounds/bgm.mp3",
    }),
    AudioSpec::Wave(WaveAudioSpec {
        path: "sounds/effects.wav",
        duration_secs: 1.0,
        sample_rate: 22050,
    }),
];
