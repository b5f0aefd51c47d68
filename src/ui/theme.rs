pub use druid::theme::*;
use druid::{Color, Env, FontDescriptor, FontFamily, FontWeight, Key};

pub fn grid(m: f64) -> f64 {
    GRID * m
}

pub const GRID: f64 = 8.0;

pub const WHITE: Color = Color::WHITE;
pub const BLACK: Color = Color::BLACK;
pub const GREY_1: Color = Color::grey8(0x33);
pub const GREY_2: Color = Color::grey8(0x4f);
pub const GREY_3: Color = Color::grey8(0x82);
pub const GREY_4: Color = Color::grey8(0xbd);
pub const GREY_5: Color = Color::grey8(0xe0);
pub const GREY_6: Color = Color::grey8(0xf2);

pub const UI_FONT_MEDIUM: Key<FontDescriptor> = Key::new("app.ui-font-medium");
pub const TEXT_SIZE_SMALL: Key<f64> = Key::new("app.text-size-small");

pub const ICON_COLOR: Key<Color> = Key::new("app.icon-color");
pub const LINK_HOT_COLOR: Key<Color> = Key::new("app.link-hot-color");
pub const LINK_COLD_COLOR: Key<Color> = Key::new("app.link-cold-color");

/// Corner radius of album and playlist cover tiles.
pub const COVER_RADIUS: f64 = 4.0;

pub fn setup(env: &mut Env) {
    env.set(WINDOW_BACKGROUND_COLOR, WHITE);
    env.set(TEXT_COLOR, GREY_1);
    env.set(PLACEHOLDER_COLOR, GREY_3);
    env.set(ICON_COLOR, GREY_4);

    env.set(BACKGROUND_LIGHT, WHITE);
    env.set(BACKGROUND_DARK, GREY_6);
    env.set(FOREGROUND_LIGHT, GREY_1);
    env.set(FOREGROUND_DARK, BLACK);

    env.set(
        UI_FONT,
        FontDescriptor::new(FontFamily::SYSTEM_UI).with_size(14.0),
    );
    env.set(
        UI_FONT_MEDIUM,
        FontDescriptor::new(FontFamily::SYSTEM_UI)
            .with_size(14.0)
            .with_weight(FontWeight::MEDIUM),
    );
    env.set(TEXT_SIZE_SMALL, 12.0);
    env.set(TEXT_SIZE_NORMAL, 14.0);
    env.set(TEXT_SIZE_LARGE, 18.0);

    env.set(LINK_HOT_COLOR, Color::rgba(0.0, 0.0, 0.0, 0.05));
    env.set(LINK_COLD_COLOR, Color::rgba(0.0, 0.0, 0.0, 0.0));
}
