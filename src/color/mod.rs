mod hsv;

pub use hsv::{HUE_MAX, HUE_SECTOR, PixelHsv, hsv2rgb, hue_at};
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Black (all channels off)
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
