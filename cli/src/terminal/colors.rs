use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 102, g: 217, b: 239 };
pub const ACCENT: Color = Color::TrueColor { r: 230, g: 219, b: 116 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const RESOLVED: Color = Color::Green;
pub const PARTIAL: Color = Color::Yellow;
pub const UNKNOWN: Color = Color::BrightBlack;
