use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x00ff4e45);
pub const SECONDARY: Color = Color::from_u32(0x00a8231d);
pub const NEUTRAL: Color = Color::from_u32(0x00606060);
pub const MUTED: Color = Color::from_u32(0x00aaaaaa);
pub const BACKGROUND: Color = Color::from_u32(0x00030303);
pub const SURFACE: Color = Color::from_u32(0x00212121);
pub const ERROR: Color = Color::from_u32(0x00e57373);
