pub mod agency;
pub mod calendar;
pub mod calendar_date;
pub mod departure;
pub mod feed_metadata;
pub mod feed_request;
pub mod route;
pub mod stop;
pub mod stop_time;
pub mod trip;

/// A color encoded as a six-digit hexadecimal number, as used by
/// `routes.route_color`/`routes.route_text_color`.
///
/// # Examples
///
/// `FFFFFF` for white, `000000` for black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 {
            return None;
        }
        let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color { red, green, blue })
    }

    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn white() -> Self {
        Self::from_rgb(255, 255, 255)
    }

    pub fn black() -> Self {
        Self::from_rgb(0, 0, 0)
    }

    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}
