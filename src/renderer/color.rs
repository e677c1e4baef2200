/// RGB color with an optional alpha channel, all channels in the range 0-255
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: Option<f64>,
}

impl Color {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: None }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: Some(a),
        }
    }

    /// Multiplies the color channels by `weight`. Alpha is copied unchanged.
    pub fn scaled(&self, weight: f64) -> Self {
        Self {
            r: self.r * weight,
            g: self.g * weight,
            b: self.b * weight,
            a: self.a,
        }
    }

    /// Rounded and clamped 8-bit channels. A missing alpha is opaque.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let channel = |c: f64| c.round().clamp(0., 255.) as u8;
        [
            channel(self.r),
            channel(self.g),
            channel(self.b),
            channel(self.a.unwrap_or(255.)),
        ]
    }
}
