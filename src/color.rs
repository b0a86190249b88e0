use image::Rgba;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xff)
    }

    pub fn with_a(mut self, a: u8) -> Self {
        self.a = a;
        self
    }

    /// Multiply channel by channel, WHITE is the identity
    pub fn modulate(self, other: Color) -> Self {
        fn mul(a: u8, b: u8) -> u8 {
            ((a as u16 * b as u16 + 127) / 255) as u8
        }
        Self {
            r: mul(self.r, other.r),
            g: mul(self.g, other.g),
            b: mul(self.b, other.b),
            a: mul(self.a, other.a),
        }
    }

    /// Source-over blend `self` onto `dst`
    pub fn blend_over(self, dst: Color) -> Color {
        match self.a {
            0 => dst,
            0xff => self,
            _ => {
                let sa = self.a as f32 / 255.0;
                let da = dst.a as f32 / 255.0;
                let out_a = sa + da * (1.0 - sa);
                let ch = |s: u8, d: u8| {
                    let s = s as f32 / 255.0;
                    let d = d as f32 / 255.0;
                    let v = (s * sa + d * da * (1.0 - sa)) / out_a;
                    (v * 255.0).round() as u8
                };
                Color {
                    r: ch(self.r, dst.r),
                    g: ch(self.g, dst.g),
                    b: ch(self.b, dst.b),
                    a: (out_a * 255.0).round() as u8,
                }
            }
        }
    }
}

impl From<Rgba<u8>> for Color {
    fn from(px: Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Self { r, g, b, a }
    }
}

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Self {
        Rgba([c.r, c.g, c.b, c.a])
    }
}

pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const BLUE: Color = Color::rgb(0, 0, 0xff);
pub const GRAY: Color = Color::rgb(0x80, 0x80, 0x80);
pub const GREEN: Color = Color::rgb(0, 0x80, 0);
pub const LIME: Color = Color::rgb(0x00, 0xff, 0x00);
pub const PURPLE: Color = Color::rgb(0x80, 0, 0x80);
pub const RED: Color = Color::rgb(0xff, 0, 0);
pub const YELLOW: Color = Color::rgb(0xff, 0xff, 0);
pub const ORANGE: Color = Color::rgb(0xff, 0xa5, 0x00);
