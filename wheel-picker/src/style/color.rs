use palette::{IntoColor, Oklch, Srgb};

/// A color usable in picker styles.
///
/// Terminal cells have no alpha channel, so translucent colors are
/// composited over the cell background at render time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32, a: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

/// Opaque 8-bit RGB, the format cells are stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend towards `other`; `amount` 0.0 keeps `self`, 1.0 gives `other`.
    pub fn mix(self, other: Rgb, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * amount).round() as u8;
        Self::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
        )
    }
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h, a: 1.0 }
    }

    pub fn oklcha(l: f32, c: f32, h: f32, a: f32) -> Self {
        Self::Oklch { l, c, h, a }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Same color with the given opacity.
    pub fn alpha(self, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        match self {
            Self::Oklch { l, c, h, .. } => Self::Oklch { l, c, h, a },
            Self::Rgb { r, g, b } => {
                let lch: Oklch = Srgb::new(r, g, b).into_format::<f32>().into_color();
                Self::Oklch {
                    l: lch.l,
                    c: lch.chroma,
                    h: lch.hue.into_positive_degrees(),
                    a,
                }
            }
        }
    }

    pub fn opacity(&self) -> f32 {
        match self {
            Self::Oklch { a, .. } => *a,
            Self::Rgb { .. } => 1.0,
        }
    }

    /// Color ignoring opacity.
    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h, .. } => oklch_to_rgb(*l, *c, *h),
        }
    }

    /// Color as it appears painted over `background`.
    pub fn over(&self, background: Rgb) -> Rgb {
        background.mix(self.to_rgb(), self.opacity())
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
