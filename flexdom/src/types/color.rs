/// A color in either OKLCH or sRGB form, with an alpha channel.
///
/// OKLCH is the working space: transitions interpolate in it, and `palette`
/// handles the conversion to sRGB at render time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32, a: f32 },
    Rgb { r: u8, g: u8, b: u8, a: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Composite `self` over `below` at the given alpha.
    pub fn over(self, below: Rgb, alpha: f32) -> Rgb {
        let a = alpha.clamp(0.0, 1.0);
        let blend = |top: u8, bot: u8| -> u8 {
            (top as f32 * a + bot as f32 * (1.0 - a)).round() as u8
        };
        Rgb::new(
            blend(self.r, below.r),
            blend(self.g, below.g),
            blend(self.b, below.b),
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
        Self::Rgb { r, g, b, a: 1.0 }
    }

    pub fn alpha(&self) -> f32 {
        match self {
            Self::Oklch { a, .. } | Self::Rgb { a, .. } => *a,
        }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        match self {
            Self::Oklch { l, c, h, .. } => Self::Oklch { l, c, h, a: alpha },
            Self::Rgb { r, g, b, .. } => Self::Rgb { r, g, b, a: alpha },
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b, .. } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h, .. } => oklch_to_rgb(*l, *c, *h),
        }
    }

    /// Interpolate between two colors in OKLCH space, hue along the
    /// shortest arc.
    pub fn lerp(from: &Color, to: &Color, t: f32) -> Color {
        let (fl, fc, fh, fa) = from.to_oklch();
        let (tl, tc, th, ta) = to.to_oklch();

        let l = fl + (tl - fl) * t;
        let c = fc + (tc - fc) * t;
        let a = fa + (ta - fa) * t;

        let mut dh = th - fh;
        if dh > 180.0 {
            dh -= 360.0;
        } else if dh < -180.0 {
            dh += 360.0;
        }
        let h = (fh + dh * t).rem_euclid(360.0);

        Color::oklcha(l, c, h, a)
    }

    fn to_oklch(&self) -> (f32, f32, f32, f32) {
        match self {
            Self::Oklch { l, c, h, a } => (*l, *c, *h, *a),
            Self::Rgb { r, g, b, a } => {
                use palette::{IntoColor, Oklch, Srgb};
                let srgb = Srgb::new(
                    *r as f32 / 255.0,
                    *g as f32 / 255.0,
                    *b as f32 / 255.0,
                );
                let oklch: Oklch = srgb.into_color();
                (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees(), *a)
            }
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
