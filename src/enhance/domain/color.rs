use crate::error::EnhancerError;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees [0, 360), saturation and lightness in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    /// Parse a `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB` hex string.
    pub fn parse(hex: &str) -> Result<Rgb, EnhancerError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let invalid = || EnhancerError::InvalidColor(hex.to_string());

        // Hex digits only; `from_str_radix` alone would admit signs, and
        // multibyte input must not reach the byte-offset slicing below.
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let expanded = match digits.len() {
            6 => digits.to_string(),
            3 => digits
                .chars()
                .flat_map(|c| [c, c])
                .collect::<String>(),
            _ => return Err(invalid()),
        };

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&expanded[range], 16).map_err(|_| invalid())
        };

        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if (max - min).abs() < f64::EPSILON {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if (max - r).abs() < f64::EPSILON {
            ((g - b) / d).rem_euclid(6.0)
        } else if (max - g).abs() < f64::EPSILON {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        } * 60.0;

        Hsl { h, s, l }
    }

    pub fn from_hsl(hsl: Hsl) -> Rgb {
        let h = hsl.h.rem_euclid(360.0);
        let s = hsl.s.clamp(0.0, 1.0);
        let l = hsl.l.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let to_channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb {
            r: to_channel(r),
            g: to_channel(g),
            b: to_channel(b),
        }
    }
}

impl Hsl {
    pub fn rotate(self, degrees: f64) -> Hsl {
        Hsl {
            h: (self.h + degrees).rem_euclid(360.0),
            ..self
        }
    }

    pub fn with_lightness(self, l: f64) -> Hsl {
        Hsl {
            l: l.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn lighten(self, amount: f64) -> Hsl {
        self.with_lightness(self.l + amount)
    }

    pub fn darken(self, amount: f64) -> Hsl {
        self.with_lightness(self.l - amount)
    }

    /// Multiply saturation by `factor`, clamped to [0, 1].
    pub fn saturate(self, factor: f64) -> Hsl {
        Hsl {
            s: (self.s * factor).clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn to_hex(self) -> String {
        Rgb::from_hsl(self).to_hex()
    }
}

/// WCAG relative luminance: sRGB gamma-corrected channels weighted
/// 0.2126 / 0.7152 / 0.0722.
pub fn relative_luminance(color: Rgb) -> f64 {
    let linear = |channel: u8| {
        let c = f64::from(channel) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(color.r) + 0.7152 * linear(color.g) + 0.0722 * linear(color.b)
}

/// WCAG contrast ratio between two colors, in [1, 21].
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

/// Nudge `color` darker or lighter in 0.05 lightness steps until it
/// reaches `target` contrast against `reference`, or the lightness range
/// is exhausted.
pub fn ensure_contrast(color: Rgb, reference: Rgb, target: f64) -> Rgb {
    if contrast_ratio(color, reference) >= target {
        return color;
    }

    let step = if relative_luminance(reference) > 0.5 {
        -0.05
    } else {
        0.05
    };

    let mut hsl = color.to_hsl();
    let mut adjusted = color;
    while (step > 0.0 && hsl.l < 1.0) || (step < 0.0 && hsl.l > 0.0) {
        hsl = hsl.lighten(step);
        adjusted = Rgb::from_hsl(hsl);
        if contrast_ratio(adjusted, reference) >= target {
            break;
        }
    }
    adjusted
}
