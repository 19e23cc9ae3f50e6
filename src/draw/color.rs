//! RGBA color type and the fixed palette offered by the canvas toolbar.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use fingerpaint::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let half_blue = Color::new(0.0, 0.0, 1.0, 0.5);
/// assert_eq!(half_blue.opaque(), Color::new(0.0, 0.0, 1.0, 1.0));
/// # let _ = red;
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color from RGB components.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with alpha forced to 1.0.
    pub fn opaque(self) -> Self {
        Self { a: 1.0, ..self }
    }

    /// Same color with the given alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Sets this color as the source of a Cairo context.
    pub fn apply(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

// ============================================================================
// Palette
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

/// Predefined magenta color (R=1.0, G=0.0, B=1.0)
pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);

/// Predefined cyan color (R=0.0, G=1.0, B=1.0)
pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);

/// Predefined white color. Also the canvas background and the eraser color.
pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

/// Quick-pick colors shown on the canvas toolbar, in button order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteColor {
    Red,
    Green,
    Blue,
    Magenta,
    Yellow,
    Cyan,
    White,
    Black,
}

impl PaletteColor {
    /// All palette entries in toolbar order.
    pub const ALL: [PaletteColor; 8] = [
        PaletteColor::Red,
        PaletteColor::Green,
        PaletteColor::Blue,
        PaletteColor::Magenta,
        PaletteColor::Yellow,
        PaletteColor::Cyan,
        PaletteColor::White,
        PaletteColor::Black,
    ];

    /// Looks up a palette entry by toolbar index. Unknown indices fall back to black.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(PaletteColor::Black)
    }

    /// The opaque color for this entry.
    pub fn color(self) -> Color {
        match self {
            PaletteColor::Red => RED,
            PaletteColor::Green => GREEN,
            PaletteColor::Blue => BLUE,
            PaletteColor::Magenta => MAGENTA,
            PaletteColor::Yellow => YELLOW,
            PaletteColor::Cyan => CYAN,
            PaletteColor::White => WHITE,
            PaletteColor::Black => BLACK,
        }
    }
}

impl std::str::FromStr for PaletteColor {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            "magenta" | "pink" => Ok(Self::Magenta),
            "yellow" => Ok(Self::Yellow),
            "cyan" => Ok(Self::Cyan),
            "white" => Ok(Self::White),
            "black" => Ok(Self::Black),
            _ => Err(()),
        }
    }
}
