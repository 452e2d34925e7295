use rand::Rng;

/// Represents a color in RGB format.
///
/// This struct encapsulates color information using red, green, and blue
/// channels. Each channel is an 8-bit unsigned integer. Every shape on a
/// board carries exactly one `Color` for all of its cells.
///
/// # Examples
///
/// Creating and manipulating colors:
///
/// ```
/// use recorte::Color;
///
/// // Create a black color
/// let black = Color::BLACK;
///
/// // Create a red color
/// let red = Color::rgb(255, 0, 0);
///
/// // Normalize the color values to [0.0, 1.0]
/// let normalized = red.normalize();
/// assert_eq!(normalized, [1.0, 0.0, 0.0]);
///
/// // Convert the color to an array
/// let color_array = red.to_array();
/// assert_eq!(color_array, [255, 0, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub [u8; 3]);

impl Color {
    /// A black color.
    pub const BLACK: Self = Self([0, 0, 0]);
    /// A white color.
    pub const WHITE: Self = Self([255, 255, 255]);

    /// Creates a new color with the specified RGB values.
    ///
    /// # Examples
    ///
    /// ```
    /// use recorte::Color;
    ///
    /// let green = Color::rgb(0, 255, 0);
    /// assert_eq!(green, Color([0, 255, 0]));
    /// ```
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Creates a uniformly random color.
    ///
    /// Used by [`crate::Board::make_new_shape`] when the caller does not pick
    /// a color for a new shape.
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Normalizes the color values to the range [0.0, 1.0].
    ///
    /// This is useful for rendering collaborators that work with
    /// floating-point color values.
    ///
    /// # Examples
    ///
    /// ```
    /// use recorte::Color;
    ///
    /// let red = Color::rgb(255, 0, 0);
    /// assert_eq!(red.normalize(), [1.0, 0.0, 0.0]);
    /// ```
    pub fn normalize(&self) -> [f32; 3] {
        [
            self.0[0] as f32 / 255.0,
            self.0[1] as f32 / 255.0,
            self.0[2] as f32 / 255.0,
        ]
    }

    /// Returns the color as an array of 3 `u8` values.
    ///
    /// # Examples
    ///
    /// ```
    /// use recorte::Color;
    ///
    /// let blue = Color::rgb(0, 0, 255);
    /// assert_eq!(blue.to_array(), [0, 0, 255]);
    /// ```
    pub fn to_array(&self) -> [u8; 3] {
        self.0
    }
}
