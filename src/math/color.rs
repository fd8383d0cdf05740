use cgmath::BaseFloat;

/// A RGBA `Color`. Each color component is a floating point value, usually
/// with a range from 0 to 1. Values outside that range are kept as they are,
/// clamping is up to whoever consumes them.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color<S> {
    pub r: S,
    pub g: S,
    pub b: S,
    pub a: S,
}

impl<S: BaseFloat> Color<S> {
    pub fn new(r: S, g: S, b: S, a: S) -> Self {
        Color { r, g, b, a }
    }

    pub fn rgba(&self) -> [S; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl<S: BaseFloat> Color<S> {
    pub fn white() -> Self {
        Color::new(S::one(), S::one(), S::one(), S::one())
    }

    pub fn red() -> Self {
        Color::new(S::one(), S::zero(), S::zero(), S::one())
    }

    pub fn blue() -> Self {
        Color::new(S::zero(), S::zero(), S::one(), S::one())
    }

    pub fn yellow() -> Self {
        Color::new(S::one(), S::one(), S::zero(), S::one())
    }
}
