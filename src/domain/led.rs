// LED colour buckets for today's index

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedColor {
    Red,
    Green,
    Blue,
}

impl LedColor {
    pub fn for_index(value: u32) -> Self {
        if value > 80 {
            LedColor::Red
        } else if value > 50 {
            LedColor::Green
        } else {
            LedColor::Blue
        }
    }

    /// Pin levels as (red, green, blue).
    pub fn levels(self) -> (bool, bool, bool) {
        match self {
            LedColor::Red => (true, false, false),
            LedColor::Green => (false, true, false),
            LedColor::Blue => (false, false, true),
        }
    }
}
