use std::fmt::{Display, Formatter};

/// Colours a region can be painted with.  [`Colour::None`] marks a region
/// that has not been coloured yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Colour {
    #[default]
    None,
    Yellow,
    Red,
    Green,
    Blue,
}

impl Colour {
    /// Every colour, in code order.
    pub const ALL: [Colour; 5] = [
        Colour::None,
        Colour::Yellow,
        Colour::Red,
        Colour::Green,
        Colour::Blue,
    ];

    /// Maps an integer code to a colour.  Codes 0 through 4 select
    /// `None`, `Yellow`, `Red`, `Green` and `Blue`; any other code yields
    /// `None`.
    pub fn from_code(code: i32) -> Colour {
        match code {
            1 => Colour::Yellow,
            2 => Colour::Red,
            3 => Colour::Green,
            4 => Colour::Blue,
            _ => Colour::None,
        }
    }

    /// Inverse of [`from_code`](Self::from_code).
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn is_none(self) -> bool {
        self == Colour::None
    }

    pub fn name(self) -> &'static str {
        match self {
            Colour::None => "NONE",
            Colour::Yellow => "YELLOW",
            Colour::Red => "RED",
            Colour::Green => "GREEN",
            Colour::Blue => "BLUE",
        }
    }
}

impl From<i32> for Colour {
    fn from(code: i32) -> Self {
        Colour::from_code(code)
    }
}

impl Display for Colour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_known_codes() {
        assert_eq!(Colour::from_code(0), Colour::None);
        assert_eq!(Colour::from_code(1), Colour::Yellow);
        assert_eq!(Colour::from_code(2), Colour::Red);
        assert_eq!(Colour::from_code(3), Colour::Green);
        assert_eq!(Colour::from_code(4), Colour::Blue);
    }

    #[test]
    fn test_unknown_codes_default_to_none() {
        assert_eq!(Colour::from_code(99), Colour::None);
        assert_eq!(Colour::from_code(-1), Colour::None);
        assert_eq!(Colour::from(5), Colour::None);
    }

    #[test]
    fn test_code_round_trip() {
        for colour in Colour::ALL {
            assert_eq!(Colour::from_code(colour.code()), colour);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Colour::Green.to_string(), "GREEN");
        assert_eq!(Colour::default().to_string(), "NONE");
    }

    #[quickcheck]
    fn prop_from_code_is_total(code: i32) -> bool {
        Colour::from_code(code).is_none() == !(1..=4).contains(&code)
    }
}
