use num_enum::{FromPrimitive, IntoPrimitive};
use strum::{Display, EnumIter, EnumString};

/// Dest field of a C-instruction. The discriminant is the 3-bit code:
/// bit 2 writes A, bit 1 writes D, bit 0 writes M.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, FromPrimitive, IntoPrimitive, EnumString, Display,
    EnumIter,
)]
#[repr(u8)]
pub enum Dest {
    #[default]
    #[strum(serialize = "null")]
    Null = 0b000,
    M = 0b001,
    D = 0b010,
    MD = 0b011,
    A = 0b100,
    AM = 0b101,
    AD = 0b110,
    AMD = 0b111,
}

impl Dest {
    /// An absent dest field means the computed value is discarded.
    pub fn parse(s: Option<&str>) -> Option<Self> {
        match s {
            None => Some(Dest::Null),
            Some(s) => s.parse().ok(),
        }
    }

    pub fn code(self) -> u8 {
        u8::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(Dest::parse(None), Some(Dest::Null));
        assert_eq!(Dest::parse(Some("M")), Some(Dest::M));
        assert_eq!(Dest::parse(Some("AMD")), Some(Dest::AMD));
        assert_eq!(Dest::parse(Some("DM")), None);
        assert_eq!(Dest::parse(Some("")), None);
    }

    #[test]
    fn codes() {
        assert_eq!(Dest::Null.code(), 0b000);
        assert_eq!(Dest::M.code(), 0b001);
        assert_eq!(Dest::D.code(), 0b010);
        assert_eq!(Dest::MD.code(), 0b011);
        assert_eq!(Dest::A.code(), 0b100);
        assert_eq!(Dest::AM.code(), 0b101);
        assert_eq!(Dest::AD.code(), 0b110);
        assert_eq!(Dest::AMD.code(), 0b111);
    }
}
