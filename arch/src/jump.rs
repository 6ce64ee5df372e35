use num_enum::{FromPrimitive, IntoPrimitive};
use strum::{Display, EnumIter, EnumString};

/// Jump field of a C-instruction. The discriminant is the 3-bit code:
/// bit 2 branches on negative, bit 1 on zero, bit 0 on positive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, FromPrimitive, IntoPrimitive, EnumString, Display,
    EnumIter,
)]
#[repr(u8)]
pub enum Jump {
    #[default]
    #[strum(serialize = "null")]
    Null = 0b000,
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

impl Jump {
    /// An absent jump field means execution always falls through.
    pub fn parse(s: Option<&str>) -> Option<Self> {
        match s {
            None => Some(Jump::Null),
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
        assert_eq!(Jump::parse(None), Some(Jump::Null));
        assert_eq!(Jump::parse(Some("JGT")), Some(Jump::JGT));
        assert_eq!(Jump::parse(Some("JMP")), Some(Jump::JMP));
        assert_eq!(Jump::parse(Some("jmp")), None);
        assert_eq!(Jump::parse(Some("JXX")), None);
    }

    #[test]
    fn codes() {
        assert_eq!(Jump::Null.code(), 0b000);
        assert_eq!(Jump::JGT.code(), 0b001);
        assert_eq!(Jump::JEQ.code(), 0b010);
        assert_eq!(Jump::JGE.code(), 0b011);
        assert_eq!(Jump::JLT.code(), 0b100);
        assert_eq!(Jump::JNE.code(), 0b101);
        assert_eq!(Jump::JLE.code(), 0b110);
        assert_eq!(Jump::JMP.code(), 0b111);
    }
}
