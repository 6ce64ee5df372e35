use crate::{comp::Comp, dest::Dest, jump::Jump};

use color_print::cformat;
use std::fmt;

/// One Hack machine instruction, one 16-bit word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    /// `@value`: load a 15-bit address into the A register.
    A(u16),
    /// `dest=comp;jump`: compute, optionally store, optionally branch.
    C(Comp, Dest, Jump),
}

impl Inst {
    /// Packs the instruction into its word: `0vvvvvvvvvvvvvvv` for an
    /// A-instruction, `111accccccdddjjj` for a C-instruction.
    pub fn to_bin(self) -> u16 {
        match self {
            Inst::A(addr) => addr & 0x7FFF,
            Inst::C(comp, dest, jump) => {
                (0b111 << 13)
                    | (comp.code() as u16) << 6
                    | (dest.code() as u16) << 3
                    | jump.code() as u16
            }
        }
    }

    /// Unpacks a word. `None` when the comp field of a C-word is not one of
    /// the 28 defined codes.
    pub fn from_bin(bin: u16) -> Option<Inst> {
        if bin & 0x8000 == 0 {
            return Some(Inst::A(bin));
        }
        let comp = Comp::from_code(((bin >> 6) & 0b111_1111) as u8)?;
        let dest = Dest::from(((bin >> 3) & 0b111) as u8);
        let jump = Jump::from((bin & 0b111) as u8);
        Some(Inst::C(comp, dest, jump))
    }
}

impl fmt::Display for Inst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inst::A(addr) => write!(f, "@{}", addr),
            Inst::C(comp, dest, jump) => {
                if *dest != Dest::Null {
                    write!(f, "{}=", dest)?;
                }
                write!(f, "{}", comp)?;
                if *jump != Jump::Null {
                    write!(f, ";{}", jump)?;
                }
                Ok(())
            }
        }
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        match self {
            Inst::A(addr) => cformat!("<y>@{}</>", addr),
            Inst::C(comp, dest, jump) => {
                let dest = match dest {
                    Dest::Null => String::new(),
                    d => cformat!("<blue>{}</>=", d),
                };
                let jump = match jump {
                    Jump::Null => String::new(),
                    j => cformat!(";<green>{}</>", j),
                };
                format!("{}{}{}", dest, cformat!("<red>{}</>", comp), jump)
            }
        }
    }
}
