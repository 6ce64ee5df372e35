use arch::{comp::Comp, dest::Dest, inst::Inst, jump::Jump};

use crate::command::{Command, Kind};
use crate::error::Error;
use crate::source::Commands;
use crate::symbols::SymbolTable;

/// Two-pass translation of a command stream into machine words, one word
/// per non-label command, in source order. The symbol table lives for
/// exactly one call; running the same stream again yields the same words.
pub fn assemble(commands: &mut Commands) -> Result<Vec<u16>, Error> {
    let mut symbols = SymbolTable::new();
    collect_labels(commands, &mut symbols);
    commands.rewind();
    emit(commands, &mut symbols)
}

/// Pass 1: bind every label to the instruction address of the next emitted
/// instruction. Labels occupy no instruction slot, so only address and
/// comp commands advance the counter. This pass performs no mnemonic
/// lookups and cannot fail.
fn collect_labels(commands: &mut Commands, symbols: &mut SymbolTable) {
    let mut rom_addr: u16 = 0;
    while commands.has_more() {
        let command = Command::new(commands.advance());
        if command.kind() == Kind::Label {
            symbols.insert(command.symbol(), rom_addr);
        } else {
            rom_addr += 1;
        }
    }
}

/// Pass 2: resolve symbols and encode. An unknown comp mnemonic aborts the
/// whole translation; no partial output escapes.
fn emit(commands: &mut Commands, symbols: &mut SymbolTable) -> Result<Vec<u16>, Error> {
    let mut words = vec![];
    while commands.has_more() {
        let command = Command::new(commands.advance());
        let inst = match command.kind() {
            Kind::Label => continue,
            Kind::Address => Inst::A(resolve(command.symbol(), symbols)?),
            Kind::Comp => {
                let comp = Comp::parse(command.comp())
                    .ok_or_else(|| Error::UnknownComp(command.comp().to_string()))?;
                let dest = Dest::parse(command.dest())
                    .ok_or_else(|| Error::UnknownDest(command.dest().unwrap_or("").to_string()))?;
                let jump = Jump::parse(command.jump())
                    .ok_or_else(|| Error::UnknownJump(command.jump().unwrap_or("").to_string()))?;
                Inst::C(comp, dest, jump)
            }
        };
        words.push(inst.to_bin());
    }
    Ok(words)
}

/// A decimal literal is its own address; anything else goes through the
/// symbol table, allocating a variable cell on first sight.
fn resolve(symbol: &str, symbols: &mut SymbolTable) -> Result<u16, Error> {
    if !symbol.is_empty() && symbol.chars().all(|c| c.is_ascii_digit()) {
        return symbol
            .parse::<u16>()
            .map_err(|_| Error::AddressRange(symbol.to_string()));
    }
    Ok(symbols.resolve(symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lines: &[&str]) -> Result<Vec<u16>, Error> {
        assemble(&mut Commands::from_lines(lines))
    }

    fn run_strings(lines: &[&str]) -> Vec<String> {
        run(lines)
            .unwrap()
            .iter()
            .map(|word| format!("{:016b}", word))
            .collect()
    }

    #[test]
    fn add_two_and_three() {
        assert_eq!(
            run_strings(&["@2", "D=A", "@3", "D=D+A", "@0", "M=D"]),
            vec![
                "0000000000000010",
                "1110110000010000",
                "0000000000000011",
                "1110000010010000",
                "0000000000000000",
                "1110001100001000",
            ]
        );
    }

    #[test]
    fn label_resolves_to_next_instruction() {
        assert_eq!(
            run_strings(&["(LOOP)", "@LOOP", "0;JMP"]),
            vec!["0000000000000000", "1110101010000111"]
        );
    }

    #[test]
    fn label_after_last_instruction() {
        // The trailing label binds to the total instruction count.
        assert_eq!(run(&["@0", "(END)", "@END"]).unwrap(), vec![0, 1]);
    }

    #[test]
    fn variables_in_order_of_first_appearance() {
        assert_eq!(
            run(&["@foo", "M=1", "@bar", "M=1", "@foo"]).unwrap(),
            vec![16, 0b1110111111001000, 17, 0b1110111111001000, 16]
        );
    }

    #[test]
    fn predefined_symbols_do_not_allocate() {
        assert_eq!(
            run(&["@SCREEN", "@KBD", "@R3", "@fresh"]).unwrap(),
            vec![16384, 24576, 3, 16]
        );
    }

    #[test]
    fn literal_addresses_pass_through() {
        assert_eq!(run(&["@0", "@1", "@32767"]).unwrap(), vec![0, 1, 32767]);
    }

    #[test]
    fn comments_and_blank_lines() {
        assert_eq!(
            run(&[
                "// add one to RAM[16]",
                "",
                "  @ sum  // whitespace is never significant",
                "M=M+1",
            ])
            .unwrap(),
            vec![16, 0b1111110111001000]
        );
    }

    #[test]
    fn label_does_not_shift_following_addresses() {
        // Labels emit nothing, so the instruction after one keeps its slot.
        let words = run(&["@1", "(MID)", "@MID", "(END)", "@END"]).unwrap();
        assert_eq!(words, vec![1, 1, 2]);
    }

    #[test]
    fn empty_stream_yields_no_words() {
        assert_eq!(run(&[]).unwrap(), Vec::<u16>::new());
        assert_eq!(run(&["// only comments", "   "]).unwrap(), Vec::<u16>::new());
    }

    #[test]
    fn idempotent() {
        let lines = ["(LOOP)", "@i", "M=M+1", "@LOOP", "0;JMP", "@j", "D=M"];
        assert_eq!(run(&lines).unwrap(), run(&lines).unwrap());
    }

    #[test]
    fn unknown_comp_is_fatal() {
        assert!(matches!(
            run(&["@1", "D=D+2"]),
            Err(Error::UnknownComp(m)) if m == "D+2"
        ));
    }

    #[test]
    fn unknown_dest_and_jump_are_fatal() {
        assert!(matches!(
            run(&["X=D"]),
            Err(Error::UnknownDest(m)) if m == "X"
        ));
        assert!(matches!(
            run(&["D;JXX"]),
            Err(Error::UnknownJump(m)) if m == "JXX"
        ));
    }

    #[test]
    fn oversized_literal_is_rejected() {
        assert!(matches!(
            run(&["@99999"]),
            Err(Error::AddressRange(m)) if m == "99999"
        ));
    }
}
