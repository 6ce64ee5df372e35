mod assembler;
mod command;
mod error;
mod source;
mod symbols;

use color_print::cprintln;
use error::Error;
use std::io::{BufRead, Write};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file (Prog.asm)
    input: String,

    /// Output file, defaults to the input with a `.hack` extension
    #[clap(short, long)]
    output: Option<String>,

    /// Dump the assembled listing
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    use clap::Parser;

    let args = Args::parse();
    if let Err(err) = run(&args) {
        cprintln!("<red,bold>error</>: {}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let stem = args
        .input
        .strip_suffix(".asm")
        .ok_or_else(|| Error::InputName(args.input.clone()))?;

    println!("  < {}", args.input);
    let file =
        std::fs::File::open(&args.input).map_err(|e| Error::FileOpen(args.input.clone(), e))?;
    let mut lines = vec![];
    for line in std::io::BufReader::new(file).lines() {
        lines.push(line.map_err(Error::FileRead)?);
    }

    let mut commands = source::Commands::from_lines(&lines);
    let words = assembler::assemble(&mut commands)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| format!("{}.hack", stem));
    println!("  > {}", output);
    let mut file =
        std::fs::File::create(&output).map_err(|e| Error::FileCreate(output.clone(), e))?;
    for word in &words {
        writeln!(file, "{:016b}", word).map_err(|e| Error::FileWrite(output.clone(), e))?;
    }

    if args.dump {
        dump(&words);
    }
    Ok(())
}

fn dump(words: &[u16]) {
    use color_print::cformat;

    for (addr, word) in words.iter().enumerate() {
        let text = match arch::inst::Inst::from_bin(*word) {
            Some(inst) => inst.cformat(),
            None => cformat!("<red,bold>??</>"),
        };
        println!("{:04X} | {:016b} | {}", addr, word, text);
    }
}
