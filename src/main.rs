use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use miette::{IntoDiagnostic, Result};

use disasm86::env::Settings;
use disasm86::{DecodeError, Instruction, OperandOrder, Resolved};

/// Disassembler for register-to-register 8086 `mov` instructions.
#[derive(Parser)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Quickly provide a binary file to disassemble
    path: Option<PathBuf>,

    /// Do not print status messages
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the assembly listing for a binary file
    Disasm {
        /// Binary file containing raw machine code
        name: PathBuf,
        /// Write the listing to this file instead of standard output
        dest: Option<PathBuf>,
        /// Always write `r/m` first, even when the `d` bit marks `reg` as destination
        #[arg(long)]
        ignore_direction: bool,
        /// Start the listing with `bits 16`, so it can be reassembled with nasm
        #[arg(long)]
        header: bool,
    },
    /// Print the decoded fields of every instruction
    Fields {
        /// Binary file containing raw machine code
        name: PathBuf,
    },
    /// Check that a binary file disassembles, without printing the listing
    Check {
        /// File to check
        name: PathBuf,
    },
}

fn main() -> miette::Result<()> {
    use MsgColor::*;
    let args = Args::parse();
    disasm86::env::init(Settings { quiet: args.quiet });

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new() //
                .context_lines(DIAGNOSTIC_CONTEXT_LINES)
                .build(),
        )
    }))?;

    let Some(command) = args.command else {
        if let Some(path) = args.path {
            let listing = disassemble(&path, OperandOrder::default())?;
            println!("{listing}");
        } else {
            println!("\n~ disasm86 v{VERSION} ~");
            println!("{}", SHORT_INFO.trim_start().cyan());
        }
        return Ok(());
    };

    match command {
        Command::Disasm {
            name,
            dest,
            ignore_direction,
            header,
        } => {
            let order = if ignore_direction {
                OperandOrder::Fixed
            } else {
                OperandOrder::Direction
            };
            let mut listing = disassemble(&name, order)?;
            if header {
                listing = format!("bits 16\n\n{listing}");
            }
            match dest {
                Some(dest) => {
                    fs::write(&dest, listing + "\n").into_diagnostic()?;
                    file_message(Green, "Saved", &dest);
                }
                None => println!("{listing}"),
            }
            Ok(())
        }
        Command::Fields { name } => {
            let bytes = read(&name)?;
            let instrs = disasm86::decode(&bytes).map_err(DecodeError::into_report)?;
            println!("{:>6}  {:<6} d w {:<3} reg r_m", "offset", "op", "mod");
            for (index, instr) in instrs.iter().enumerate() {
                println!("{}", fields_row(index, instr));
            }
            message(Green, "Finished", &format!("{} instructions", instrs.len()));
            Ok(())
        }
        Command::Check { name } => {
            let _ = disassemble(&name, OperandOrder::default())?;
            message(Green, "Success", "no errors found!");
            Ok(())
        }
    }
}

#[allow(unused)]
enum MsgColor {
    Green,
    Cyan,
    Red,
}

fn file_message(color: MsgColor, left: &str, right: &Path) {
    let right = format!("target {}", right.display());
    message(color, left, &right);
}

fn message(color: MsgColor, left: &str, right: &str) {
    if disasm86::env::is_quiet() {
        return;
    }
    let left = match color {
        MsgColor::Green => left.green(),
        MsgColor::Cyan => left.cyan(),
        MsgColor::Red => left.red(),
    };
    eprintln!("{left:>12} {right}");
}

fn read(name: &Path) -> Result<Vec<u8>> {
    file_message(MsgColor::Green, "Reading", name);
    fs::read(name).into_diagnostic()
}

/// Read, decode and render `name`, reporting progress on stderr.
fn disassemble(name: &Path, order: OperandOrder) -> Result<String> {
    let bytes = read(name)?;
    message(
        MsgColor::Green,
        "Decoding",
        &format!("{} bytes", bytes.len()),
    );
    let instrs = disasm86::decode(&bytes).map_err(DecodeError::into_report)?;
    let resolved = disasm86::resolve_all(&instrs, order).map_err(DecodeError::into_report)?;
    message(
        MsgColor::Green,
        "Finished",
        &format!("{} instructions", resolved.len()),
    );
    Ok(resolved
        .iter()
        .map(Resolved::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

fn fields_row(index: usize, instr: &Instruction) -> String {
    format!(
        "{:>#6x}  {:06b} {} {} {:02b}  {:03b} {:03b}",
        index * disasm86::INSTRUCTION_LEN,
        instr.op_code.value(),
        instr.d as u8,
        instr.w as u8,
        instr.mode as u8,
        instr.reg.value(),
        instr.r_m.value(),
    )
}

/// Lines of context shown around a diagnostic's focus.
const DIAGNOSTIC_CONTEXT_LINES: usize = 8;

const SHORT_INFO: &str = r"
Turns raw 8086 machine code back into assembly. Only the two-byte
register-to-register form of `mov` is understood.
Please use `-h` or `--help` to access the usage instructions.
";

const VERSION: &str = env!("CARGO_PKG_VERSION");
