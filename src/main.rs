use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use rs_alnedit::{
    align::local_align_with_mode,
    cigar::{cigar_to_edits_with, edits_to_cigar_with},
    config::{CigarConfig, OpSymbols},
    dst::edit_counts,
    extract::get_edits,
    mode::AlignMode,
};

/// Convert between alignments, edit scripts and CIGAR strings.
#[derive(Parser, Debug)]
#[command(author, version, about, disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    symbols: SymbolOpts,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Operation alphabet shared by all commands
#[derive(Args, Debug)]
struct SymbolOpts {
    /// Symbol for a match column
    #[arg(long, default_value_t = 'M', global = true)]
    match_symbol: char,

    /// Symbol for an insertion column
    #[arg(long, default_value_t = 'I', global = true)]
    insert_symbol: char,

    /// Symbol for a deletion column
    #[arg(long, default_value_t = 'D', global = true)]
    delete_symbol: char,

    /// Accept zero-length CIGAR runs
    #[arg(long, default_value_t = false, global = true)]
    allow_zero: bool,
}

impl SymbolOpts {
    fn config(&self) -> Result<CigarConfig> {
        let symbols = OpSymbols::new(self.match_symbol, self.insert_symbol, self.delete_symbol)
            .context("Invalid operation symbols")?;
        Ok(CigarConfig {
            symbols,
            allow_zero_counts: self.allow_zero,
        })
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract ungapped sequences and edits from two alignment rows
    Edits { row_p: String, row_q: String },
    /// Rebuild alignment rows from a read, a reference and edits
    Align {
        read: String,
        reference: String,
        edits: String,
        /// Start position in the reference
        #[arg(short, long, default_value_t = 0)]
        offset: usize,
    },
    /// Encode edits as a CIGAR string
    ToCigar { edits: String },
    /// Expand a CIGAR string into edits
    FromCigar { cigar: String },
    /// Score edits against a read and a reference
    Dist {
        read: String,
        reference: String,
        edits: String,
        /// Start position in the reference
        #[arg(short, long, default_value_t = 0)]
        offset: usize,
    },
}

fn setup_logger(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(match verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logger(cli.verbose);
    let config = cli.symbols.config()?;
    run(cli.command, &config, &mut io::stdout().lock())
}

fn run(command: Command, config: &CigarConfig, out: &mut impl Write) -> Result<()> {
    let symbols = &config.symbols;

    match command {
        Command::Edits { row_p, row_q } => {
            let extracted = get_edits(&row_p, &row_q).context("Cannot extract edits")?;
            writeln!(out, "{}", extracted.read)?;
            writeln!(out, "{}", extracted.reference)?;
            writeln!(out, "{}", symbols.format_edits(&extracted.edits))?;
        }
        Command::Align {
            read,
            reference,
            edits,
            offset,
        } => {
            let edits = symbols.parse_edits(&edits).context("Invalid edits")?;
            let mode = AlignMode::from_offset(offset);
            info!("Aligning {} edits with {mode:?}", edits.len());
            let aln = local_align_with_mode(&read, &reference, mode, &edits)
                .context("Cannot apply edits")?;
            writeln!(out, "{}", aln.read_row())?;
            writeln!(out, "{}", aln.reference_row())?;
        }
        Command::ToCigar { edits } => {
            let edits = symbols.parse_edits(&edits).context("Invalid edits")?;
            writeln!(out, "{}", edits_to_cigar_with(config, &edits))?;
        }
        Command::FromCigar { cigar } => {
            let edits = cigar_to_edits_with(config, &cigar)
                .with_context(|| format!("Cannot parse CIGAR {cigar:?}"))?;
            writeln!(out, "{}", symbols.format_edits(&edits))?;
        }
        Command::Dist {
            read,
            reference,
            edits,
            offset,
        } => {
            let edits = symbols.parse_edits(&edits).context("Invalid edits")?;
            let counts = edit_counts(&read, &reference, offset, &edits)
                .context("Cannot apply edits")?;
            info!(
                "{} matches, {} mismatches, {} insertions, {} deletions",
                counts.matches, counts.mismatches, counts.insertions, counts.deletions
            );
            writeln!(out, "{}", counts.distance())?;
        }
    }

    Ok(())
}
