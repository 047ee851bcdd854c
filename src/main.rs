use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dx7sheet::{read_bank, render, report_path, DecodeOptions, PitchModSensitivitySource};

/// Generate printable voice data sheets from DX7 32-voice SYSEX banks
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Location of the pitch modulation sensitivity field
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum PmsSource {
    /// Bits 4-6 of byte 116 (DX7 bulk format)
    #[default]
    High116,
    /// Bits 0-2 of byte 117
    Low117,
}

impl From<PmsSource> for DecodeOptions {
    fn from(source: PmsSource) -> Self {
        let pitch_mod_sensitivity = match source {
            PmsSource::High116 => PitchModSensitivitySource::HighBitsOf116,
            PmsSource::Low117 => PitchModSensitivitySource::LowBitsOf117,
        };
        DecodeOptions {
            pitch_mod_sensitivity,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all voices in a sysex bank file
    List {
        /// Path to the DX7 sysex bank file
        sysex_file: PathBuf,
    },
    /// Render the data sheet of one voice and save it as <voice name>.txt
    Sheet {
        /// Path to the DX7 sysex bank file
        sysex_file: PathBuf,

        /// Voice number (1-32)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=32))]
        voice: u8,

        /// Directory the sheet is written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Print the sheet without writing a file
        #[arg(long)]
        stdout: bool,

        /// Where to read pitch modulation sensitivity from
        #[arg(long, value_enum, default_value_t = PmsSource::High116)]
        pms_source: PmsSource,
    },
    /// Print one decoded voice as JSON
    Dump {
        /// Path to the DX7 sysex bank file
        sysex_file: PathBuf,

        /// Voice number (1-32)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=32))]
        voice: u8,

        /// Where to read pitch modulation sensitivity from
        #[arg(long, value_enum, default_value_t = PmsSource::High116)]
        pms_source: PmsSource,
    },
}

fn bank_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::List { sysex_file } => {
            let bank = read_bank(&sysex_file)?;

            println!("Bank '{}': 32 voices", bank_label(&sysex_file));
            for (i, name) in bank.voice_names().iter().enumerate() {
                println!("  {:02}: {}", i + 1, name);
            }
        }
        Commands::Sheet {
            sysex_file,
            voice,
            out_dir,
            stdout,
            pms_source,
        } => {
            let slot = usize::from(voice);
            let bank = read_bank(&sysex_file)?;
            let voice = bank.decode(slot, &pms_source.into())?;
            let sheet = render(&voice, &bank_label(&sysex_file), slot);

            if stdout {
                println!("{}", sheet);
                return Ok(());
            }

            let path = report_path(&out_dir, &voice.name, slot);
            std::fs::write(&path, &sheet)
                .with_context(|| format!("unable to write sheet to '{}'", path.display()))?;
            log::info!("wrote voice {} '{}' to {}", slot, voice.name, path.display());

            println!("{}", sheet);
            println!();
            println!("Saved as '{}'", path.display());
        }
        Commands::Dump {
            sysex_file,
            voice,
            pms_source,
        } => {
            let bank = read_bank(&sysex_file)?;
            let voice = bank.decode(usize::from(voice), &pms_source.into())?;
            let json = serde_json::to_string_pretty(&voice).context("unable to serialize voice")?;
            println!("{}", json);
        }
    }

    Ok(())
}
