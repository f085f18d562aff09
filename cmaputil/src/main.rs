use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::info;
use pdfcmap::{CMap, CMapType, EncodeOptions, WritingMode};

#[derive(Parser)]
#[command(version, author, about = "CMap utility program using the pdfcmap library")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the header, codespaces and mapping counts
    Info { input: PathBuf },
    /// Decode a string of hex bytes to text
    Decode { input: PathBuf, hex: String },
    /// Print every Unicode mapping
    Dump { input: PathBuf },
    /// Rewrite the Unicode mappings as a minimal ToUnicode CMap
    Normalize {
        input: PathBuf,
        #[arg(short, long, value_name = "output file")]
        output: Option<PathBuf>,
        /// Byte width of the written codespace
        #[arg(long)]
        code_width: Option<u8>,
    },
}

fn load(path: &Path) -> Result<CMap, Box<dyn Error>> {
    info!("Open {}", path.display());
    let data = fs::read(path)?;
    Ok(CMap::parse(&data)?)
}

fn parse_hex(text: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let digits: Vec<u8> = text.bytes().filter(|c| !c.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits in {text:?}").into());
    }
    digits
        .chunks(2)
        .map(|pair| -> Result<u8, Box<dyn Error>> {
            let pair = std::str::from_utf8(pair)?;
            Ok(u8::from_str_radix(pair, 16)?)
        })
        .collect()
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Info { input } => {
            let cmap = load(&input)?;
            println!("Name: {}", cmap.name());
            let cmap_type = match cmap.cmap_type() {
                CMapType::Cid => "1 (CID)",
                CMapType::ToUnicode => "2 (ToUnicode)",
            };
            println!("Type: {cmap_type}");
            let wmode = match cmap.wmode() {
                WritingMode::Horizontal => "horizontal",
                WritingMode::Vertical => "vertical",
            };
            println!("Writing mode: {wmode}");
            if let Some(info) = cmap.system_info() {
                println!("System info: {}-{}-{}", info.registry, info.ordering, info.supplement);
            }
            if let Some(parent) = cmap.use_cmap() {
                println!("Uses: {parent}");
            }
            for codespace in cmap.codespaces() {
                let digits = usize::from(codespace.num_bytes) * 2;
                println!(
                    "Codespace: {} bytes <{:0digits$x}> <{:0digits$x}>",
                    codespace.num_bytes, codespace.low, codespace.high
                );
            }
            println!("Unicode mappings: {}", cmap.unicode_len());
            println!("CID mappings: {}", cmap.cid_len());
        }
        Command::Decode { input, hex } => {
            let cmap = load(&input)?;
            let bytes = parse_hex(&hex)?;
            let (codes, matched) = cmap.bytes_to_charcodes(&bytes);
            let (text, missing) = cmap.charcodes_to_unicode(&codes);
            println!("{text}");
            println!("{} codes, {missing} unmapped", codes.len());
            if !matched {
                println!("some bytes matched no codespace");
            }
        }
        Command::Dump { input } => {
            let cmap = load(&input)?;
            let digits = usize::from(cmap.codespaces().iter().map(|cs| cs.num_bytes).max().unwrap_or(2)) * 2;
            for (code, text) in cmap.unicode_mappings() {
                println!("<{code:0digits$x}> {text:?}");
            }
        }
        Command::Normalize {
            input,
            output,
            code_width,
        } => {
            let cmap = load(&input)?;
            let mut builder = EncodeOptions::builder().name(cmap.name());
            if let Some(info) = cmap.system_info() {
                builder = builder.system_info(info.clone());
            }
            if let Some(width) = code_width {
                builder = builder.code_width(width);
            }
            let bytes = cmap.to_bytes_with(&builder.build());
            match output {
                Some(path) => {
                    info!("Save {}", path.display());
                    fs::write(path, bytes)?;
                }
                None => print!("{}", String::from_utf8_lossy(&bytes)),
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
