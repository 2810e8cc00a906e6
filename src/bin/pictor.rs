use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "pictor", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the kind and size of an image file.
    Info(InfoArgs),
    /// Decode an image file and write it back out as PNG.
    Convert(ConvertArgs),
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Input image.
    path: PathBuf,

    /// Print JSON instead of plain text.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// PNG compression effort (defaults to $PICTOR_PNG_COMPRESSION, then `default`).
    #[arg(long, value_enum)]
    compression: Option<CompressionChoice>,

    /// Background color as `RRGGBB` or `RRGGBBAA` hex.
    #[arg(long)]
    background: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CompressionChoice {
    Fast,
    Default,
    Best,
}

impl From<CompressionChoice> for pictor::PngCompression {
    fn from(c: CompressionChoice) -> Self {
        match c {
            CompressionChoice::Fast => Self::Fast,
            CompressionChoice::Default => Self::Default,
            CompressionChoice::Best => Self::Best,
        }
    }
}

#[derive(serde::Serialize)]
struct PictureInfo {
    path: String,
    kind: pictor::PictureKind,
    width: f64,
    height: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Convert(args) => cmd_convert(args),
    }
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let picture = pictor::Picture::load(&args.path)?;
    let size = picture.size();
    let info = PictureInfo {
        path: args.path.display().to_string(),
        kind: picture.kind(),
        width: size.width,
        height: size.height,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!(
            "{}: {:?} {}x{}",
            info.path, info.kind, info.width, info.height
        );
    }
    Ok(())
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let picture = pictor::Picture::load(&args.in_path)?;

    let mut opts = pictor::ExportOpts::from_env();
    if let Some(c) = args.compression {
        opts = opts.with_compression(c.into());
    }
    if let Some(hex) = args.background.as_deref() {
        opts = opts.with_background(Some(parse_hex_color(hex)?));
    }

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    picture
        .export_png_with(&args.out, &opts)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn parse_hex_color(s: &str) -> anyhow::Result<pictor::Rgba8> {
    let s = s.trim_start_matches('#');
    if s.len() != 6 && s.len() != 8 {
        anyhow::bail!("expected RRGGBB or RRGGBBAA, got '{s}'");
    }
    let byte = |i: usize| -> anyhow::Result<u8> {
        let part = s
            .get(i..i + 2)
            .with_context(|| format!("invalid hex color '{s}'"))?;
        u8::from_str_radix(part, 16).with_context(|| format!("invalid hex color '{s}'"))
    };
    let a = if s.len() == 8 { byte(6)? } else { 255 };
    Ok(pictor::Rgba8::new(byte(0)?, byte(2)?, byte(4)?, a))
}
