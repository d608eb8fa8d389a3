use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "pixelify", version, about = "Turn an image into an N×N pixel-art HTML grid")]
struct Cli {
    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the self-contained HTML document.
    Html(HtmlArgs),
    /// Print the sampled colors as a JSON array (row-major).
    Colors(CommonArgs),
    /// Render the grid as a PNG.
    Preview(PreviewArgs),
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Input image (any format the `image` crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Cells per side (2..=128). Overrides the config file.
    #[arg(long, short = 'n')]
    dimension: Option<u32>,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Resampling filter. Overrides the config file.
    #[arg(long, value_enum)]
    filter: Option<FilterChoice>,
}

#[derive(Args, Debug)]
struct HtmlArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Output HTML path.
    #[arg(long, default_value = pixelify::DEFAULT_DOCUMENT_FILE_NAME, conflicts_with = "stdout")]
    out: PathBuf,

    /// Write the document to stdout instead of a file.
    #[arg(long)]
    stdout: bool,

    /// Overwrite the output file if it already exists.
    #[arg(long)]
    overwrite: bool,

    /// Emit the historical byte format (duplicated column rule, one extra cell).
    #[arg(long)]
    legacy: bool,

    /// Print the SHA-256 of the document to stderr.
    #[arg(long)]
    digest: bool,
}

#[derive(Args, Debug)]
struct PreviewArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Edge of one cell in the preview, in pixels.
    #[arg(long, default_value_t = 8)]
    cell_px: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterChoice {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<FilterChoice> for pixelify::ResampleFilter {
    fn from(c: FilterChoice) -> Self {
        match c {
            FilterChoice::Nearest => Self::Nearest,
            FilterChoice::Triangle => Self::Triangle,
            FilterChoice::CatmullRom => Self::CatmullRom,
            FilterChoice::Gaussian => Self::Gaussian,
            FilterChoice::Lanczos3 => Self::Lanczos3,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Html(args) => cmd_html(args),
        Command::Colors(args) => cmd_colors(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &CommonArgs) -> anyhow::Result<pixelify::PixelifyConfig> {
    let mut cfg = match &args.config {
        Some(path) => pixelify::PixelifyConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => pixelify::PixelifyConfig::default(),
    };
    if let Some(n) = args.dimension {
        cfg.dimension = pixelify::GridDimension::new(n)?;
    }
    if let Some(filter) = args.filter {
        cfg.filter = filter.into();
    }
    cfg.validate()?;
    Ok(cfg)
}

fn open_session(
    args: &CommonArgs,
    cfg: pixelify::PixelifyConfig,
) -> anyhow::Result<pixelify::PixelifySession> {
    let image = pixelify::load_image(&args.in_path)?;
    let mut session = pixelify::PixelifySession::new(cfg)?;
    session.set_image(image);
    Ok(session)
}

fn cmd_html(args: HtmlArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(&args.common)?;
    if args.legacy {
        cfg.flavor = pixelify::DocumentFlavor::Legacy;
    }
    let mut session = open_session(&args.common, cfg)?;
    let document = session.document()?;

    if args.digest {
        eprintln!("sha256 {}", sha256_hex(document.as_bytes()));
    }

    if args.stdout {
        let mut sink = pixelify::WriterSink::new(std::io::stdout().lock());
        pixelify::DocumentSink::write_document(&mut sink, &document)?;
        return Ok(());
    }

    let mut sink = pixelify::FileSink::new(&args.out).overwrite(args.overwrite);
    pixelify::DocumentSink::write_document(&mut sink, &document)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_colors(args: CommonArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args)?;
    let mut session = open_session(&args, cfg)?;
    let grid = session.refresh()?;
    let json = serde_json::to_string(&grid.to_hex_strings()).context("serialize colors")?;
    println!("{json}");
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.common)?;
    let mut session = open_session(&args.common, cfg)?;
    let img = session.preview(args.cell_px)?;

    write_png(&args.out, &img)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn write_png(path: &Path, img: &image::RgbaImage) -> anyhow::Result<()> {
    pixelify::ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
