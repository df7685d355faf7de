//! picross CLI - Turn a black-and-white image into a nonogram sheet

use clap::Parser;
use env_logger::Env;
use picross::preview::render_preview;
use picross::{open_image, Generator, Glyphs, GridSize, PicrossError, RenderOptions};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "picross", about = "Turn a black-and-white image into a picross puzzle")]
struct Args {
    /// Source image
    input: PathBuf,
    /// Where to write the puzzle sheet
    #[arg(short, long, default_value = "picross.png")]
    output: PathBuf,
    /// Luma cutoff; brighter pixels become white cells
    #[arg(short, long, default_value = "127")]
    threshold: u8,
    /// Pixels per grid cell
    #[arg(short, long, default_value = "30")]
    cell_size: u32,
    /// Pixels reserved for each clue number
    #[arg(short, long, default_value = "25")]
    pitch: u32,
    /// Extra canvas pixels on each axis for the clue bands
    #[arg(long, default_value = "200")]
    margin: u32,
    /// Grid offset from the top-left corner (default: 3/20 of canvas height)
    #[arg(long)]
    offset: Option<u32>,
    /// Shrink the source to WxH cells first, e.g. 20x15
    #[arg(long, value_parser = parse_cells)]
    cells: Option<GridSize>,
    /// Use Atkinson dithering instead of a hard threshold
    #[arg(short, long)]
    dither: bool,
    /// Invert the image
    #[arg(short, long)]
    invert: bool,
    /// TrueType font for the clue numbers (default: built-in bitmap digits)
    #[arg(short, long)]
    font: Option<PathBuf>,
    /// Pixel size for --font
    #[arg(long, default_value = "16")]
    font_size: f32,
    /// Also write the clues as JSON
    #[arg(long)]
    clues: Option<PathBuf>,
    /// Print the solved grid and clues to the terminal
    #[arg(long)]
    preview: bool,
    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_cells(s: &str) -> Result<GridSize, String> {
    s.parse().map_err(|e: PicrossError| e.to_string())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version still exit 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::init_from_env(Env::default().default_filter_or(log_level));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), PicrossError> {
    let glyphs = match &args.font {
        Some(path) => Glyphs::from_font_file(path, args.font_size)?,
        None => Glyphs::default(),
    };

    let options = RenderOptions::default()
        .with_cell_size(args.cell_size)
        .with_pitch(args.pitch)
        .with_margin(args.margin)
        .with_offset(args.offset);

    let generator = Generator::new()
        .with_threshold(args.threshold)
        .with_dither(args.dither)
        .with_invert(args.invert)
        .with_cells(args.cells)
        .with_options(options)
        .with_glyphs(glyphs);

    let image = open_image(&args.input)?;
    log::info!("loaded {} ({}x{})", args.input.display(), image.width(), image.height());

    let puzzle = generator.generate(&image)?;

    if args.preview {
        print!("{}", render_preview(&puzzle.binary, &puzzle.clues));
    }

    puzzle.save(&args.output)?;
    log::info!("wrote {}", args.output.display());

    if let Some(path) = &args.clues {
        puzzle.write_clues(path)?;
        log::info!("wrote clues to {}", path.display());
    }

    Ok(())
}
