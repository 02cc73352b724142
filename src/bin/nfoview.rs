//! nfoview - print an NFO file to the terminal or export it as PNG.
//!
//! Usage:
//!   nfoview FILE.nfo                       # coloured terminal output
//!   nfoview FILE.nfo --export out.png      # raster export
//!   nfoview FILE.nfo --mode text --color none
//!   nfoview --list-themes

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use nfoview::layout::{DEFAULT_FONT_SIZE, DEFAULT_PADDING};
use nfoview::raster::font::FontGlyphs;
use nfoview::source::{FsSource, is_supported_extension, load_document};
use nfoview::theme::{DEFAULT_THEME_ID, THEMES, find_theme};
use nfoview::{
    AnsiWriter, CellLayout, ColorMode, DocumentView, ExportOptions, Glyphs, RenderMode,
    ViewOptions, Zoom, export_png, render_raster,
};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    /// Art glyphs in the art colour.
    Block,
    /// Everything in the text colour.
    Text,
}

impl From<ModeArg> for RenderMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Block => Self::Block,
            ModeArg::Text => Self::Text,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ColorArg {
    /// Pick from the terminal: truecolor on a TTY, none otherwise.
    Auto,
    Truecolor,
    #[value(name = "256")]
    Ansi256,
    #[value(name = "none")]
    Plain,
}

#[derive(Debug, Parser)]
#[command(name = "nfoview", version, about = "View NFO text art in the terminal or export it as PNG")]
struct Args {
    /// File to open (.nfo, .txt, .diz, .asc).
    #[arg(required_unless_present = "list_themes")]
    file: Option<PathBuf>,

    /// Colour theme id.
    #[arg(long, env = "NFOVIEW_THEME", default_value = DEFAULT_THEME_ID)]
    theme: String,

    /// Whether art glyphs get their own colour.
    #[arg(long, value_enum, default_value_t = ModeArg::Block)]
    mode: ModeArg,

    /// Write a PNG instead of printing. Pass a directory to use the
    /// default `<name>.png` file name.
    #[arg(long, value_name = "PNG")]
    export: Option<PathBuf>,

    /// TrueType/OpenType font for plain text in exports.
    #[arg(long, env = "NFOVIEW_FONT")]
    font: Option<PathBuf>,

    /// Export font size in pixels.
    #[arg(long, default_value_t = DEFAULT_FONT_SIZE, conflicts_with = "zoom")]
    font_size: f64,

    /// Export zoom factor (0.25 to 4.0); sets the font size to round(14 × zoom).
    #[arg(long)]
    zoom: Option<f64>,

    /// Export padding in pixels.
    #[arg(long, default_value_t = DEFAULT_PADDING)]
    padding: f64,

    /// Terminal colour output.
    #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
    color: ColorArg,

    /// List built-in themes and exit.
    #[arg(long)]
    list_themes: bool,

    /// More logging (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let stdout = io::stdout();
    let color_mode = match args.color {
        ColorArg::Auto if stdout.is_terminal() => ColorMode::TrueColor,
        ColorArg::Auto | ColorArg::Plain => ColorMode::NoColor,
        ColorArg::Truecolor => ColorMode::TrueColor,
        ColorArg::Ansi256 => ColorMode::Color256,
    };

    if args.list_themes {
        let mut writer = AnsiWriter::with_color_mode(stdout.lock(), color_mode);
        for theme in &THEMES {
            writer.write_theme_line(theme);
        }
        writer.flush()?;
        return Ok(());
    }

    let Some(path) = args.file.as_ref() else {
        bail!("no input file given");
    };
    if !is_supported_extension(path) {
        warn!(path = %path.display(), "unexpected file extension, decoding anyway");
    }

    let doc = load_document(&FsSource, path).with_context(|| format!("opening {}", path.display()))?;
    info!(
        file = doc.file_name(),
        encoding = doc.encoding().name(),
        width = doc.width(),
        height = doc.height(),
        "loaded"
    );

    let theme = find_theme(&args.theme).unwrap_or_else(|| {
        warn!(theme = %args.theme, fallback = DEFAULT_THEME_ID, "unknown theme");
        nfoview::theme_by_id(DEFAULT_THEME_ID)
    });
    let palette = theme.palette();
    let mode = RenderMode::from(args.mode);

    if let Some(target) = args.export.as_ref() {
        let layout = match args.zoom {
            Some(zoom) => CellLayout::new(Zoom::new(zoom).font_size(), args.padding),
            None => CellLayout::new(args.font_size, args.padding),
        };
        let mut glyphs = match args.font.as_ref() {
            Some(font) => Glyphs::with_font(FontGlyphs::load(font)?),
            None => FontGlyphs::discover().map_or_else(Glyphs::builtin, Glyphs::with_font),
        };
        if !glyphs.has_font() {
            warn!("no font found, plain text will not be drawn; pass --font");
        }

        let target = if target.is_dir() {
            target.join(doc.export_file_name())
        } else {
            target.clone()
        };
        let options = ExportOptions { layout, mode };
        let frame = render_raster(&doc, &palette, &options, &mut glyphs)
            .context("rendering export")?;
        export_png(&frame, &target).with_context(|| format!("writing {}", target.display()))?;
        info!(
            path = %target.display(),
            width = frame.surface().width(),
            height = frame.surface().height(),
            "exported"
        );
        return Ok(());
    }

    debug!(?color_mode, ?mode, theme = theme.id(), "printing");

    let view = DocumentView::new(&doc, palette, ViewOptions { mode });
    let mut writer = AnsiWriter::with_color_mode(stdout.lock(), color_mode);
    writer.write_view(&view);
    writer.flush()?;
    Ok(())
}
