// File: crates/demo/src/main.rs
// Summary: Demo plots sin/cos curves (or an x,y CSV), sets the axis view, simulates a resize and renders PNGs.

use anyhow::{Context, Result};
use clap::Parser;
use plot_core::{theme, types, Color, PlotCanvas, PlotStyle, Point, Size};
use plot_render_skia::{RenderOptions, SkiaRenderer};
use std::path::{Path, PathBuf};
use tracing::{info, warn, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "plotview-demo")]
#[command(about = "Renders a few 2D plots to PNG", long_about = None)]
struct Args {
    /// CSV file with x,y columns; plots sin/cos curves when absent
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Viewport width in pixels
    #[arg(long, default_value_t = types::WIDTH)]
    width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = types::HEIGHT)]
    height: u32,

    /// Axis view as lower-left and upper-right corners
    #[arg(long, num_args = 4, allow_negative_numbers = true, value_names = ["LLX", "LLY", "URX", "URY"])]
    view: Option<Vec<f64>>,

    /// Theme preset name (light, dark, solarized-dark, solarized-light, high-contrast-dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// Hide tick labels
    #[arg(long)]
    no_axis_text: bool,

    /// Output directory for PNGs
    #[arg(long, default_value = "target/out")]
    out: PathBuf,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log.as_deref())?;

    let renderer = SkiaRenderer::new();
    let size = Size::new(args.width, args.height);
    let mut canvas = PlotCanvas::new(renderer.new_scene(size)).context("creating canvas")?;

    let theme = theme::find(&args.theme);
    if !theme.name.eq_ignore_ascii_case(&args.theme) {
        warn!(requested = %args.theme, "unknown theme; using light");
    }
    let opts = RenderOptions { background: theme.background, ..Default::default() };
    canvas.set_theme(theme)?;
    canvas.set_axis_text_enabled(!args.no_axis_text)?;

    let default_view = match &args.csv {
        Some(path) => {
            let points = load_xy_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            if points.is_empty() {
                anyhow::bail!("no x,y rows loaded from {}", path.display());
            }
            info!(rows = points.len(), file = %path.display(), "loaded points");
            let id = canvas.new_plot(PlotStyle::default());
            canvas.plot(id).context("plot just registered")?.extend(points.iter().copied());
            padded_bounds(&points)
        }
        None => {
            add_trig_plots(&mut canvas)?;
            ((-5.0, -1.5), (5.0, 1.5))
        }
    };

    let (lower_left, upper_right) = match args.view.as_deref() {
        Some([llx, lly, urx, ury]) => ((*llx, *lly), (*urx, *ury)),
        _ => default_view,
    };
    canvas
        .set_axis_view(lower_left, upper_right)
        .with_context(|| format!("setting view {lower_left:?}-{upper_right:?}"))?;

    let first = out_name(&args.out, size);
    renderer.render_to_png(canvas.scene(), &opts, &first)?;
    println!("Wrote {}", first.display());

    // Host window shrinks to half size: the canvas redraws everything for the new scale.
    let half = Size::new((args.width / 2).max(1), (args.height / 2).max(1));
    canvas.resize(half)?;
    let second = out_name(&args.out, half);
    renderer.render_to_png(canvas.scene(), &opts, &second)?;
    println!("Wrote {}", second.display());

    Ok(())
}

fn init_logging(log: Option<&Path>) -> Result<()> {
    if let Some(log_path) = log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("opening log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }
    info!("starting plotview-demo");
    Ok(())
}

/// sin, cos, -sin and -cos sampled on [-5, 5).
fn add_trig_plots(canvas: &mut PlotCanvas) -> Result<()> {
    let xs: Vec<f64> = (0..200).map(|x| (x as f64 - 100.0) / 20.0).collect();
    let curves: [(fn(f64) -> f64, Color, f32); 4] = [
        (f64::sin, Color::BLACK, 2.0),
        (f64::cos, Color::RED, 1.0),
        (|x| -x.sin(), Color::BLUE, 4.0),
        (|x| -x.cos(), Color::GREEN, 3.0),
    ];
    for (f, color, line_weight) in curves {
        let id = canvas.new_plot(PlotStyle { color, line_weight, ..Default::default() });
        canvas.plot(id).context("plot just registered")?.extend(xs.iter().map(|&x| (x, f(x))));
    }
    Ok(())
}

/// Load x,y rows. Columns named `x`/`y` win; otherwise the first two columns are used.
fn load_xy_csv(path: &Path) -> Result<Vec<Point>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    let ix = headers.iter().position(|h| h == "x").unwrap_or(0);
    let iy = headers.iter().position(|h| h == "y").unwrap_or(1);

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok()).filter(|v| v.is_finite());
        match (parse(ix), parse(iy)) {
            (Some(x), Some(y)) => out.push((x, y)),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, "rows without numeric x,y were skipped");
    }
    Ok(out)
}

/// Data bounds grown by 5% per side; a flat extent is widened to one unit.
fn padded_bounds(points: &[Point]) -> (Point, Point) {
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for &(x, y) in points {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    let pad = |lo: f64, hi: f64| {
        let span = hi - lo;
        if span > 0.0 { (lo - span * 0.05, hi + span * 0.05) } else { (lo - 0.5, hi + 0.5) }
    };
    let (x0, x1) = pad(min_x, max_x);
    let (y0, y1) = pad(min_y, max_y);
    ((x0, y0), (x1, y1))
}

/// Produce output file name like target/out/plot_800x600.png
fn out_name(dir: &Path, size: Size) -> PathBuf {
    dir.join(format!("plot_{}x{}.png", size.width, size.height))
}
