// PolyPlot - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and validation
// 3. Logging initialisation (debug mode support)
// 4. Headless sample export, or eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can still use
// `crate::app::...`, `crate::ui::...` etc.
pub use polyplot::app;
pub use polyplot::core;
pub use polyplot::platform;
pub use polyplot::ui;
pub use polyplot::util;

use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use util::constants;
use util::error::PolyPlotError;

/// Edge length of the generated window icon.
const ICON_SIZE: u32 = 32;

/// Draw the window icon: a miniature of the plot itself.
fn app_icon() -> egui::IconData {
    let half = f64::from(ICON_SIZE / 2);
    let pixels_per_unit = 4.0;
    let mut rgba = Vec::with_capacity((ICON_SIZE * ICON_SIZE * 4) as usize);
    for py in 0..ICON_SIZE {
        for px in 0..ICON_SIZE {
            let x = (f64::from(px) - half) / pixels_per_unit;
            let y = (half - f64::from(py)) / pixels_per_unit;
            let colour = if (crate::core::polynomial::SEXTIC.eval(x) - y).abs() < 0.4 {
                ui::theme::CURVE
            } else if px == ICON_SIZE / 2 || py == ICON_SIZE / 2 {
                ui::theme::AXIS
            } else {
                ui::theme::BACKGROUND
            };
            rgba.extend_from_slice(&colour.to_array());
        }
    }
    egui::IconData {
        rgba,
        width: ICON_SIZE,
        height: ICON_SIZE,
    }
}

/// Output format for `--export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

/// PolyPlot - plot f(x) = (x^6 - 2x^5 - 26x^4 + 28x^3 + 145x^2 - 26x - 80) / 100.
///
/// Arrow keys pan, Space pauses, Escape quits.
#[derive(Parser, Debug)]
#[command(name = "PolyPlot", version, about)]
struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Initial window width (overrides config).
    #[arg(long, value_parser = clap::value_parser!(u32).range(
        i64::from(constants::MIN_WINDOW_EDGE)..=i64::from(constants::MAX_WINDOW_EDGE)
    ))]
    width: Option<u32>,

    /// Initial window height (overrides config).
    #[arg(long, value_parser = clap::value_parser!(u32).range(
        i64::from(constants::MIN_WINDOW_EDGE)..=i64::from(constants::MAX_WINDOW_EDGE)
    ))]
    height: Option<u32>,

    /// Print f(x) at integer x to stdout instead of opening a window.
    #[arg(short = 'e', long = "export", value_enum)]
    export: Option<ExportFormat>,

    /// First x for --export.
    #[arg(long, default_value_t = constants::DEFAULT_EXPORT_FROM, allow_hyphen_values = true)]
    from: i64,

    /// Last x for --export (inclusive).
    #[arg(long, default_value_t = constants::DEFAULT_EXPORT_TO, allow_hyphen_values = true)]
    to: i64,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Command-line values take precedence over config.toml.
fn apply_overrides(cli: &Cli, config: &mut platform::config::AppConfig) {
    if let Some(width) = cli.width {
        config.window_width = width;
    }
    if let Some(height) = cli.height {
        config.window_height = height;
    }
}

/// Write integer samples to `writer`.
fn export<W: Write>(
    format: ExportFormat,
    from: i64,
    to: i64,
    writer: W,
) -> util::error::Result<()> {
    let points =
        crate::core::export::sample_integers(&crate::core::polynomial::SEXTIC, from, to)?;
    let written = match format {
        ExportFormat::Csv => crate::core::export::export_csv(&points, writer)?,
        ExportFormat::Json => crate::core::export::export_json(&points, writer)?,
    };
    tracing::info!(points = written, ?format, "Export complete");
    Ok(())
}

/// Open the window and run the event loop until quit.
fn launch(config: &platform::config::AppConfig, debug: bool) -> util::error::Result<()> {
    let state = app::state::AppState::new(config, debug);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                constants::APP_NAME,
                constants::APP_VERSION
            ))
            .with_inner_size([config.window_width as f32, config.window_height as f32])
            .with_min_inner_size(constants::MIN_INNER_SIZE)
            .with_icon(app_icon()),
        ..Default::default()
    };

    tracing::info!(
        width = config.window_width,
        height = config.window_height,
        "Launching GUI"
    );

    eframe::run_native(
        constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::PolyPlotApp::new(state)))),
    )
    .map_err(PolyPlotError::from)
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging starts because it may set the level.
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_file());
    let (mut config, config_warnings) = platform::config::load_config(&config_path);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "PolyPlot starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    apply_overrides(&cli, &mut config);

    let result = match cli.export {
        Some(format) => export(format, cli.from, cli.to, std::io::stdout().lock()),
        None => launch(&config, cli.debug),
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "PolyPlot failed");
        eprintln!("Error: {e}");
    }
    let code = exit_code(&result);
    if code != 0 {
        std::process::exit(code);
    }
}

/// Process exit status: 0 on success, 1 on any failure.
fn exit_code(result: &util::error::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
