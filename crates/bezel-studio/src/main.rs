//! bezel studio: loads a style document and renders every item state into
//! a draw list, logging what would be drawn.

mod config;
mod preview;

use anyhow::{Context, Result};
use clap::Parser;

use bezel_engine::coords::{Vec2, Viewport};
use bezel_engine::logging::{init_logging, LoggingConfig};
use bezel_engine::persist;
use bezel_engine::render::tessellate;
use bezel_engine::scene::DrawList;
use bezel_engine::style::{ItemState, Theme};

use config::StudioConfig;

/// Chord tolerance for arc flattening, in surface units.
const TOLERANCE: f32 = 0.25;

fn main() -> Result<()> {
    let config = StudioConfig::parse();
    init_logging(LoggingConfig { env_filter: config.filter.clone(), ..LoggingConfig::default() });

    let theme = load_theme(&config)?;
    if config.print {
        print!("{}", persist::to_string(&theme));
    }

    let cell = Vec2::new(config.width, config.height);
    let mut list = DrawList::new();
    preview::render_states(&mut list, &theme, cell).context("rendering item states")?;

    let last = preview::cell_rect(ItemState::ALL.len() - 1, cell);
    let viewport = Viewport::new(last.right() + last.x(), last.bottom() + last.x());
    let mesh = tessellate(&mut list, viewport, TOLERANCE);

    log::info!(
        "{} commands -> {} lines, {} triangles ({} bytes), {} text runs for the host",
        list.len(),
        mesh.lines.len() / 2,
        mesh.triangles.len() / 3,
        mesh.line_bytes().len() + mesh.triangle_bytes().len(),
        mesh.skipped_text
    );
    Ok(())
}

/// Reads `Theme`, or a bare `AppearanceBorder` / `AppearanceItem` document.
fn load_theme(config: &StudioConfig) -> Result<Theme> {
    let src = std::fs::read_to_string(&config.file)
        .with_context(|| format!("reading {}", config.file.display()))?;
    let doc = bezel_doc::parse_str(&src).with_context(|| format!("parsing {}", config.file.display()))?;

    let mut theme = Theme::default();
    match doc.root.name.as_str() {
        "AppearanceBorder" => theme.border = persist::from_document(&doc)?,
        "AppearanceItem" => theme.item = persist::from_document(&doc)?,
        _ => theme = persist::from_document(&doc)?,
    }

    log::info!(
        "loaded {} ({}customized)",
        config.file.display(),
        if theme.default_changed() { "" } else { "not " }
    );
    Ok(theme)
}
