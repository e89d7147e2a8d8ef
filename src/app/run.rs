//! Entry points for running the overlap tool as a native window or in a browser.

use eframe::egui;

#[cfg(not(target_arch = "wasm32"))]
use crate::config::OverlapConfig;

#[cfg(not(target_arch = "wasm32"))]
use super::OverlapApp;

/// Launch the application in a native window. Blocks until the window is closed.
#[cfg(not(target_arch = "wasm32"))]
pub fn run_overlap(mut cfg: OverlapConfig) -> eframe::Result<()> {
    let app = OverlapApp::new(&cfg);

    let title = cfg.title.clone();
    let mut opts = cfg.native_options.take().unwrap_or_default();

    // Try to set application icon from icon.svg if available.
    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }

    // Fit the surface plus the side and bottom panels by default.
    if opts.viewport.inner_size.is_none() {
        let w = cfg.scene.width + 300.0;
        let h = cfg.scene.height + 340.0;
        opts.viewport = opts.viewport.clone().with_inner_size(egui::vec2(w, h));
    }

    tracing::info!(title = %title, "starting native window");
    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            install_fonts(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
}

/// Phosphor icon font used by the panel toggles.
pub(crate) fn install_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
}

/// Attempt to load the project's `icon.svg` as an [`egui::IconData`].
///
/// Returns `None` if the file does not exist or cannot be parsed/rendered.
#[cfg(not(target_arch = "wasm32"))]
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;
    render_icon(&data)
}

/// Rasterize SVG bytes to RGBA using usvg + resvg.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn render_icon(svg: &[u8]) -> Option<egui::IconData> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(svg, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    let rgba = pixmap.take();
    Some(egui::IconData {
        rgba,
        width: size.width(),
        height: size.height(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_icon_renders() {
        let data = include_bytes!("../../icon.svg");
        let icon = render_icon(data).expect("icon.svg should rasterize");
        assert_eq!(icon.rgba.len(), (icon.width * icon.height * 4) as usize);
    }

    #[test]
    fn garbage_is_not_an_icon() {
        assert!(render_icon(b"not svg").is_none());
    }
}
