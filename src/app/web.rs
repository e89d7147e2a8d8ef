//! Browser entry point.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::OverlapConfig;

use super::OverlapApp;

/// Id of the `<canvas>` element the app mounts on.
pub const CANVAS_ID: &str = "ci-overlap-canvas";

#[wasm_bindgen(start)]
pub fn wasm_main() {
    // Better panic messages in the browser console
    console_error_panic_hook::set_once();

    let Some(canvas) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CANVAS_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
    else {
        web_sys::console::error_1(&format!("no <canvas id=\"{CANVAS_ID}\"> on the page").into());
        return;
    };

    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| {
                    super::run::install_fonts(&cc.egui_ctx);
                    Ok(Box::new(OverlapApp::new(&OverlapConfig::default())))
                }),
            )
            .await;
        if let Err(e) = started {
            web_sys::console::error_1(&e);
        }
    });
}
