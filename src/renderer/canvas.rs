//! Canvas 2D presenter (WASM only)

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::{Frame, Hud, Presenter, frame_quads};

/// Draws onto a `<canvas>` and writes the HUD into DOM text elements
pub struct CanvasPresenter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    document: Document,
}

impl CanvasPresenter {
    pub fn new(canvas: HtmlCanvasElement, document: Document) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas,
            ctx,
            document,
        })
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_overlay_visible(&self, visible: bool) {
        if let Some(el) = self.document.get_element_by_id("game-over") {
            let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
        }
    }
}

impl Presenter for CanvasPresenter {
    fn render(&mut self, frame: &Frame<'_>) {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
        for quad in frame_quads(frame) {
            let corner = quad.top_left();
            self.ctx.set_fill_style_str(&quad.color.to_css());
            self.ctx.fill_rect(
                corner.x as f64,
                corner.y as f64,
                quad.size as f64,
                quad.size as f64,
            );
        }
    }

    fn show_hud(&mut self, hud: &Hud) {
        self.set_text("score", &hud.score_text());
        self.set_text("best", &hud.best_text());
        self.set_text("time", &hud.time_text());
        self.set_overlay_visible(hud.game_over);
    }

    fn game_over(&mut self, message: &str) {
        self.set_text("game-over-message", message);
        self.set_overlay_visible(true);
    }
}
