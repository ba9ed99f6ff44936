//! Canvas 2D surface for the browser build
//!
//! Draws sprites when they have loaded and solid rectangles until then.
//! The backing store is scaled by the device pixel ratio so drawing stays in
//! logical pixels but renders sharp on high-DPI screens.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::RenderSurface;
use crate::sim::{ObstacleKind, Rect};

const BIRD_SPRITE: &str = "./flappybird.png";
const TOP_PIPE_SPRITE: &str = "./toppipe.png";
const BOTTOM_PIPE_SPRITE: &str = "./bottompipe.png";

const BIRD_FALLBACK: &str = "#f5c842";
const PIPE_FALLBACK: &str = "#4a9a28";

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    /// Logical size in pixels
    width: f32,
    height: f32,
    bird: HtmlImageElement,
    top_pipe: HtmlImageElement,
    bottom_pipe: HtmlImageElement,
}

impl CanvasSurface {
    /// Bind to a canvas with the given logical size
    pub fn new(canvas: &HtmlCanvasElement, width: f32, height: f32) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let surface = Self {
            ctx,
            width,
            height,
            bird: load_image(BIRD_SPRITE)?,
            top_pipe: load_image(TOP_PIPE_SPRITE)?,
            bottom_pipe: load_image(BOTTOM_PIPE_SPRITE)?,
        };
        surface.scale_for_device(canvas)?;
        Ok(surface)
    }

    /// Size the backing store to the device pixel ratio, CSS size stays logical
    fn scale_for_device(&self, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
        let dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0)
            .max(1.0);

        canvas.set_width((self.width as f64 * dpr) as u32);
        canvas.set_height((self.height as f64 * dpr) as u32);

        let style = canvas.style();
        style.set_property("width", &format!("{}px", self.width))?;
        style.set_property("height", &format!("{}px", self.height))?;

        self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
        log::info!("Canvas scaled for device pixel ratio {}", dpr);
        Ok(())
    }

    fn draw_sprite(&self, image: &HtmlImageElement, rect: Rect, fallback: &str) {
        let (x, y, w, h) = (
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );

        if image.complete() && image.natural_width() > 0 {
            if self
                .ctx
                .draw_image_with_html_image_element_and_dw_and_dh(image, x, y, w, h)
                .is_ok()
            {
                return;
            }
        }
        self.ctx.set_fill_style_str(fallback);
        self.ctx.fill_rect(x, y, w, h);
    }
}

fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;
    image.set_src(src);
    Ok(image)
}

impl RenderSurface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn draw_obstacle(&mut self, rect: Rect, kind: ObstacleKind) {
        let image = match kind {
            ObstacleKind::Upper => &self.top_pipe,
            ObstacleKind::Lower => &self.bottom_pipe,
        };
        self.draw_sprite(image, rect, PIPE_FALLBACK);
    }

    fn draw_bird(&mut self, rect: Rect) {
        self.draw_sprite(&self.bird, rect, BIRD_FALLBACK);
    }

    fn draw_game_over(&mut self) {
        self.ctx.set_fill_style_str("white");
        self.ctx.set_font("45px sans-serif");
        let _ = self
            .ctx
            .fill_text("GAME OVER", 50.0, (self.height / 2.0 - 20.0) as f64);
    }
}
