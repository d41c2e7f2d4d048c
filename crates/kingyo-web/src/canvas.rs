use std::f64::consts::TAU;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use kingyo_engine::{DrawCommand, FrameData, Renderer, SpriteHandle, SpriteRegistry};

/// Canvas 2D backend. Owns one `<img>` per registry entry, in registry
/// order, so a `SpriteHandle` indexes straight into `images`.
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    images: Vec<HtmlImageElement>,
}

impl CanvasRenderer {
    /// Grab the 2D context and start loading every sprite in the registry.
    pub fn new(canvas: HtmlCanvasElement, sprites: &SpriteRegistry) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| JsValue::from_str("canvas: get_context threw"))?
            .ok_or_else(|| JsValue::from_str("canvas: missing 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("canvas: context is not 2d"))?;

        let mut images = Vec::with_capacity(sprites.len());
        for idx in 0..sprites.len() {
            let img = HtmlImageElement::new()?;
            if let Some(path) = sprites.path(SpriteHandle(idx as u32)) {
                img.set_src(path);
            }
            images.push(img);
        }

        Ok(Self { canvas, ctx, images })
    }

    /// Copy image load state into the registry. Broken images report
    /// `complete` with zero size and stay on the fallback shapes.
    pub fn sync_loaded(&self, sprites: &mut SpriteRegistry) {
        for (idx, img) in self.images.iter().enumerate() {
            let loaded = img.complete() && img.natural_width() > 0;
            sprites.set_loaded(SpriteHandle(idx as u32), loaded);
        }
    }

    fn draw_command(&self, cmd: &DrawCommand) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match cmd {
            DrawCommand::Clear { width, height } => {
                ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
            }
            DrawCommand::Sprite { sprite, pos, rotation, size } => {
                let Some(img) = self.images.get(sprite.0 as usize) else {
                    return Ok(());
                };
                let size = *size as f64;
                ctx.save();
                let drawn = ctx
                    .translate(pos.x as f64, pos.y as f64)
                    .and_then(|_| ctx.rotate(*rotation as f64))
                    .and_then(|_| {
                        ctx.draw_image_with_html_image_element_and_dw_and_dh(
                            img,
                            -size / 2.0,
                            -size / 2.0,
                            size,
                            size,
                        )
                    });
                ctx.restore();
                drawn?;
            }
            DrawCommand::FillCircle { pos, radius, color } => {
                ctx.set_fill_style_str(color);
                ctx.begin_path();
                ctx.arc(pos.x as f64, pos.y as f64, *radius as f64, 0.0, TAU)?;
                ctx.fill();
            }
            DrawCommand::StrokeCircle { pos, radius, color, line_width } => {
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(*line_width as f64);
                ctx.begin_path();
                ctx.arc(pos.x as f64, pos.y as f64, *radius as f64, 0.0, TAU)?;
                ctx.stroke();
            }
        }
        Ok(())
    }
}

impl Renderer for CanvasRenderer {
    fn backend(&self) -> &'static str {
        "canvas2d"
    }

    fn draw(&mut self, frame: &FrameData) {
        for cmd in frame.commands {
            if let Err(err) = self.draw_command(cmd) {
                log::error!("canvas: draw failed: {:?}", err);
            }
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}
