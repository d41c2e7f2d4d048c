//! Renderer trait for drawing backends.
//!
//! The engine never touches a canvas. Each frame it produces a `DrawList`;
//! a backend (the browser Canvas 2D bridge, or a recording double in
//! tests) replays it.

use super::draw::DrawCommand;

/// Complete frame data for rendering.
pub struct FrameData<'a> {
    /// Draw commands in paint order.
    pub commands: &'a [DrawCommand],
    /// Play-field dimensions.
    pub width: f32,
    pub height: f32,
}

/// Renderer trait for 2D backends.
///
/// # Example Implementation
///
/// ```ignore
/// struct CanvasRenderer {
///     ctx: web_sys::CanvasRenderingContext2d,
///     images: Vec<web_sys::HtmlImageElement>,
/// }
///
/// impl Renderer for CanvasRenderer {
///     fn backend(&self) -> &'static str { "canvas2d" }
///
///     fn draw(&mut self, frame: &FrameData) {
///         for cmd in frame.commands {
///             // Issue Canvas 2D calls...
///         }
///     }
///
///     fn resize(&mut self, width: u32, height: u32) {
///         // Resize the backing canvas...
///     }
/// }
/// ```
pub trait Renderer {
    /// Backend identifier (e.g., "canvas2d").
    fn backend(&self) -> &'static str;

    /// Draw a complete frame.
    fn draw(&mut self, frame: &FrameData);

    /// Handle a surface resize.
    fn resize(&mut self, width: u32, height: u32);
}
