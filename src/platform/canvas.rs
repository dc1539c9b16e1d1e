//! Browser implementations of the display, notifier and name prompt

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::display::{Display, Notifier, TextStyle};
use crate::highscores::NamePrompt;

/// Canvas 2D drawing surface
pub struct CanvasDisplay {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasDisplay {
    /// Wrap the canvas with the given element id
    pub fn from_element_id(id: &str) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let canvas = document
            .get_element_by_id(id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }
}

impl Display for CanvasDisplay {
    fn surface_size(&self) -> (f32, f32) {
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        let (w, h) = self.surface_size();
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: &str) {
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(x as f64, y as f64, r as f64, 0.0, std::f64::consts::TAU)
        {
            log::warn!("Canvas arc failed: {:?}", e);
        }
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle) {
        self.ctx.set_font(style.font);
        self.ctx.set_fill_style_str(style.color);
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("Canvas text failed: {:?}", e);
        }
    }
}

/// Announces through `window.alert`
pub struct AlertNotifier {
    window: Window,
}

impl AlertNotifier {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Notifier for AlertNotifier {
    fn announce(&mut self, message: &str) {
        log::info!("{}", message);
        if let Err(e) = self.window.alert_with_message(message) {
            log::warn!("Alert failed: {:?}", e);
        }
    }
}

/// Asks for a name through `window.prompt`
pub struct PromptName {
    window: Window,
}

impl PromptName {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl NamePrompt for PromptName {
    fn request_name(&mut self, _score: u32) -> Option<String> {
        self.window
            .prompt_with_message("New High Score! Enter your name:")
            .ok()
            .flatten()
    }
}
