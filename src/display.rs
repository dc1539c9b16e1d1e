//! Drawing surface and player notifications
//!
//! The simulation never touches a canvas or a dialog directly. It draws
//! through [`Display`] and talks to the player through [`Notifier`]; the
//! browser build backs these with canvas 2D and `alert`, headless runs with
//! [`FrameRecorder`] and [`LogNotifier`].

use crate::highscores::HighScoreRecord;
use crate::sim::RoundEnd;

/// Rod fill color
pub const PADDLE_COLOR: &str = "#333";
/// Ball fill color
pub const BALL_COLOR: &str = "#e74c3c";

/// Font and color for text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// CSS font shorthand
    pub font: &'static str,
    pub color: &'static str,
}

/// Style of the score readout
pub const SCORE_STYLE: TextStyle = TextStyle {
    font: "20px Arial",
    color: "#333",
};

/// A 2D drawing surface
pub trait Display {
    /// Width and height of the surface
    fn surface_size(&self) -> (f32, f32);
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle);
}

/// One-way messages to the player
pub trait Notifier {
    fn announce(&mut self, message: &str);
}

/// Startup greeting for the stored best score
pub fn greeting(record: Option<&HighScoreRecord>) -> String {
    match record {
        Some(record) => format!("Highest Score: {} by {}", record.score, record.name),
        None => "This is your first time".to_string(),
    }
}

/// Round-end announcement
pub fn round_over(end: &RoundEnd) -> String {
    format!(
        "Round Over! {} rod wins with score: {}",
        end.winner.as_str(),
        end.score
    )
}

/// Score readout drawn every frame
pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

/// Recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: String,
    },
    Circle {
        x: f32,
        y: f32,
        r: f32,
        color: String,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        style: TextStyle,
    },
}

/// Headless display that keeps the draw calls of the latest frame
#[derive(Debug, Clone)]
pub struct FrameRecorder {
    width: f32,
    height: f32,
    pub commands: Vec<DrawCommand>,
}

impl FrameRecorder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }
}

impl Display for FrameRecorder {
    fn surface_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: &str) {
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            r,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            style,
        });
    }
}

/// Notifier that writes announcements to the log and remembers them
#[derive(Debug, Clone, Default)]
pub struct LogNotifier {
    pub messages: Vec<String>,
}

impl Notifier for LogNotifier {
    fn announce(&mut self, message: &str) {
        log::info!("{}", message);
        self.messages.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Side;

    #[test]
    fn test_messages() {
        assert_eq!(greeting(None), "This is your first time");
        let record = HighScoreRecord {
            name: "Ada".into(),
            score: 7,
        };
        assert_eq!(greeting(Some(&record)), "Highest Score: 7 by Ada");

        let end = RoundEnd {
            winner: Side::Bottom,
            loser: Side::Top,
            score: 5,
        };
        assert_eq!(round_over(&end), "Round Over! Bottom rod wins with score: 5");
        assert_eq!(score_text(12), "Score: 12");
    }

    #[test]
    fn test_recorder_clear_starts_new_frame() {
        let mut display = FrameRecorder::new(400.0, 600.0);
        display.fill_circle(1.0, 2.0, 3.0, BALL_COLOR);
        display.clear();
        assert_eq!(display.commands, vec![DrawCommand::Clear]);
        assert_eq!(display.surface_size(), (400.0, 600.0));
    }
}
