//! Terminal styling for collection outcomes.
//!
//! Core returns plain text; colors are applied only here.

use crossterm::style::{Color, Stylize};
use figshelf_core::{FigureView, Outcome, ValueTier};

pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, Color::Red)
    }

    pub fn outcome(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Created { .. } | Outcome::Updated { .. } | Outcome::Removed { .. } => {
                self.paint(&outcome.message(), Color::Green)
            }
            Outcome::Collision { .. }
            | Outcome::NotFound { .. }
            | Outcome::NoSuchCollection { .. } => self.paint(&outcome.message(), Color::Red),
            Outcome::EmptyCollection { .. } => self.paint(&outcome.message(), Color::Yellow),
            Outcome::Found(view) => self.view(view),
            Outcome::Listing { user, figures } => {
                let mut text = self.paint(&format!("Colección de figuras de {user}:"), Color::Blue);
                for view in figures {
                    text.push_str("\n\n");
                    text.push_str(&self.view(view));
                }
                text
            }
        }
    }

    fn view(&self, view: &FigureView) -> String {
        let mut lines = Vec::with_capacity(view.fields.len() + 1);
        for (index, (label, value)) in view.fields.iter().enumerate() {
            let line = format!("{label}: {value}");
            let color = if index == 0 { Color::Blue } else { Color::White };
            lines.push(self.paint(&line, color));
        }
        lines.push(self.paint(&view.market_value_line(), tier_color(view.tier)));
        lines.join("\n")
    }
}

fn tier_color(tier: ValueTier) -> Color {
    match tier {
        ValueTier::Top => Color::Green,
        ValueTier::MidHigh => Color::Yellow,
        ValueTier::MidLow => Color::Blue,
        ValueTier::Bottom => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::Painter;
    use figshelf_core::{Figure, FigureGenre, FigureKind, FigureView, Outcome};

    #[test]
    fn plain_painter_matches_core_message() {
        let figure = Figure::new(
            "1",
            "Sonic",
            "",
            FigureKind::Pop,
            FigureGenre::VideoGames,
            "Sega",
            1,
            true,
            "",
            210.0,
        )
        .unwrap();
        let outcome = Outcome::Listing {
            user: "alice".to_string(),
            figures: vec![FigureView::from_figure(&figure)],
        };

        assert_eq!(Painter::new(false).outcome(&outcome), outcome.message());
    }

    #[test]
    fn color_painter_keeps_message_text() {
        let outcome = Outcome::EmptyCollection {
            user: "bob".to_string(),
        };
        let text = Painter::new(true).outcome(&outcome);
        assert!(text.contains("La colección de bob está vacía."));
    }
}
