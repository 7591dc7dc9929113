use inksac::prelude::*;

/// Terminal styling for the prompt, the command word and shell messages.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl SyntaxHighlighter {
    pub fn new(enabled: bool) -> Self {
        let color_support = if enabled {
            check_color_support().unwrap_or(ColorSupport::NoColor)
        } else {
            ColorSupport::NoColor
        };
        Self { color_support }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return text.to_string();
        }
        text.style(style).to_string()
    }

    pub fn highlight_command(&self, input: &str) -> String {
        let trimmed = input.trim_start();
        let Some(word) = trimmed.split_whitespace().next() else {
            return input.to_string();
        };

        let lead = input.len() - trimmed.len();
        let style = Style::builder().foreground(Color::Cyan).bold().build();
        format!(
            "{}{}{}",
            &input[..lead],
            self.paint(word, style),
            &trimmed[word.len()..]
        )
    }

    pub fn highlight_prompt(&self, prompt: &str) -> String {
        let style = Style::builder().foreground(Color::Blue).bold().build();
        self.paint(prompt, style)
    }

    pub fn highlight_error(&self, error: &str) -> String {
        let style = Style::builder().foreground(Color::Red).bold().build();
        self.paint(error, style)
    }

    pub fn highlight_notice(&self, message: &str) -> String {
        let style = Style::builder().foreground(Color::Green).build();
        self.paint(message, style)
    }
}
