//! Colored diagnostics on stderr. Stdout only carries the rendered view.

use std::fmt::Display;

use colored::{
    Color,
    Colorize,
};

#[derive(Clone, Copy, strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
enum Message {
    Info,
    Success,
    Warning,
    Error,
}

impl Message {
    fn color(self) -> LogColor {
        match self {
            Self::Info => LogColor::Info,
            Self::Success => LogColor::Highlight,
            Self::Warning => LogColor::Warning,
            Self::Error => LogColor::Error,
        }
    }
}

fn format_line(msg_ty: Message, label: impl Display, msg: impl Display) -> String {
    format!(
        "[{}] {} {}",
        msg_ty.to_string().color(msg_ty.color()),
        label.to_string().color(LogColor::Label),
        msg.to_string().bright_black()
    )
}

fn log(msg_ty: Message, label: impl Display, msg: impl Display) {
    eprintln!("{}", format_line(msg_ty, label, msg));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::EnumIter)]
pub enum LogColor {
    Highlight,
    /// The label of a log line, e.g. "Fetching GIF list".
    Label,
    Error,
    Warning,
    Header,
    Info,
    Gray,
}

#[rustfmt::skip]
mod unformatted {
    use super::*;

    pub fn log_info(label: impl Display, msg: impl Display) { log(Message::Info, label, msg) }
    pub fn log_success(label: impl Display, msg: impl Display) { log(Message::Success, label, msg) }
    pub fn log_warning(label: impl Display, msg: impl Display) { log(Message::Warning, label, msg) }
    pub fn log_error(label: impl Display, msg: impl Display) { log(Message::Error, label, msg) }

    impl From<LogColor> for Color {
        fn from(value: LogColor) -> Color {
            match value {
                LogColor::Highlight  => Color::TrueColor { r: 255, g: 215, b: 87  },
                LogColor::Label      => Color::TrueColor { r: 40,  g: 100, b: 153 },
                LogColor::Error      => Color::TrueColor { r: 255, g: 0,   b: 45  },
                LogColor::Warning    => Color::TrueColor { r: 180, g: 105, b: 0   },
                LogColor::Header     => Color::TrueColor { r: 0,   g: 255, b: 0   },
                LogColor::Info       => Color::TrueColor { r: 0,   g: 95,  b: 255 },
                LogColor::Gray       => Color::TrueColor { r: 192, g: 192, b: 192 },
            }
        }
    }
}

pub use unformatted::*;

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn line_carries_tag_label_and_message() {
        let line = format_line(Message::Warning, "Storage account not found", "FFFF");
        assert!(line.contains("WARNING"));
        assert!(line.contains("Storage account not found"));
        assert!(line.contains("FFFF"));
    }

    #[test]
    fn colors_are_distinct() {
        let colors: Vec<Color> = LogColor::iter().map(Color::from).collect();
        for (i, a) in colors.iter().enumerate() {
            assert!(colors[i + 1..].iter().all(|b| a != b));
        }
    }
}
