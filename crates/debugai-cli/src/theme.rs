use ratatui::style::Color;

#[derive(Clone)]
pub struct Theme {
    pub name: &'static str,
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub muted: Color,
    pub error: Color,
    pub user_color: Color,
    pub assistant_color: Color,
    pub code_fg: Color,
    pub border: Color,
}

impl Theme {
    /// Dark terminal look: GitHub-dark background, blue headings, green code.
    pub fn hacker() -> Self {
        Self {
            name: "hacker",
            bg: Color::Rgb(13, 17, 23),
            fg: Color::Rgb(248, 248, 242),
            accent: Color::Rgb(88, 166, 255),
            muted: Color::Rgb(139, 148, 158),
            error: Color::Rgb(248, 81, 73),
            user_color: Color::Rgb(88, 166, 255),
            assistant_color: Color::Rgb(248, 248, 242),
            code_fg: Color::Rgb(63, 185, 80),
            border: Color::Rgb(48, 54, 61),
        }
    }

    /// Uses the terminal's own palette.
    pub fn plain() -> Self {
        Self {
            name: "plain",
            bg: Color::Reset,
            fg: Color::Reset,
            accent: Color::Cyan,
            muted: Color::DarkGray,
            error: Color::Red,
            user_color: Color::Cyan,
            assistant_color: Color::Reset,
            code_fg: Color::Green,
            border: Color::DarkGray,
        }
    }

    pub fn by_name(name: &str) -> Self {
        match name {
            "plain" => Self::plain(),
            _ => Self::hacker(),
        }
    }

    pub fn all_names() -> &'static [&'static str] {
        &["hacker", "plain"]
    }
}
