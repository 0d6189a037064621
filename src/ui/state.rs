#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Developers,
    Tags,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Home, Screen::Developers, Screen::Tags];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Games",
            Screen::Developers => "Developers",
            Screen::Tags => "Tags",
        }
    }

    /// Window title, e.g. "GE | Developers"
    pub fn window_title(&self) -> String {
        match self {
            Screen::Home => "Gamers Era".to_string(),
            other => format!("GE | {}", other.title()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_screen_is_home() {
        assert_eq!(Screen::default(), Screen::Home);
    }

    #[test]
    fn test_window_titles() {
        assert_eq!(Screen::Home.window_title(), "Gamers Era");
        assert_eq!(Screen::Developers.window_title(), "GE | Developers");
        assert_eq!(Screen::Tags.window_title(), "GE | Tags");
    }
}
