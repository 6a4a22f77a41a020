use crate::config::Config;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub error: Color,
    pub success: Color,
    pub waiting: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            border: Color::Cyan,
            error: Color::Red,
            success: Color::Green,
            waiting: Color::Yellow,
            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            foreground: Color::White,
            border: Color::Cyan,
            error: Color::Red,
            success: Color::Green,
            waiting: Color::Yellow,
            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            border: Color::Blue,
            error: Color::Red,
            success: Color::Green,
            waiting: Color::Magenta,
            status_bar_bg: Color::LightBlue,
            status_bar_fg: Color::Black,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match config.theme.as_str() {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => Self::default_theme(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_falls_back_to_default() {
        let config = Config {
            theme: "solarized".to_string(),
            ..Config::default()
        };
        assert_eq!(Theme::from_config(&config).background, Color::Reset);
    }

    #[test]
    fn test_from_config_light() {
        let config = Config {
            theme: "light".to_string(),
            ..Config::default()
        };
        assert_eq!(Theme::from_config(&config).foreground, Color::Black);
    }
}
