use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Prepended to text whose style name is not in the theme, to catch template typos.
const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const QUOTE: &str = "quote";
    pub const AUTHOR: &str = "author";
    pub const FRAME: &str = "frame";
}

/// Named styles applied by the `style` template filter.
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Styles `text`, or returns it untouched when colors are off.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

pub static QUOTEZ_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::QUOTE, Style::new().italic())
        .add(names::AUTHOR, Style::new().cyan().bold())
        .add(names::FRAME, Style::new().dim())
});
