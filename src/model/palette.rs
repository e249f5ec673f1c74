use super::task::Priority;

/// Theme colors as hex strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: &'static str,
    pub fg: &'static str,
    pub entry_bg: &'static str,
    pub button_bg: &'static str,
}

pub const LIGHT: Palette = Palette {
    bg: "#f0f0f0",
    fg: "#000000",
    entry_bg: "#ffffff",
    button_bg: "#e0e0e0",
};

pub const DARK: Palette = Palette {
    bg: "#1e1e1e",
    fg: "#ffffff",
    entry_bg: "#2d2d2d",
    button_bg: "#3a3a3a",
};

impl Palette {
    pub fn for_mode(dark_mode: bool) -> Palette {
        if dark_mode { DARK } else { LIGHT }
    }
}

/// Row color for a priority. In light mode `Normal` rows use the ambient
/// background instead of a swatch of their own.
pub fn priority_color(priority: Priority, dark_mode: bool) -> &'static str {
    match (dark_mode, priority) {
        (false, Priority::Normal) => LIGHT.bg,
        (false, Priority::Medium) => "#fff8c4",
        (false, Priority::High) => "#ffe4e4",
        (true, Priority::Normal) => "#2b2b2b",
        (true, Priority::Medium) => "#4a4420",
        (true, Priority::High) => "#4a2a2a",
    }
}

/// Lookup by name; unknown names get the `Normal` color of the active theme.
pub fn priority_color_by_name(name: &str, dark_mode: bool) -> &'static str {
    priority_color(Priority::from_name_lossy(name), dark_mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_table() {
        assert_eq!(priority_color(Priority::High, false), "#ffe4e4");
        assert_eq!(priority_color(Priority::Medium, false), "#fff8c4");
        assert_eq!(priority_color(Priority::Normal, false), LIGHT.bg);
    }

    #[test]
    fn dark_table() {
        assert_eq!(priority_color(Priority::Normal, true), "#2b2b2b");
        assert_eq!(priority_color(Priority::Medium, true), "#4a4420");
        assert_eq!(priority_color(Priority::High, true), "#4a2a2a");
    }

    #[test]
    fn unknown_name_falls_back_to_normal() {
        assert_eq!(priority_color_by_name("high", false), "#ffe4e4");
        assert_eq!(priority_color_by_name("bogus", false), LIGHT.bg);
        assert_eq!(priority_color_by_name("bogus", true), "#2b2b2b");
    }

    #[test]
    fn palette_for_mode() {
        assert_eq!(Palette::for_mode(false), LIGHT);
        assert_eq!(Palette::for_mode(true).bg, "#1e1e1e");
    }
}
