use serde::{Deserialize, Serialize};

/// Font families offered by the settings overlay
pub const FONT_FAMILIES: [&str; 12] = [
    "TkDefaultFont",
    "Arial",
    "Helvetica",
    "Times New Roman",
    "Courier New",
    "Comic Sans MS",
    "Verdana",
    "Georgia",
    "Calibri",
    "Tahoma",
    "Trebuchet MS",
    "Lucida Console",
];

pub const MIN_FONT_SIZE: u32 = 8;
pub const MAX_FONT_SIZE: u32 = 24;

/// Cosmetic settings (written to settings.json).
///
/// Every field has a default, so a partial file is merged onto the
/// defaults and unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub font_family: String,
    pub font_size: u32,
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            font_family: "TkDefaultFont".to_string(),
            font_size: 10,
            dark_mode: false,
        }
    }
}

impl Settings {
    /// Index of the current font family in `FONT_FAMILIES`, or 0 if it is
    /// not one of the offered families.
    pub fn font_index(&self) -> usize {
        FONT_FAMILIES
            .iter()
            .position(|f| *f == self.font_family)
            .unwrap_or(0)
    }

    /// Set the font size, clamped to the offered range
    pub fn set_font_size(&mut self, size: u32) {
        self.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_merges_onto_defaults() {
        let s: Settings = serde_json::from_str(r#"{"dark_mode":true}"#).unwrap();
        assert!(s.dark_mode);
        assert_eq!(s.font_family, "TkDefaultFont");
        assert_eq!(s.font_size, 10);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let s: Settings =
            serde_json::from_str(r#"{"font_size":14,"window":"500x450"}"#).unwrap();
        assert_eq!(s.font_size, 14);
    }

    #[test]
    fn font_index_falls_back_to_first() {
        let mut s = Settings::default();
        assert_eq!(s.font_index(), 0);
        s.font_family = "Georgia".into();
        assert_eq!(s.font_index(), 7);
        s.font_family = "Papyrus".into();
        assert_eq!(s.font_index(), 0);
    }

    #[test]
    fn font_size_is_clamped() {
        let mut s = Settings::default();
        s.set_font_size(3);
        assert_eq!(s.font_size, MIN_FONT_SIZE);
        s.set_font_size(99);
        assert_eq!(s.font_size, MAX_FONT_SIZE);
        s.set_font_size(12);
        assert_eq!(s.font_size, 12);
    }
}
