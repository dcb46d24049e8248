//! Theme initialization and toggle.
//!
//! Reads the stored preference from `localStorage` and applies the `.dark`
//! class to the `<html>` element. Dark is the default whenever nothing valid
//! is stored. Toggle writes back to `localStorage` and updates the class.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// localStorage key holding `"dark"` or `"light"`.
pub const STORAGE_KEY: &str = "theme";

/// Class toggled on the document element.
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Read the theme preference from localStorage, defaulting to dark.
pub fn read_preference() -> Theme {
    super::storage::load(STORAGE_KEY)
        .as_deref()
        .and_then(Theme::parse)
        .unwrap_or_default()
}

/// Apply or remove the `.dark` class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = el.class_list();
            let _ = match theme {
                Theme::Dark => class_list.add_1(DARK_CLASS),
                Theme::Light => class_list.remove_1(DARK_CLASS),
            };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme, apply it, and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    super::storage::save(STORAGE_KEY, next.as_str());
    next
}
