use crate::utils::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ATTR_NAME: &'static str = "data-theme";

    pub(crate) const fn scheme(self) -> &'static str {
        use Theme::*;
        match self {
            Light => "light",
            Dark => "dark",
        }
    }

    pub(crate) const fn toggled(self) -> Self {
        use Theme::*;
        match self {
            Light => Dark,
            Dark => Light,
        }
    }

    /// Label of the button that switches away from this theme.
    pub(crate) const fn switch_icon(self) -> &'static str {
        use Theme::*;
        match self {
            Light => "🌙",
            Dark => "☀️",
        }
    }

    fn update_html(self) {
        let Some(html) = gloo::utils::document().document_element() else {
            log::error!("failed to set theme: no root element");
            return;
        };
        let scheme = self.scheme();
        log::debug!("theme-scheme: {}", scheme);
        if let Err(err) = html.set_attribute(Self::ATTR_NAME, scheme) {
            log::error!("failed to set theme: {:?}", err);
        }
    }

    /// Applies the stored preference and returns it.
    pub(crate) fn init() -> Self {
        let theme = Self::local_or_default();
        theme.update_html();
        theme
    }

    pub(crate) fn apply(self) {
        self.local_save();
        self.update_html();
    }
}

impl StorageKey for Theme {
    const KEY: &'static str = "sweeper:theme";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_theme() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn scheme_matches_stylesheet_selectors() {
        assert_eq!(Theme::default().scheme(), "light");
        assert_eq!(Theme::Dark.scheme(), "dark");
    }
}
