use tienda_i18n::{Language, resolve};

/// The five survey-information views.
///
/// The only transition is direct selection; there is no history and no
/// automatic movement. Switching tabs never performs I/O, so a change is
/// just an enum assignment followed by a redraw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Overview,
    Participants,
    Areas,
    Variables,
    Details,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Participants,
        Tab::Areas,
        Tab::Variables,
        Tab::Details,
    ];

    /// Localized tab title.
    #[must_use]
    pub fn title(self, language: Language) -> &'static str {
        let key = match self {
            Tab::Overview => "tab_overview",
            Tab::Participants => "tab_participants",
            Tab::Areas => "tab_areas",
            Tab::Variables => "tab_variables",
            Tab::Details => "tab_details",
        };
        resolve(language, key)
    }

    /// Tab bound to a number key, `'1'` through `'5'`.
    #[must_use]
    pub fn from_digit(digit: char) -> Option<Self> {
        let index = digit.to_digit(10)?.checked_sub(1)? as usize;
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&tab| tab == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_tab_is_overview() {
        assert_eq!(Tab::default(), Tab::Overview);
    }

    #[test]
    fn index_matches_position_in_all() {
        for (index, tab) in Tab::ALL.into_iter().enumerate() {
            assert_eq!(tab.index(), index);
        }
    }

    #[test]
    fn cycling_wraps_in_both_directions() {
        assert_eq!(Tab::Details.next(), Tab::Overview);
        assert_eq!(Tab::Overview.previous(), Tab::Details);
        let mut tab = Tab::Overview;
        for _ in 0..Tab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Overview);
    }

    #[test]
    fn digits_map_to_tabs_in_order() {
        assert_eq!(Tab::from_digit('1'), Some(Tab::Overview));
        assert_eq!(Tab::from_digit('3'), Some(Tab::Areas));
        assert_eq!(Tab::from_digit('5'), Some(Tab::Details));
        assert_eq!(Tab::from_digit('6'), None);
        assert_eq!(Tab::from_digit('0'), None);
        assert_eq!(Tab::from_digit('x'), None);
    }

    #[test]
    fn titles_localize() {
        assert_eq!(Tab::Overview.title(Language::En), "Overview");
        assert_eq!(Tab::Overview.title(Language::Es), "Resumen");
        assert_eq!(Tab::Areas.title(Language::Es), "Áreas");
    }
}
