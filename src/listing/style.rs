//! Styles for the listing's pager line and help.

use lipgloss_extras::lipgloss::AdaptiveColor;
use lipgloss_extras::prelude::*;

/// Label of the "previous" control.
pub const PREV_LABEL: &str = "‹ Prev";
/// Label of the "next" control.
pub const NEXT_LABEL: &str = "Next ›";

#[derive(Debug, Clone)]
pub struct ListingStyles {
    pub indicator: Style,
    pub control: Style,
    pub disabled_control: Style,
    pub help: Style,
    /// Delete prompt and host status messages.
    pub status: Style,
}

impl Default for ListingStyles {
    fn default() -> Self {
        Self {
            indicator: Style::new().foreground(AdaptiveColor {
                Light: "#1A1A1A",
                Dark: "#DDDDDD",
            }),
            control: Style::new().bold(true).foreground(AdaptiveColor {
                Light: "#874BFD",
                Dark: "#7D56F4",
            }),
            disabled_control: Style::new().faint(true).foreground(AdaptiveColor {
                Light: "#DDDADA",
                Dark: "#3C3C3C",
            }),
            help: Style::new().foreground(AdaptiveColor {
                Light: "#B2B2B2",
                Dark: "#4A4A4A",
            }),
            status: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#04B575",
            }),
        }
    }
}
