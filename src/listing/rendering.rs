//! Text rendering for the listing.

use super::style::{NEXT_LABEL, PREV_LABEL};
use super::Model;
use crate::key::{self, KeyMap};
use crate::Component;

impl Model {
    /// Search box, header, visible rows, pager line and short help.
    ///
    /// While a delete waits for an answer, the prompt replaces the help line.
    pub fn view(&self) -> String {
        let mut sections = vec![self.search.view(), String::new()];
        sections.push(self.table.view_rows(self.selected_index()));
        sections.push(self.view_pager());
        sections.push(self.view_help());
        sections.join("\n")
    }

    /// `‹ Prev  Page 1 of 2  Next ›`, with disabled controls dimmed.
    pub fn view_pager(&self) -> String {
        let control = |label: &str, disabled: bool| {
            if disabled {
                self.styles.disabled_control.render(label)
            } else {
                self.styles.control.render(label)
            }
        };
        format!(
            "{}  {}  {}",
            control(PREV_LABEL, self.prev_disabled()),
            self.styles.indicator.render(&self.indicator()),
            control(NEXT_LABEL, self.next_disabled()),
        )
    }

    fn view_help(&self) -> String {
        if self.pending.is_some() {
            let prompt = format!("{} [y/N]", self.guard.prompt());
            return self.styles.status.render(&prompt);
        }
        let bindings = if self.search.focused() {
            vec![&self.keymap.blur_search]
        } else {
            let mut bindings = self.paginator.keymap.short_help();
            bindings.extend(self.keymap.short_help());
            bindings
        };
        self.styles.help.render(&key::short_help_line(&bindings))
    }
}
