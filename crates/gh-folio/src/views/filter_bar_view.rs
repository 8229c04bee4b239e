use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::view_models::FilterBarViewModel;

/// Widget wrapper for rendering the filter bar from its view model
pub struct FilterBarWidget<'a>(pub &'a FilterBarViewModel);

impl Widget for FilterBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 || area.width < 10 {
            return;
        }

        let vm = self.0;

        // Fill the entire row with the line background color first
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(vm.line_bg);
        }

        let mut x = area.x;

        // Render each toggle with a one-cell gap
        for toggle in &vm.toggles {
            if x + toggle.width > area.x + area.width {
                break; // Don't overflow
            }

            buf.set_string(x, area.y, &toggle.text, toggle.style);
            x += toggle.width + 1;
        }

        // Clear-all hint at the end, while any filter is active
        if let Some(hint) = &vm.hint {
            let width = hint.chars().count() as u16;
            if x + width <= area.x + area.width {
                buf.set_string(x + 1, area.y, hint, vm.hint_style);
            }
        }
    }
}
