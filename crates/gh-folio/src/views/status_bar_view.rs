use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::view_models::StatusBarViewModel;

/// Widget wrapper for rendering the status bar from its view model
pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 || area.width < 10 {
            return;
        }

        let vm = self.0;

        // Fill the entire row with the line background color first
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(vm.line_bg);
        }

        // Key hints on the left
        let mut x = area.x + 1;
        for (key, description) in &vm.hints {
            let hint_width = (key.chars().count() + description.chars().count() + 3) as u16;
            if x + hint_width > area.x + area.width {
                break;
            }
            buf.set_string(x, area.y, *key, vm.key_style);
            x += key.chars().count() as u16 + 1;
            buf.set_string(x, area.y, *description, vm.description_style);
            x += description.chars().count() as u16 + 2;
        }

        // Status on the right
        let status_width = vm.status_text.chars().count() as u16;
        if status_width + 1 < area.width {
            let status_x = area.x + area.width - status_width - 1;
            if status_x > x {
                buf.set_string(status_x, area.y, &vm.status_text, vm.status_style);
            }
        }
    }
}
