use iced::widget::{button, column, container, horizontal_space, mouse_area, row, text, Space};
use iced::{Element, Length};

use crate::Message;

const SIDEBAR_WIDTH: f32 = 240.0;

/// The slide-in navigation menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sidebar {
    open: bool,
}

impl Sidebar {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Renders the menu, or nothing while it is closed.
    ///
    /// The menu comes with a transparent backdrop over the rest of the window;
    /// clicking it closes the menu.
    pub fn view(&self, is_loading: bool, has_image: bool) -> Option<Element<'static, Message>> {
        if !self.open {
            return None;
        }

        let header = row![
            text("Navigation").size(20),
            horizontal_space(),
            button("×").on_press(Message::CloseSidebar),
        ];

        let open_label = if is_loading { "Loading…" } else { "Open image…" };
        let menu = column![
            header,
            button(text(open_label))
                .width(Length::Fill)
                .on_press_maybe((!is_loading).then_some(Message::OpenFile)),
            button("Clear image")
                .width(Length::Fill)
                .on_press_maybe(has_image.then_some(Message::ClearImage)),
        ]
        .spacing(12)
        .padding(15);

        let panel = container(menu)
            .width(Length::Fixed(SIDEBAR_WIDTH))
            .height(Length::Fill)
            .style(container::rounded_box);
        let backdrop =
            mouse_area(Space::new(Length::Fill, Length::Fill)).on_press(Message::CloseSidebar);

        Some(row![panel, backdrop].into())
    }
}
