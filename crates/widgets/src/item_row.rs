use crate::thumbnail::Thumbnail;
use iced::{
    widget::{container, mouse_area, row, text},
    Alignment, Element, Length,
};
use tv_core::{ItemInfo, Message};
use tv_theme::Theme;

/// One line of the item list: thumbnail, name and a hidden marker.
///
/// Left click toggles selection; right click asks for the context menu.
#[derive(Debug, Clone)]
pub struct ItemRow {
    item: ItemInfo,
    thumbnail: Thumbnail,
}

impl ItemRow {
    pub fn new(item: ItemInfo, thumbnail: Thumbnail) -> Self {
        Self { item, thumbnail }
    }

    pub fn item(&self) -> &ItemInfo {
        &self.item
    }

    pub fn view<'a>(&self, theme: &Theme, selected: bool, hidden: bool) -> Element<'a, Message> {
        let name_color = if hidden {
            theme.foreground.with_alpha(0.45)
        } else {
            theme.foreground
        };

        let mut line = row![
            self.thumbnail.view(theme, hidden),
            text(self.item.name.clone()).size(theme.font_size).color(name_color.to_iced()),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        if hidden {
            line = line.push(
                text("hidden")
                    .size(theme.font_size * 0.8)
                    .color(theme.accent.to_iced()),
            );
        }

        let background = selected.then(|| theme.accent.with_alpha(0.2).to_iced());
        let body = container(line)
            .width(Length::Fill)
            .padding(4)
            .style(move |_: &iced::Theme| container::Style {
                background: background.map(iced::Background::Color),
                ..Default::default()
            });

        mouse_area(body)
            .on_press(Message::ItemSelected(self.item.id.clone()))
            .on_right_press(Message::ContextMenuRequested(self.item.id.clone()))
            .into()
    }
}
