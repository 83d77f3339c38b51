use iced::{
    widget::{button, column, container, row, text},
    Element, Length,
};
use tv_core::{FilterRegistry, MenuEntry, Message};
use tv_theme::Theme;

/// The open item context menu, one button per entry plus "Cancel".
pub fn context_menu<'a>(entries: &[MenuEntry], theme: &Theme) -> Element<'a, Message> {
    let mut menu = column![].spacing(2);
    for (idx, entry) in entries.iter().enumerate() {
        menu = menu.push(
            button(text(entry.label.clone()).size(theme.font_size))
                .width(Length::Fill)
                .style(button::text)
                .on_press(Message::ContextMenuActivated(idx)),
        );
    }
    menu = menu.push(
        button(text("Cancel").size(theme.font_size))
            .width(Length::Fill)
            .style(button::text)
            .on_press(Message::ContextMenuDismissed),
    );

    let background = theme.background.to_iced();
    let border = theme.accent.to_iced();
    container(menu)
        .width(Length::Fixed(180.0))
        .padding(6)
        .style(move |_: &iced::Theme| container::Style {
            background: Some(iced::Background::Color(background)),
            border: iced::Border {
                color: border,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        })
        .into()
}

/// "All" followed by one toggle per registered filter.
pub fn filter_bar<'a>(
    registry: &FilterRegistry,
    active: Option<&str>,
    theme: &Theme,
) -> Element<'a, Message> {
    let entry = |label: String, key: Option<String>, is_active: bool| {
        let color = if is_active { theme.accent } else { theme.foreground.with_alpha(0.6) };
        button(text(label).size(theme.font_size).color(color.to_iced()))
            .style(button::text)
            .on_press(Message::FilterSelected(key))
    };

    let mut bar = row![entry("All".to_string(), None, active.is_none())].spacing(12);
    for filter in registry.iter() {
        let is_active = active == Some(filter.key());
        bar = bar.push(entry(
            filter.label().to_string(),
            Some(filter.key().to_string()),
            is_active,
        ));
    }
    bar.into()
}
