//! The `tv` window.
//!
//! Owns the iced application loop and wires the background tasks into it:
//! - config file watcher (live reload on change)
//! - periodic tick that drains work posted to the UI loop
//! - window close requests, which unload the extensions before exiting

pub mod context;
pub mod selection;

pub use context::{AppContext, HIDDEN_FILTER};
pub use selection::Selection;

use futures::channel::mpsc::Sender;
use iced::{
    widget::{column, container, row, scrollable, stack},
    Element, Length, Size, Subscription, Task,
};
use std::time::Duration;
use tracing::{debug, info, warn};
use tv_config::{default_path, load as load_config, ConfigWatcher};
use tv_core::{MenuEntry, Message, VisualState};
use tv_widgets::{context_menu, filter_bar, ChromeButton, ItemRow, Thumbnail};

/// How often posted UI work is drained.
const TICK_INTERVAL_MS: u64 = 100;

const TOOLBAR_LABEL: &str = "Clear selection";

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the window and run until it is closed.
pub fn run() -> iced::Result {
    let config = load_config(default_path()).unwrap_or_default();
    let size = Size::new(config.global.window_width, config.global.window_height);

    iced::application(App::boot, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .style(App::style)
        .window(iced::window::Settings {
            size,
            exit_on_close_request: false,
            ..Default::default()
        })
        .run()
}

// ── State ─────────────────────────────────────────────────────────────────────

struct App {
    ctx: AppContext,
    rows: Vec<ItemRow>,
    toolbar: ChromeButton,
    selection: Selection,
    active_filter: Option<String>,
    /// Entries of the open context menu, if any.
    menu: Option<Vec<MenuEntry>>,
    button_down: bool,
}

impl App {
    fn boot() -> Self {
        let ctx = AppContext::boot(default_path());
        let rows = build_rows(&ctx);
        let toolbar = ChromeButton::load(ctx.images(), &ctx.theme().button_basename, TOOLBAR_LABEL);
        info!(items = rows.len(), filters = ctx.filters().len(), "Window ready");

        Self {
            ctx,
            rows,
            toolbar,
            selection: Selection::new(),
            active_filter: None,
            menu: None,
            button_down: false,
        }
    }

    fn title(&self) -> String {
        match self.selection.ids().len() {
            0 => String::from("tv"),
            n => format!("tv ({n} selected)"),
        }
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                let ran = self.ctx.run_pending();
                if ran > 0 {
                    debug!("Ran {ran} posted UI jobs");
                }
            }
            Message::ItemSelected(id) => {
                self.menu = None;
                self.selection.toggle(id);
            }
            Message::ContextMenuRequested(id) => {
                self.selection.focus(id);
                let entries = self.ctx.context_menu(self.selection.ids());
                self.menu = (!entries.is_empty()).then_some(entries);
            }
            Message::ContextMenuActivated(idx) => {
                match self.menu.take().and_then(|mut m| (idx < m.len()).then(|| m.swap_remove(idx))) {
                    Some(entry) => {
                        self.ctx.activate(&entry);
                    }
                    None => warn!("Context menu entry {idx} no longer exists"),
                }
            }
            Message::ContextMenuDismissed => self.menu = None,
            Message::FilterSelected(key) => {
                self.menu = None;
                self.active_filter = key;
            }
            Message::ButtonPressed(true) => self.button_down = true,
            Message::ButtonPressed(false) => {
                if std::mem::take(&mut self.button_down) {
                    self.selection.clear();
                    self.menu = None;
                }
            }
            Message::ConfigReloaded => match self.ctx.reload() {
                Ok(()) => self.rebuild(),
                Err(e) => warn!("Config reload failed: {e}"),
            },
            Message::Shutdown => {
                info!("Shutting down");
                self.ctx.shutdown();
                return iced::exit();
            }
        }
        Task::none()
    }

    fn rebuild(&mut self) {
        self.rows = build_rows(&self.ctx);
        self.toolbar = ChromeButton::load(
            self.ctx.images(),
            &self.ctx.theme().button_basename,
            TOOLBAR_LABEL,
        );
        self.selection.retain_known(self.ctx.items());
        if let Some(key) = &self.active_filter {
            if self.ctx.filters().get(key).is_none() {
                self.active_filter = None;
            }
        }
        self.menu = None;
    }

    fn toolbar_state(&self) -> VisualState {
        if self.selection.is_empty() {
            VisualState::Disabled
        } else if self.button_down {
            VisualState::Pressed
        } else {
            VisualState::Normal
        }
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let theme = self.ctx.theme();

        let toolbar = row![
            self.toolbar.view(self.toolbar_state(), theme),
            filter_bar(self.ctx.filters(), self.active_filter.as_deref(), theme),
        ]
        .spacing(16)
        .align_y(iced::Alignment::Center);

        let visible = self.ctx.visible_items(self.active_filter.as_deref());
        let list = self
            .rows
            .iter()
            .filter(|r| visible.iter().any(|i| i.id == r.item().id))
            .fold(column![].spacing(2), |list, r| {
                list.push(r.view(
                    theme,
                    self.selection.contains(&r.item().id),
                    self.ctx.is_hidden(r.item()),
                ))
            });

        let base = container(
            column![toolbar, scrollable(list).height(Length::Fill)]
                .spacing(8)
                .padding(8),
        )
        .width(Length::Fill)
        .height(Length::Fill);

        match &self.menu {
            Some(entries) => stack![
                base,
                container(context_menu(entries, theme))
                    .align_right(Length::Fill)
                    .padding(24),
            ]
            .into(),
            None => base.into(),
        }
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        let tick = iced::time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(|_| Message::Tick);
        let close = iced::window::close_requests().map(|_| Message::Shutdown);

        Subscription::batch([tick, close, Subscription::run(config_stream)])
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        let theme = self.ctx.theme();
        iced::theme::Style {
            background_color: theme.background.to_iced(),
            text_color: theme.foreground.to_iced(),
        }
    }
}

fn build_rows(ctx: &AppContext) -> Vec<ItemRow> {
    ctx.items()
        .iter()
        .map(|item| {
            let thumbnail = Thumbnail::for_item(ctx.images(), item, ctx.theme());
            ItemRow::new(item.clone(), thumbnail)
        })
        .collect()
}

// ── Subscription streams ──────────────────────────────────────────────────────

/// Watches `~/.config/tv/tv.toml` for writes and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        match ConfigWatcher::spawn(default_path()) {
            Ok((_watcher, mut rx)) => {
                while rx.recv().await.is_some() {
                    let _ = sender.try_send(Message::ConfigReloaded);
                }
            }
            Err(e) => warn!("Live config reload disabled: {e}"),
        }

        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}
