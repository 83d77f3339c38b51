use crate::item::ItemId;

/// All messages (events) that can flow through the application event bus.
///
/// Sources:
/// - Config watcher task   → `ConfigReloaded`
/// - Item list / menus     → `Item*`, `ContextMenu*`, `FilterSelected`
/// - Timer subscription    → `Tick`
#[derive(Debug, Clone)]
pub enum Message {
    // ── Config ────────────────────────────────────────────────────────────────
    /// Config file changed on disk; triggers a live reload.
    ConfigReloaded,

    // ── User actions ──────────────────────────────────────────────────────────
    /// Click on an item row: add or remove it from the selection.
    ItemSelected(ItemId),
    /// Right click on an item row: open the context menu for the selection.
    ContextMenuRequested(ItemId),
    /// A context menu entry was activated (index into the open menu).
    ContextMenuActivated(usize),
    /// The open context menu was dismissed without choosing an entry.
    ContextMenuDismissed,
    /// A list filter was chosen (`None` = show everything).
    FilterSelected(Option<String>),
    /// Toolbar button pressed / released.
    ButtonPressed(bool),

    // ── Internal ──────────────────────────────────────────────────────────────
    /// Periodic tick; drains work posted to the UI thread.
    Tick,
    /// Graceful shutdown requested.
    Shutdown,
}
