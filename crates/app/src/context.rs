use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};
use tv_config::{load as load_config, TvConfig};
use tv_core::{
    Extension, ExtensionContext, FilterRegistry, ItemId, ItemInfo, MenuEntry, Result, UiDispatcher,
    UiHandle,
};
use tv_hideitem::HideItemExtension;
use tv_render::ImagePool;
use tv_theme::Theme;

/// Key of the filter whose matches are drawn as hidden in the item list.
pub const HIDDEN_FILTER: &str = "hidden";

/// Everything the UI loop shares: configuration, theme, images, filters
/// and the loaded extensions.  Built once at startup and passed by
/// reference.
pub struct AppContext {
    config_path: PathBuf,
    config: TvConfig,
    theme: Theme,
    images: Arc<ImagePool>,
    filters: FilterRegistry,
    extensions: Vec<Box<dyn Extension>>,
    dispatcher: UiDispatcher,
}

impl AppContext {
    /// Load the config at `config_path` and every built-in extension.
    pub fn boot(config_path: impl Into<PathBuf>) -> Self {
        let config_path = config_path.into();
        let config = load_config(&config_path).unwrap_or_else(|e| {
            warn!("Config unusable ({e}); using defaults");
            TvConfig::default()
        });
        Self::with_extensions(config_path, config, vec![Box::new(HideItemExtension::new())])
    }

    pub fn with_extensions(
        config_path: impl Into<PathBuf>,
        config: TvConfig,
        extensions: Vec<Box<dyn Extension>>,
    ) -> Self {
        let mut ctx = Self {
            config_path: config_path.into(),
            theme: Theme::from_config(&config.theme),
            images: Arc::new(ImagePool::new(&config.global.resources_dir)),
            config,
            filters: FilterRegistry::new(),
            extensions: Vec::with_capacity(extensions.len()),
            dispatcher: UiDispatcher::new(),
        };
        for extension in extensions {
            ctx.load_extension(extension);
        }
        ctx
    }

    /// A failing extension is logged and left out; the rest still load.
    fn load_extension(&mut self, mut extension: Box<dyn Extension>) {
        let ext_ctx = ExtensionContext {
            data_dir: self.config.global.data_dir.clone(),
        };
        match extension.load(&ext_ctx) {
            Ok(()) => {
                for filter in extension.item_filters() {
                    self.filters.register(filter);
                }
                info!(extension = extension.name(), "Extension loaded");
                self.extensions.push(extension);
            }
            Err(e) => error!(extension = extension.name(), "Extension failed to load: {e}"),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> &TvConfig {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn images(&self) -> &Arc<ImagePool> {
        &self.images
    }

    pub fn filters(&self) -> &FilterRegistry {
        &self.filters
    }

    pub fn items(&self) -> &[ItemInfo] {
        &self.config.items
    }

    pub fn item(&self, id: &ItemId) -> Option<&ItemInfo> {
        self.config.items.iter().find(|i| i.id == *id)
    }

    pub fn visible_items(&self, filter: Option<&str>) -> Vec<&ItemInfo> {
        self.filters.apply(filter, &self.config.items)
    }

    pub fn is_hidden(&self, item: &ItemInfo) -> bool {
        self.filters
            .get(HIDDEN_FILTER)
            .is_some_and(|f| f.matches(item))
    }

    /// Build the context menu for `selection`, letting every extension add
    /// its entries.  Unknown ids are skipped.
    pub fn context_menu(&self, selection: &[ItemId]) -> Vec<MenuEntry> {
        let items: Vec<ItemInfo> = selection
            .iter()
            .filter_map(|id| self.item(id).cloned())
            .collect();
        let mut menu: Vec<MenuEntry> = Vec::new();
        for extension in &self.extensions {
            extension.update_item_context_menu(&items, &mut menu);
        }
        menu
    }

    /// Route `entry` to the extension that inserted it.  Returns `false`
    /// when no loaded extension claims it.
    pub fn activate(&self, entry: &MenuEntry) -> bool {
        match self
            .extensions
            .iter()
            .find(|e| e.name() == entry.action.extension)
        {
            Some(extension) => {
                extension.handle_action(&entry.action);
                true
            }
            None => {
                warn!(
                    extension = %entry.action.extension,
                    "Menu entry '{}' has no loaded extension", entry.label
                );
                false
            }
        }
    }

    pub fn ui_handle(&self) -> UiHandle {
        self.dispatcher.handle()
    }

    /// Run work posted to the UI loop since the last call.
    pub fn run_pending(&mut self) -> usize {
        self.dispatcher.run_pending()
    }

    /// Re-read the config file.  Theme and image pool are rebuilt; loaded
    /// extensions keep running.  On error the current config is kept.
    pub fn reload(&mut self) -> Result<()> {
        let config = load_config(&self.config_path)?;
        self.theme = Theme::from_config(&config.theme);
        self.images = Arc::new(ImagePool::new(&config.global.resources_dir));
        self.config = config;
        info!("Config reloaded");
        Ok(())
    }

    /// Unload every extension, last loaded first.  Safe to call twice.
    pub fn shutdown(&mut self) {
        while let Some(mut extension) = self.extensions.pop() {
            extension.unload();
        }
        self.filters = FilterRegistry::new();
    }
}

impl Drop for AppContext {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tv_core::TvError;

    fn config_in(dir: &Path) -> TvConfig {
        let mut config = TvConfig::default();
        config.global.data_dir = dir.to_path_buf();
        config.global.resources_dir = dir.join("resources");
        config.items = vec![
            ItemInfo::new("item_42", "Episode 42"),
            ItemInfo::new("item_99", "Episode 99"),
        ];
        config
    }

    fn hideitem_context(dir: &Path) -> AppContext {
        AppContext::with_extensions(
            dir.join("tv.toml"),
            config_in(dir),
            vec![Box::new(HideItemExtension::new())],
        )
    }

    struct StubExtension {
        fail: bool,
        unloaded: Arc<AtomicUsize>,
    }

    impl Extension for StubExtension {
        fn name(&self) -> &str {
            "stub"
        }

        fn load(&mut self, _ctx: &ExtensionContext) -> Result<()> {
            if self.fail {
                return Err(TvError::Storage("disk on fire".into()));
            }
            Ok(())
        }

        fn unload(&mut self) {
            self.unloaded.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn hide_from_menu_moves_item_between_filters() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = hideitem_context(dir.path());
        assert_eq!(ctx.filters().len(), 2);

        let menu = ctx.context_menu(&[ItemId::from("item_42")]);
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].label, "Hide Item");
        assert!(ctx.activate(&menu[0]));

        let item_42 = ctx.item(&"item_42".into()).unwrap().clone();
        assert!(ctx.is_hidden(&item_42));

        let hidden: Vec<&str> = ctx
            .visible_items(Some(HIDDEN_FILTER))
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(hidden, vec!["item_42"]);

        let shown: Vec<&str> = ctx
            .visible_items(Some("non-hidden"))
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(shown, vec!["item_99"]);
        assert_eq!(ctx.visible_items(None).len(), 2);
    }

    #[test]
    fn multi_selection_menu_is_pluralised() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = hideitem_context(dir.path());
        let menu = ctx.context_menu(&["item_42".into(), "item_99".into()]);
        assert_eq!(menu[0].label, "Hide Items");
        assert!(ctx.context_menu(&["unknown".into()]).is_empty());
    }

    #[test]
    fn entry_for_unloaded_extension_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = hideitem_context(dir.path());
        let mut entry = ctx.context_menu(&["item_42".into()]).remove(0);
        entry.action.extension = "elsewhere".into();
        assert!(!ctx.activate(&entry));
    }

    #[test]
    fn failed_extension_is_skipped_and_others_unload_once() {
        let dir = tempfile::tempdir().unwrap();
        let unloaded = Arc::new(AtomicUsize::new(0));
        let mut ctx = AppContext::with_extensions(
            dir.path().join("tv.toml"),
            config_in(dir.path()),
            vec![
                Box::new(StubExtension { fail: true, unloaded: unloaded.clone() }),
                Box::new(StubExtension { fail: false, unloaded: unloaded.clone() }),
            ],
        );
        ctx.shutdown();
        ctx.shutdown();
        drop(ctx);
        assert_eq!(unloaded.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn work_posted_from_another_thread_runs_on_drain() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = hideitem_context(dir.path());
        let hits = Arc::new(AtomicUsize::new(0));

        let handle = ctx.ui_handle();
        let counter = hits.clone();
        std::thread::spawn(move || {
            handle
                .post(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                })
                .unwrap();
        })
        .join()
        .unwrap();

        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert_eq!(ctx.run_pending(), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(ctx.run_pending(), 0);
    }

    #[test]
    fn reload_picks_up_new_items_and_keeps_state_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tv.toml");
        let mut ctx = hideitem_context(dir.path());

        std::fs::write(
            &path,
            "[[items]]\nid = \"fresh\"\nname = \"Fresh\"\n\n[theme]\nfont_size = 20.0\n",
        )
        .unwrap();
        ctx.reload().unwrap();
        assert_eq!(ctx.items().len(), 1);
        assert_eq!(ctx.theme().font_size, 20.0);

        std::fs::write(&path, "items = 7").unwrap();
        assert!(ctx.reload().is_err());
        assert_eq!(ctx.items()[0].id.as_str(), "fresh");
    }
}
