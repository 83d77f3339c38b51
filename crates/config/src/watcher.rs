use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tv_core::{Result, TvError};

/// Watches a config file and signals on every change to it.
///
/// The parent directory is watched rather than the file itself so that
/// editors which save by rename-over are still noticed.  Bursts of events
/// collapse into one pending signal.  Dropping the watcher stops it.
///
/// # Example
/// ```no_run
/// # async fn demo() -> tv_core::Result<()> {
/// let (_watcher, mut rx) = tv_config::ConfigWatcher::spawn("/home/user/.config/tv/tv.toml")?;
/// while rx.recv().await.is_some() {
///     println!("config changed, reloading");
/// }
/// # Ok(())
/// # }
/// ```
pub struct ConfigWatcher {
    path: PathBuf,
    _inner: RecommendedWatcher,
}

impl ConfigWatcher {
    pub fn spawn(path: impl AsRef<Path>) -> Result<(Self, mpsc::Receiver<()>)> {
        let path = path.as_ref().to_path_buf();
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();
        let (tx, rx) = mpsc::channel(1);

        let target = path.clone();
        let mut inner = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) if touches(&event, &target) => {
                // Full channel means a reload is already pending.
                let _ = tx.try_send(());
            }
            Ok(_) => {}
            Err(e) => warn!("Watcher error: {e}"),
        })
        .map_err(|e| TvError::Config(format!("cannot create watcher: {e}")))?;

        inner
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|e| TvError::Config(format!("cannot watch '{}': {e}", dir.display())))?;

        info!("Watching config file: {}", path.display());
        Ok((Self { path, _inner: inner }, rx))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn touches(event: &Event, target: &Path) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event.paths.iter().any(|p| p.file_name() == target.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind};

    #[test]
    fn only_changes_to_the_target_count() {
        let target = Path::new("/cfg/tv.toml");
        let hit = Event::new(EventKind::Modify(ModifyKind::Any)).add_path("/cfg/tv.toml".into());
        let other = Event::new(EventKind::Create(CreateKind::File)).add_path("/cfg/other.toml".into());
        let removal = Event::new(EventKind::Remove(notify::event::RemoveKind::Any))
            .add_path("/cfg/tv.toml".into());

        assert!(touches(&hit, target));
        assert!(!touches(&other, target));
        assert!(!touches(&removal, target));
    }
}
