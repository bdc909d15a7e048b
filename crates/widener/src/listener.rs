use crate::plugin::WidenerPlugin;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;
use widener_core::WidenerSettings;

/// Apply host configuration changes to a plugin as they arrive
///
/// The current value of `rx` is applied immediately, then every change after
/// it. The task ends once the sending side is dropped.
pub fn spawn_settings_listener(
    plugin: Arc<WidenerPlugin>,
    mut rx: watch::Receiver<WidenerSettings>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let settings = *rx.borrow_and_update();
            if plugin.apply_settings(&settings) {
                debug!(
                    "Applied widener settings: enabled={}, width={}",
                    settings.enabled,
                    plugin.width()
                );
            }

            if rx.changed().await.is_err() {
                debug!("Settings channel closed, stopping listener");
                break;
            }
        }
    })
}
