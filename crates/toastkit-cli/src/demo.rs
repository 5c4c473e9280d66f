//! Scripted walkthrough of the toast lifecycle

use std::time::Duration;
use toastkit_core::{Position, ToastAction, ToastOptions, Toaster, ToasterConfig};
use tokio::time::sleep;
use tracing::info;

/// Raise a mix of toasts, hover one, trigger an action, then clear the rest.
pub async fn run(toaster: &Toaster, config: &ToasterConfig) -> anyhow::Result<()> {
    let saved = toaster.success("Document saved", ToastOptions::new().title("Saved"))?;
    sleep(Duration::from_millis(300)).await;

    toaster.info(
        "3 new comments",
        ToastOptions::new()
            .position(Position::BottomRight)
            .duration_ms(1500),
    )?;

    let trashed = toaster.warning(
        "Item moved to trash",
        ToastOptions::new().action(ToastAction::new("Undo", |id| {
            info!("Undo requested from toast {}", id);
        })),
    )?;

    toaster.error(
        "Connection lost",
        ToastOptions::new()
            .persistent()
            .description("Retrying in 30s"),
    )?;

    toaster.custom(
        serde_json::json!({ "component": "UploadProgress", "file": "report.pdf", "percent": 40 }),
        ToastOptions::new().position(Position::BottomCenter).show_icon(false),
    )?;

    // Pointer rests on the first toast for a while
    toaster.pause(&saved)?;
    sleep(Duration::from_millis(2000)).await;
    toaster.resume(&saved)?;

    toaster.activate_action(&trashed)?;
    sleep(Duration::from_millis(500)).await;

    toaster.dismiss_all()?;
    sleep(config.exit_duration + Duration::from_millis(50)).await;

    Ok(())
}
