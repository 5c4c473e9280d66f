//! Text rendering of position buckets
//!
//! Each non-empty bucket becomes a block headed by its anchor name. Toasts
//! are listed in on-screen stacking order: the newest toast sits closest to
//! the anchored edge.

use crate::theme::Theme;
use toastkit_core::{Position, PositionBuckets, ToastContent, ToastRecord};

/// Records of one bucket ordered top-to-bottom as they would appear
pub fn visual_order(position: Position, records: &[ToastRecord]) -> Vec<&ToastRecord> {
    if position.is_top() {
        records.iter().rev().collect()
    } else {
        records.iter().collect()
    }
}

/// Display text for a toast payload
pub fn content_text(content: &ToastContent) -> String {
    match content {
        ToastContent::Text(text) => text.clone(),
        ToastContent::Custom(value) => {
            serde_json::to_string(value).unwrap_or_else(|_| "<custom>".to_string())
        }
    }
}

/// One line for one toast
pub fn render_toast(record: &ToastRecord, theme: &Theme) -> String {
    let mut line = String::new();

    if record.show_icon {
        let icon = record
            .icon
            .as_deref()
            .unwrap_or_else(|| theme.icon(record.variant));
        line.push_str(&theme.paint(record.variant, icon));
        line.push(' ');
    }

    if let Some(title) = &record.title {
        line.push_str(&theme.paint(record.variant, title));
        line.push_str(": ");
    }
    line.push_str(&content_text(&record.content));

    if let Some(description) = &record.description {
        line.push_str(&theme.paint_muted(&format!(" ({})", description)));
    }
    if let Some(action) = &record.action {
        line.push_str(&format!(" [{}]", action.label));
    }
    if record.show_close_button {
        line.push_str(" [x]");
    }

    let announcement = record.announcement();
    line.push_str(&theme.paint_muted(&format!(
        " role={} aria-live={}",
        announcement.role(),
        announcement.aria_live()
    )));

    if let Some(class_name) = &record.class_name {
        line.push_str(&theme.paint_muted(&format!(" class={}", class_name)));
    }
    if record.is_exiting() {
        line.push_str(&theme.paint_muted(" (leaving)"));
    }

    line
}

/// Render every non-empty bucket
pub fn render_board(buckets: &PositionBuckets, theme: &Theme) -> String {
    if buckets.is_empty() {
        return "(no toasts)\n".to_string();
    }

    let mut out = String::new();
    for (position, records) in buckets.iter() {
        out.push_str(&format!("[{}]\n", position));
        for record in visual_order(position, records) {
            out.push_str("  ");
            out.push_str(&render_toast(record, theme));
            out.push('\n');
        }
    }
    out
}
