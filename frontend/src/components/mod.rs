pub mod sidebar;
pub mod toast;
pub mod upload_overlay;

pub use sidebar::Sidebar;
pub use toast::{use_toasts, use_toasts_provider, ToastHost, Toasts};
pub use upload_overlay::{show_upload_overlay, OverlayState, UploadOverlay};

use chrono::{DateTime, Datelike, Utc};

use crate::types::Theme;

/// Mirror the theme onto the document root so the stylesheet's `dark`
/// variants apply everywhere, including portals rendered outside the app
/// container.
pub fn apply_theme(theme: Theme) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(root) = document.document_element() else {
        return;
    };
    let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
}

pub fn format_member_since(joined: Option<DateTime<Utc>>) -> String {
    match joined {
        Some(date) => format!("{} {}", month_name(date.month()), date.year()),
        None => "Unknown".to_string(),
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}
