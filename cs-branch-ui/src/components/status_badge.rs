//! Event status badge

use cs_branch::catalog::EventStatus;
use leptos::*;

fn badge_class(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Live => "bg-red-500 text-white animate-pulse",
        EventStatus::Open => "bg-green-500 text-white",
        EventStatus::Closing => "bg-yellow-500 text-white",
        EventStatus::Full => "bg-gray-400 text-white",
        EventStatus::Completed => "bg-blue-500 text-white",
    }
}

fn badge_text(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Live => "🔴 LIVE NOW",
        other => other.label(),
    }
}

#[component]
pub fn StatusBadge(status: EventStatus) -> impl IntoView {
    view! {
        <span class=format!(
            "px-3 py-1 rounded-full text-[10px] font-bold uppercase tracking-wider {}",
            badge_class(status),
        )>{badge_text(status)}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_text() {
        assert_eq!(badge_text(EventStatus::Live), "🔴 LIVE NOW");
        assert_eq!(badge_text(EventStatus::Closing), "CLOSING");
        assert_eq!(badge_text(EventStatus::Completed), "COMPLETED");
    }

    #[test]
    fn test_every_status_has_a_colour() {
        for status in EventStatus::ALL {
            assert!(badge_class(*status).starts_with("bg-"));
        }
        assert!(badge_class(EventStatus::Live).contains("animate-pulse"));
    }
}
