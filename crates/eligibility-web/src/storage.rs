use eligibility_core::{RecentChecks, RECENT_CHECKS_KEY};
use leptos::logging::warn;
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Missing or corrupt entries yield an empty list.
pub fn load_recent(limit: usize) -> RecentChecks {
    let raw = local_storage().and_then(|s| s.get_item(RECENT_CHECKS_KEY).ok().flatten());

    RecentChecks::from_stored(raw.as_deref(), limit).unwrap_or_else(|e| {
        warn!("Ignoring stored recent checks: {}", e);
        RecentChecks::new(limit)
    })
}

pub fn save_recent(recent: &RecentChecks) {
    let Some(storage) = local_storage() else {
        warn!("localStorage unavailable, recent checks not saved");
        return;
    };

    let json = match recent.to_json() {
        Ok(json) => json,
        Err(e) => {
            warn!("Failed to serialize recent checks: {}", e);
            return;
        }
    };

    if let Err(e) = storage.set_item(RECENT_CHECKS_KEY, &json) {
        warn!("Failed to save recent checks: {:?}", e);
    }
}
