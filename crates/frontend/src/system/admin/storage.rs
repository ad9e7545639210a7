use web_sys::window;

const ADMIN_MODE_KEY: &str = "kebabAdminMode";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the admin flag to localStorage (JSON-encoded boolean).
pub fn save_admin_mode(enabled: bool) {
    if let Some(storage) = get_local_storage() {
        if let Ok(encoded) = serde_json::to_string(&enabled) {
            let _ = storage.set_item(ADMIN_MODE_KEY, &encoded);
        }
    }
}

/// Get the admin flag from localStorage; absent or corrupt values count as
/// disabled.
pub fn load_admin_mode() -> bool {
    get_local_storage()
        .and_then(|storage| storage.get_item(ADMIN_MODE_KEY).ok().flatten())
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or(false)
}
