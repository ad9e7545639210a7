//! Client-side admin gate.
//!
//! A single persisted boolean controlling which mutation controls the UI
//! shows. This is a convenience, not a security boundary: the backend has to
//! authorize privileged operations on its own, since this flag is trivially
//! bypassable from the console.

pub mod storage;

use leptos::prelude::*;

const ADMIN_PASSWORD: &str = "kebabadmin";

#[derive(Clone, Copy)]
pub struct AdminContext {
    pub is_admin: RwSignal<bool>,
}

impl AdminContext {
    /// Restore the persisted flag from localStorage.
    pub fn load() -> Self {
        Self {
            is_admin: RwSignal::new(storage::load_admin_mode()),
        }
    }

    /// Toggle admin mode. Enabling prompts for the password; a wrong answer
    /// shows a notice and leaves the flag off, a cancelled prompt is silent.
    /// Disabling needs no confirmation.
    pub fn toggle(&self) {
        if self.is_admin.get_untracked() {
            self.set(false);
            return;
        }
        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };
        match window.prompt_with_message("Podaj hasło administratora:") {
            Ok(Some(entered)) if entered == ADMIN_PASSWORD => self.set(true),
            Ok(Some(_)) => {
                let _ = window.alert_with_message("Nieprawidłowe hasło!");
            }
            _ => {}
        }
    }

    fn set(&self, enabled: bool) {
        self.is_admin.set(enabled);
        storage::save_admin_mode(enabled);
    }
}

/// Hook to access the admin gate.
pub fn use_admin() -> AdminContext {
    use_context::<AdminContext>().expect("AdminContext not found in component tree")
}
