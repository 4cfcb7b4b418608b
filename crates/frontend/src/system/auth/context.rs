use contracts::system::auth::SessionUser;
use leptos::prelude::*;

/// Who is signed in. Provided once at the app root; lives until reload.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub user: RwSignal<Option<SessionUser>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
        }
    }

    pub fn sign_in(&self, user: SessionUser) {
        log::info!("signed in as {}", user.email);
        self.user.set(Some(user));
    }

    pub fn sign_out(&self) {
        if let Some(user) = self.user.get_untracked() {
            log::info!("signed out {}", user.email);
        }
        self.user.set(None);
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.with(Option::is_some)
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}
