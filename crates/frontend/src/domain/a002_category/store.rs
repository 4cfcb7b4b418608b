//! Category reference data, fetched once per session and shared through context.

use contracts::domain::a002_category::{find_by_id, Category};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

#[derive(Clone, Copy)]
pub struct CategoryStore {
    pub categories: RwSignal<Vec<Category>>,
    pub loaded: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl CategoryStore {
    pub fn new() -> Self {
        Self {
            categories: RwSignal::new(Vec::new()),
            loaded: RwSignal::new(false),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Fetch the categories unless they are loaded or on their way.
    /// A failed fetch may be retried by calling this again.
    pub fn ensure_loaded(&self) {
        if self.loaded.get_untracked() || self.loading.get_untracked() {
            return;
        }
        let this = *self;
        this.loading.set(true);
        this.error.set(None);

        spawn_local(async move {
            match api::fetch_categories().await {
                Ok(categories) => {
                    log::debug!("loaded {} categories", categories.len());
                    this.categories.set(categories);
                    this.loaded.set(true);
                }
                Err(e) => {
                    log::error!("Failed to fetch categories: {}", e);
                    this.error.set(Some(e.to_string()));
                }
            }
            this.loading.set(false);
        });
    }

    pub fn name_of(&self, category_id: &str) -> Option<String> {
        self.categories
            .with(|all| find_by_id(all, category_id).map(|c| c.category_name.clone()))
    }
}

impl Default for CategoryStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_categories() -> CategoryStore {
    use_context::<CategoryStore>().expect("CategoryStore not found in component tree")
}
