use crate::core::{FilterState, LanguageCatalog};
use crate::models::{FilterCriteria, InitialFilters};
use crate::services::LanguagesClient;
use std::sync::Arc;

type ApplyCallback = Box<dyn FnOnce(FilterCriteria) + Send>;

/// One open filter form.
///
/// Owns the filter state and the language catalog for the lifetime of the
/// form: created when the form opens, consumed by [`apply`](Self::apply)
/// (commit) or [`dismiss`](Self::dismiss) (discard). Single owner, no locks:
/// catalog loads borrow the session mutably and are awaited on the hosting
/// event loop, so results are always applied on the owning task — and a load
/// still in flight when the session is dropped is cancelled with it, never
/// applied to a destroyed session.
pub struct FilterSession {
    filters: FilterState,
    catalog: LanguageCatalog,
    client: Arc<LanguagesClient>,
    on_apply: Option<ApplyCallback>,
}

impl FilterSession {
    /// Open a session seeded from caller-supplied defaults.
    ///
    /// `on_apply` is invoked exactly once, on commit; a dismissed session
    /// never calls it. The catalog starts in `Loading` — the host is
    /// expected to await [`load_catalog`](Self::load_catalog) next.
    pub fn new(
        initial: &InitialFilters,
        client: Arc<LanguagesClient>,
        on_apply: impl FnOnce(FilterCriteria) + Send + 'static,
    ) -> Self {
        Self {
            filters: FilterState::new(initial),
            catalog: LanguageCatalog::new(),
            client,
            on_apply: Some(Box::new(on_apply)),
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Mutable access for UI events (age range, gender, language, reset).
    pub fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }

    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    /// Fetch the language catalog and resolve the tri-state status.
    ///
    /// Status is reset to `Loading` before the request goes out. On success
    /// the catalog becomes `Loaded`; on any failure it becomes `Failed` with
    /// the fixed user-facing message while the raw error is only traced.
    /// Age and gender fields stay fully usable either way.
    pub async fn load_catalog(&mut self) {
        let token = self.catalog.begin_load();

        match self.client.fetch_languages().await {
            Ok(names) => {
                self.catalog.resolve_loaded(token, names);
            }
            Err(err) => {
                tracing::warn!("Language catalog load failed: {}", err);
                self.catalog.resolve_failed(token, err.user_message());
            }
        }
    }

    /// User-initiated retry after a failed load. Never triggered
    /// automatically.
    pub async fn retry(&mut self) {
        self.load_catalog().await;
    }

    /// Commit: convert the current state to its payload, hand it to the
    /// caller's `on_apply`, and close the form.
    ///
    /// Consuming `self` makes the exactly-once delivery structural. Commit
    /// is available regardless of catalog status.
    pub fn apply(mut self) -> FilterCriteria {
        let criteria = self.filters.commit();

        if let Some(on_apply) = self.on_apply.take() {
            on_apply(criteria.clone());
        }

        criteria
    }

    /// Close the form without emitting anything.
    pub fn dismiss(self) {}
}
