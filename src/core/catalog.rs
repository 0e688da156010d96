/// Load status of the language catalog.
///
/// Transitions: `Loading -> Loaded` on success, `Loading -> Failed` on any
/// error, `Failed -> Loading` on explicit retry, `Loaded -> Loading` on an
/// explicit refresh. There is no `Loaded -> Failed` transition except via a
/// new load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    Loading,
    Loaded,
    Failed(String),
}

/// The remotely sourced list of selectable native-language names.
///
/// Names keep server order and are de-duplicated (first occurrence wins).
/// Each load carries a monotonically increasing request token so that when
/// retries overlap, only the most recently issued load may resolve the
/// status ("last call wins").
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageCatalog {
    languages: Vec<String>,
    status: CatalogStatus,
    token: u64,
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self {
            languages: Vec::new(),
            status: CatalogStatus::Loading,
            token: 0,
        }
    }
}

impl LanguageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == CatalogStatus::Loading
    }

    /// The fixed user-facing message when the last load failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            CatalogStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.languages.iter().any(|l| l == name)
    }

    /// Mark a new load as in flight and return its token.
    ///
    /// Resets status to `Loading` before the request is issued, so the UI
    /// shows a busy state without racing against a stale `Failed`.
    pub fn begin_load(&mut self) -> u64 {
        self.token += 1;
        self.status = CatalogStatus::Loading;
        self.token
    }

    /// Apply a successful load. Responses from superseded loads are dropped.
    pub fn resolve_loaded(&mut self, token: u64, names: Vec<String>) {
        if token != self.token {
            tracing::debug!("Discarding stale catalog response (token {})", token);
            return;
        }

        let mut distinct = Vec::with_capacity(names.len());
        for name in names {
            if !distinct.contains(&name) {
                distinct.push(name);
            }
        }

        self.languages = distinct;
        self.status = CatalogStatus::Loaded;
    }

    /// Apply a failed load. Responses from superseded loads are dropped.
    ///
    /// The previously loaded names are left untouched so the selection UI
    /// can keep showing them alongside the error.
    pub fn resolve_failed(&mut self, token: u64, message: impl Into<String>) {
        if token != self.token {
            tracing::debug!("Discarding stale catalog failure (token {})", token);
            return;
        }

        self.status = CatalogStatus::Failed(message.into());
    }
}
