//! Demo settings read from the environment.

/// Name given to the demo library.
pub const LIBRARY_NAME_ENV: &str = "BOOKKEEPING_LIBRARY_NAME";
/// Which walkthrough to run: `all`, `ledger` or `library`.
pub const DEMO_ENV: &str = "BOOKKEEPING_DEMO";

const DEFAULT_LIBRARY_NAME: &str = "Central Library";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoSelection {
    All,
    Ledger,
    Library,
}

impl DemoSelection {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "ledger" => Some(Self::Ledger),
            "library" => Some(Self::Library),
            _ => None,
        }
    }

    pub fn includes(self, part: DemoSelection) -> bool {
        self == DemoSelection::All || self == part
    }
}

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub library_name: String,
    pub selection: DemoSelection,
}

impl DemoConfig {
    pub fn from_env() -> Self {
        let library_name = std::env::var(LIBRARY_NAME_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LIBRARY_NAME.to_string());

        let selection = match std::env::var(DEMO_ENV) {
            Ok(raw) => DemoSelection::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "unknown {DEMO_ENV}; running all demos");
                DemoSelection::All
            }),
            Err(_) => DemoSelection::All,
        };

        Self {
            library_name,
            selection,
        }
    }
}
