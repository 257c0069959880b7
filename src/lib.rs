// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod app;
pub mod cors;
pub mod http_logging;
pub mod item;
pub mod logging;
pub mod server;
pub mod settings;

// Re-export commonly used types
pub use item::{Item, ItemCreate, ItemStore, StoreError};
pub use server::{build_router, AppState, API_PREFIX};
pub use settings::{load_settings, Settings, SettingsError};
