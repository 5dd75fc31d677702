mod route;
mod settings;
mod station;
mod view_state;

pub use route::{RouteCatalog, RouteMeta};
pub use settings::MapSettings;
pub use station::Station;
pub use view_state::{StatusSummary, ViewState};
