// Calendar Layout Library
// Time grid geometry, overlap lane packing and drag-to-create selection

pub mod models;
pub mod services;
pub mod utils;

pub use models::event::{CalendarEvent, EventError, TimeInterval};
pub use models::layout::{EventLayout, LayoutMap, PositionedEvent, ScreenRect};
pub use models::selection::{SelectionBounds, SelectionState, SelectionValidation};
pub use models::settings::GridSettings;
pub use services::columns::{ColumnLayout, DayColumn, DayColumnLayout};
pub use services::grid::GridMath;
pub use services::overlap::{events_overlap, OverlapCalculator};
pub use services::positioning::PositioningEngine;
pub use services::selection::SelectionManager;
pub use services::settings::SettingsService;
