/// User interface module
///
/// Widgets and view helpers:
/// - Product cards (card.rs)
/// - Filter panel with price slider and category checklist (sidebar.rs)
/// - Two-thumb price slider canvas (range_slider.rs)
/// - Search-term highlighting (highlight.rs)
/// - Loading indicator (spinner.rs)

pub mod card;
pub mod highlight;
pub mod range_slider;
pub mod sidebar;
pub mod spinner;
