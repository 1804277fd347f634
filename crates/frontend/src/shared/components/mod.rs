pub mod charts;
pub mod date_range_picker;
pub mod stat_card;
