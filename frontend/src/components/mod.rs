pub mod charts;
pub mod data_sources;
pub mod form_builder;
pub mod modal;
pub mod sidebar;
pub mod stat_card;
