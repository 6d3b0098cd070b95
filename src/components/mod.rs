pub mod input;
pub mod picker;
pub mod scanner;
pub mod sidebar;
pub mod status;
pub mod stat_card;
