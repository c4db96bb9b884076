pub mod banner;
pub mod gauge;
pub mod player;
pub mod queue_panel;
pub mod result_grid;
pub mod search_bar;
pub mod spinner;
