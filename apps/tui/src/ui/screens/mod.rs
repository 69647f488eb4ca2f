pub mod chart;
pub mod edit_colors;
pub mod edit_record;
pub mod help;
pub mod records;
