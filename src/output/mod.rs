pub mod formatter;

pub use formatter::{
    format_categories, format_json, format_rating, format_report, rating_bar, should_use_colors,
};
