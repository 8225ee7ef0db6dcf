// validators crate

mod props;

pub use props::check_label;
pub use props::require_string;
pub use props::validate_toggle_props;
