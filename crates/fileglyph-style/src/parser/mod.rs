//! CSS syntax support.

mod rule_check;

pub use rule_check::{check_rule, css_identifier, css_string};
