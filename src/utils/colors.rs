/// ANSI color helper utilities for terminal output.
use crate::models::category::Category;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Category color:
/// current → green
/// upcoming → yellow
/// past → grey
pub fn color_for_category(cat: Category) -> &'static str {
    match cat {
        Category::Current => GREEN,
        Category::Upcoming => YELLOW,
        Category::Past => GREY,
    }
}
