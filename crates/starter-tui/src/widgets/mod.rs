//! Widget components for the TUI

mod header;
mod image;
mod option;
mod option_list;
mod preview_card;

pub use header::Header;
pub use image::Image;
pub use option::{marker_for, marker_tint, StarterOption, OPTION_HEIGHT, OPTION_WIDTH};
pub use option_list::{option_areas, option_at, OptionList, OPTION_SPACING};
pub use preview_card::{PreviewCard, CARD_HEIGHT, CARD_WIDTH};
