pub mod card_animated;
pub mod load_more;
pub mod page_header;
