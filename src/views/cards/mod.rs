pub mod layout;
mod items;
mod release_date;

pub use items::card_view;
pub use layout::CardLayout;
