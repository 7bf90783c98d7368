// Card building blocks; only the assembled card is public.
mod card;
mod progress_bar;
mod tag_row;
mod text_block;
mod thumbnail;

pub use card::card_view;
