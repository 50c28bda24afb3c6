pub mod text;

pub use text::strip_markup;
