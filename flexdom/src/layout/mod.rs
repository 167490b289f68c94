mod flex;
mod rect;

pub use flex::{solve, LayoutResult};
pub use rect::Rect;
