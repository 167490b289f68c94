pub mod animation;
pub mod buffer;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod transition;
pub mod types;
pub mod view;

pub use animation::{AnimatedProperty, AnimationState, PropertyValue};
pub use buffer::{Buffer, Cell};
pub use layout::{solve, LayoutResult, Rect};
pub use terminal::Terminal;
pub use transition::{Easing, TransitionConfig};
pub use types::*;
pub use view::{View, ViewContent};
