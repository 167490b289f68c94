//! Action-sheet style overlays for flexdom view hierarchies.
//!
//! A [`Sheet`] presents a dimmed backdrop and a stack of selectable
//! operations pinned to the bottom of a [`Container`]. Active sheets are
//! tracked by an [`OverlayContext`], which also owns the animation state
//! driving entrance and exit transitions; the owning event loop calls
//! [`OverlayContext::pump`] once per frame to settle finished dismissals.

pub mod container;
pub mod content;
pub mod context;
pub mod operation;
pub mod sheet;

pub use container::Container;
pub use content::Content;
pub use context::{OverlayContext, OverlayKind, OverlayNode};
pub use operation::{Operation, OperationStyle};
pub use sheet::{Animation, AwakeStyle, OpGroup, Sheet, State, SLIDE_DURATION};

pub mod prelude {
    pub use crate::container::Container;
    pub use crate::content::Content;
    pub use crate::context::{OverlayContext, OverlayKind};
    pub use crate::operation::{Operation, OperationStyle};
    pub use crate::sheet::{Animation, OpGroup, Sheet, State};
}
