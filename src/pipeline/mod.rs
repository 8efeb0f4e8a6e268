//! The reactive query pipeline.
//!
//! ```text
//! search text ──► SearchPipeline ──┐
//!                                  ├─► DisplayListSelector ──► display list
//! featured (once) ─────────────────┘
//! selection ──► SelectionRouter ──► navigate
//!           └─► DetailPipeline ───► detail
//! ```
//!
//! Each stage is a stream transform. The only state is the latest value of
//! each display input, held inside the display stream itself.

pub mod detail;
pub mod display;
pub mod router;
pub mod search;

pub use detail::{first_detail, DetailPipeline};
pub use display::{recompute, DisplayListSelector};
pub use router::{NavigationCommand, SelectionRouter};
pub use search::SearchPipeline;
