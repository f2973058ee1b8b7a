//! Blendtree core (engine-agnostic)
//!
//! An animation blend-graph evaluation engine: typed variant values, a small
//! expression language for per-frame parameters, frame-time accumulation
//! with loop/done signaling, and a recursive blend-tree walk.
//!
//! The crate performs no I/O. A host constructs the node tree once (usually
//! through [`parse_graph_json`]), then each simulation tick supplies a
//! [`VariantMap`] and a time delta to [`evaluate`]; the result is a set of
//! weighted pose contributions (resource id + frame position) for the host's
//! sampler, plus the triggers fired during the tick.

pub mod error;
pub mod expr;
pub mod loader;
pub mod nodes;
pub mod time;
pub mod value;
pub mod vars;

// Re-exports for consumers (adapters)
pub use error::{ExprError, GraphLoadError};
pub use expr::Expression;
pub use loader::parse_graph_json;
pub use nodes::{
    evaluate, BlendLinear, Clip, Node, NodeKind, PoseContribution, PoseResult, TickOutput,
};
pub use time::{accumulate_time, Triggers, FRAMES_PER_SECOND};
pub use value::{Variant, VariantKind};
pub use vars::VariantMap;
