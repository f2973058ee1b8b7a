//! Animation graph nodes and the per-tick evaluation walk.
//!
//! The node set is closed: evaluation dispatches by match on the enum, never
//! through open-ended dynamic dispatch. Nodes own their children exclusively
//! (a tree, no sharing), and the only state that mutates during playback is
//! each clip's frame cursor; callers serialize ticks externally.

mod blend;
mod clip;

pub use blend::BlendLinear;
pub use clip::Clip;

use serde::Serialize;

use crate::time::Triggers;
use crate::vars::VariantMap;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Clip,
    BlendLinear,
}

#[derive(Clone, Debug)]
pub enum Node {
    Clip(Clip),
    BlendLinear(BlendLinear),
}

impl Node {
    pub fn id(&self) -> &str {
        match self {
            Node::Clip(n) => n.id(),
            Node::BlendLinear(n) => n.id(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Clip(_) => NodeKind::Clip,
            Node::BlendLinear(_) => NodeKind::BlendLinear,
        }
    }

    pub fn child_count(&self) -> usize {
        match self {
            Node::Clip(_) => 0,
            Node::BlendLinear(n) => n.children().len(),
        }
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        match self {
            Node::Clip(_) => None,
            Node::BlendLinear(n) => n.children().get(index),
        }
    }

    pub fn as_clip(&self) -> Option<&Clip> {
        match self {
            Node::Clip(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_clip_mut(&mut self) -> Option<&mut Clip> {
        match self {
            Node::Clip(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_blend_linear(&self) -> Option<&BlendLinear> {
        match self {
            Node::BlendLinear(n) => Some(n),
            _ => None,
        }
    }

    /// Advance this subtree one tick. Children see the same map and delta;
    /// triggers append in child order.
    pub fn evaluate(&mut self, vars: &VariantMap, dt: f64, triggers: &mut Triggers) -> PoseResult {
        match self {
            Node::Clip(n) => n.evaluate(vars, dt, triggers),
            Node::BlendLinear(n) => n.evaluate(vars, dt, triggers),
        }
    }
}

/// One clip's weighted contribution to the blended result. Sampling the
/// keyframe data behind `resource` at `frame` is the host's job; the core
/// resolves positions and weights only.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PoseContribution {
    pub resource: String,
    pub frame: f64,
    pub weight: f64,
}

/// Ordered weighted contributions produced by one evaluation pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PoseResult {
    pub contributions: Vec<PoseContribution>,
}

impl PoseResult {
    pub fn from_clip(resource: &str, frame: f64) -> Self {
        Self {
            contributions: vec![PoseContribution {
                resource: resource.to_string(),
                frame,
                weight: 1.0,
            }],
        }
    }

    /// Scale every contribution, dropping any that end up weightless.
    pub fn scaled(mut self, weight: f64) -> Self {
        for c in &mut self.contributions {
            c.weight *= weight;
        }
        self.contributions.retain(|c| c.weight > 0.0);
        self
    }

    pub fn merge(&mut self, other: PoseResult) {
        self.contributions.extend(other.contributions);
    }

    /// Total blend weight across contributions.
    pub fn total_weight(&self) -> f64 {
        self.contributions.iter().map(|c| c.weight).sum()
    }
}

/// Outputs of one graph tick.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TickOutput {
    pub pose: PoseResult,
    pub triggers: Triggers,
}

/// Walk the tree once for this tick. The map is read-only; the only state
/// mutated in place is each clip's frame cursor.
pub fn evaluate(root: &mut Node, vars: &VariantMap, dt: f64) -> TickOutput {
    let mut triggers = Triggers::new();
    let pose = root.evaluate(vars, dt, &mut triggers);
    TickOutput { pose, triggers }
}
