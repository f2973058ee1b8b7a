//! BlendLinear: position-weighted interpolation across ordered children.

use crate::time::Triggers;
use crate::vars::VariantMap;

use super::{Node, PoseResult};

/// Alpha is a position along the child list: it is clamped to
/// `[0, children - 1]` and the result interpolates between the two adjacent
/// children by its fractional part. Every child is advanced every tick, so
/// cursors and triggers stay live even at zero weight.
#[derive(Clone, Debug)]
pub struct BlendLinear {
    id: String,
    alpha: f64,
    alpha_var: Option<String>,
    children: Vec<Node>,
}

impl BlendLinear {
    pub fn new(id: impl Into<String>, alpha: f64, children: Vec<Node>) -> Self {
        Self {
            id: id.into(),
            alpha,
            alpha_var: None,
            children,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn set_alpha_var(&mut self, name: impl Into<String>) {
        self.alpha_var = Some(name.into());
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn evaluate(&mut self, vars: &VariantMap, dt: f64, triggers: &mut Triggers) -> PoseResult {
        if let Some(name) = &self.alpha_var {
            self.alpha = vars.lookup_float(name, self.alpha);
        }

        let results: Vec<PoseResult> = self
            .children
            .iter_mut()
            .map(|child| child.evaluate(vars, dt, triggers))
            .collect();
        if results.is_empty() {
            return PoseResult::default();
        }

        let max_index = (results.len() - 1) as f64;
        let clamped = self.alpha.clamp(0.0, max_index);
        let prev = clamped.floor() as usize;
        let next = clamped.ceil() as usize;
        let frac = clamped - clamped.floor();

        let mut pose = results[prev].clone().scaled(1.0 - frac);
        if next != prev {
            pose.merge(results[next].clone().scaled(frac));
        }
        pose
    }
}
