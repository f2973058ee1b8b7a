//! Graph-description JSON → node tree.
//!
//! The description is a hierarchical document: every node carries an `id`, a
//! `type`, a type-specific `data` block and ordered `children`. Parsing
//! converts a raw serde mirror of that document into the canonical
//! [`Node`] tree, validating per-type arity and parameters as it goes; any
//! defect fails the whole load and no partial tree escapes.

use serde::Deserialize;

use crate::error::GraphLoadError;
use crate::nodes::{BlendLinear, Clip, Node};

const SUPPORTED_VERSION: &str = "1.0";

pub fn parse_graph_json(source: &str) -> Result<Node, GraphLoadError> {
    let doc: GraphDoc =
        serde_json::from_str(source).map_err(|e| GraphLoadError::Json(e.to_string()))?;
    if let Some(version) = &doc.version {
        if version != SUPPORTED_VERSION {
            log::warn!("graph description version '{version}' is not {SUPPORTED_VERSION}; parsing anyway");
        }
    }
    build_node(doc.root)
}

fn build_node(raw: RawNode) -> Result<Node, GraphLoadError> {
    match raw.kind.as_str() {
        "clip" => build_clip(raw),
        "blendLinear" => build_blend_linear(raw),
        other => Err(GraphLoadError::UnknownNodeType(other.to_string())),
    }
}

fn build_clip(raw: RawNode) -> Result<Node, GraphLoadError> {
    if !raw.children.is_empty() {
        return Err(GraphLoadError::BadArity {
            id: raw.id,
            kind: "clip",
            got: raw.children.len(),
        });
    }
    let data = raw.data;
    let resource = match data.resource {
        Some(r) if !r.is_empty() => r,
        _ => return Err(GraphLoadError::EmptyResource { id: raw.id }),
    };
    if data.end_frame < data.start_frame {
        return Err(GraphLoadError::InvalidRange {
            id: raw.id,
            start: data.start_frame,
            end: data.end_frame,
        });
    }

    let mut clip = Clip::new(
        raw.id,
        resource,
        data.start_frame,
        data.end_frame,
        data.time_scale,
        data.loop_flag,
    );
    if let Some(name) = data.start_frame_var {
        clip.set_start_frame_var(name);
    }
    if let Some(name) = data.end_frame_var {
        clip.set_end_frame_var(name);
    }
    if let Some(name) = data.time_scale_var {
        clip.set_time_scale_var(name);
    }
    if let Some(name) = data.loop_flag_var {
        clip.set_loop_flag_var(name);
    }
    Ok(Node::Clip(clip))
}

fn build_blend_linear(raw: RawNode) -> Result<Node, GraphLoadError> {
    if raw.children.is_empty() {
        return Err(GraphLoadError::BadArity {
            id: raw.id,
            kind: "blendLinear",
            got: 0,
        });
    }
    let children = raw
        .children
        .into_iter()
        .map(build_node)
        .collect::<Result<Vec<_>, _>>()?;

    let mut blend = BlendLinear::new(raw.id, raw.data.alpha.unwrap_or(0.0), children);
    if let Some(name) = raw.data.alpha_var {
        blend.set_alpha_var(name);
    }
    Ok(Node::BlendLinear(blend))
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct GraphDoc {
    #[serde(default)]
    version: Option<String>,
    root: RawNode,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: RawData,
    #[serde(default)]
    children: Vec<RawNode>,
}

fn default_time_scale() -> f64 {
    1.0
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawData {
    // clip
    resource: Option<String>,
    #[serde(default)]
    start_frame: f64,
    #[serde(default)]
    end_frame: f64,
    #[serde(default = "default_time_scale")]
    time_scale: f64,
    #[serde(default)]
    loop_flag: bool,
    start_frame_var: Option<String>,
    end_frame_var: Option<String>,
    time_scale_var: Option<String>,
    loop_flag_var: Option<String>,
    // blendLinear
    alpha: Option<f64>,
    alpha_var: Option<String>,
}
