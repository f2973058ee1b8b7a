use blendtree_core::{
    evaluate, BlendLinear, Clip, Node, NodeKind, Variant, VariantMap, FRAMES_PER_SECOND,
};

fn frames_to_sec(frames: f64) -> f64 {
    frames / FRAMES_PER_SECOND
}

fn clip_node(id: &str, start: f64, end: f64, loop_flag: bool) -> Node {
    Node::Clip(Clip::new(id, format!("{id}.anim"), start, end, 1.0, loop_flag))
}

#[test]
fn clip_internal_state() {
    let clip = Clip::new("my anim clip", "idle.anim", 2.0, 20.0, 1.1, true);
    assert_eq!(clip.id(), "my anim clip");
    assert_eq!(clip.resource(), "idle.anim");
    assert_eq!(clip.start_frame(), 2.0);
    assert_eq!(clip.end_frame(), 20.0);
    assert_eq!(clip.time_scale(), 1.1);
    assert!(clip.loop_flag());
    assert_eq!(clip.frame(), 2.0);

    let node = Node::Clip(clip);
    assert_eq!(node.kind(), NodeKind::Clip);
    assert_eq!(node.child_count(), 0);
}

#[test]
fn clip_evaluate_advances_loops_and_finishes() {
    let mut vars = VariantMap::new();
    vars.set("FalseVar", Variant::Bool(false));

    let mut clip = Clip::new("myClipNode", "idle.anim", 2.0, 22.0, 1.0, true);

    let mut triggers = Vec::new();
    let pose = clip.evaluate(&vars, frames_to_sec(10.0), &mut triggers);
    assert_eq!(clip.frame(), 12.0);
    assert!(triggers.is_empty());
    assert_eq!(pose.contributions.len(), 1);
    assert_eq!(pose.contributions[0].resource, "idle.anim");
    assert_eq!(pose.contributions[0].frame, 12.0);
    assert_eq!(pose.contributions[0].weight, 1.0);

    // twelve more frames pass the loop point; frame 3 and not 4, because of
    // the extra frame between end and start
    triggers.clear();
    clip.evaluate(&vars, frames_to_sec(12.0), &mut triggers);
    assert_eq!(clip.frame(), 3.0);
    assert!(triggers.iter().any(|t| t == "myClipNodeOnLoop"));

    // flipping the loop flag off through its binding pauses at the end
    triggers.clear();
    clip.set_loop_flag_var("FalseVar");
    clip.evaluate(&vars, frames_to_sec(20.0), &mut triggers);
    assert_eq!(clip.frame(), 22.0);
    assert!(triggers.iter().any(|t| t == "myClipNodeOnDone"));
    assert!(clip.is_done());
}

#[test]
fn clip_done_is_reported_once_until_reset() {
    let vars = VariantMap::new();
    let mut node = clip_node("oneShot", 0.0, 10.0, false);

    let out = evaluate(&mut node, &vars, frames_to_sec(11.0));
    let clip = node.as_clip().expect("clip");
    assert_eq!(clip.frame(), 10.0);
    assert_eq!(out.triggers, vec!["oneShotOnDone".to_string()]);
    assert!(clip.is_done());

    // finished clips keep reporting the clamped end frame, silently
    let out = evaluate(&mut node, &vars, frames_to_sec(1.0));
    assert_eq!(node.as_clip().expect("clip").frame(), 10.0);
    assert!(out.triggers.is_empty());

    // an explicit seek re-arms the state machine
    node.as_clip_mut().expect("clip").set_frame(9.0);
    assert!(!node.as_clip().expect("clip").is_done());
    let out = evaluate(&mut node, &vars, frames_to_sec(1.0));
    assert_eq!(node.as_clip().expect("clip").frame(), 10.0);
    assert_eq!(out.triggers, vec!["oneShotOnDone".to_string()]);
}

#[test]
fn clip_bindings_pull_values_from_the_map() {
    let mut vars = VariantMap::new();
    vars.set("startFrame2", Variant::Float(22.0));
    vars.set("endFrame2", Variant::Float(100.0));
    vars.set("timeScale2", Variant::Float(1.2));
    vars.set("loopFlag2", Variant::Bool(false));

    let mut clip = Clip::new("myClipNode", "idle.anim", 2.0, 22.0, 1.0, true);
    clip.set_start_frame_var("startFrame2");
    clip.set_end_frame_var("endFrame2");
    clip.set_time_scale_var("timeScale2");
    clip.set_loop_flag_var("loopFlag2");

    let mut triggers = Vec::new();
    clip.evaluate(&vars, frames_to_sec(0.1), &mut triggers);

    // the bound values land in the clip's internal state
    assert_eq!(clip.start_frame(), 22.0);
    assert_eq!(clip.end_frame(), 100.0);
    assert_eq!(clip.time_scale(), 1.2);
    assert!(!clip.loop_flag());
}

#[test]
fn blend_midpoint_weights_adjacent_children() {
    let children = vec![
        clip_node("a", 0.0, 10.0, false),
        clip_node("b", 0.0, 10.0, false),
        clip_node("c", 0.0, 10.0, false),
    ];
    let mut root = Node::BlendLinear(BlendLinear::new("blend", 0.5, children));

    let vars = VariantMap::new();
    let out = evaluate(&mut root, &vars, frames_to_sec(5.0));

    // alpha 0.5 sits between the first two children; the third drops out
    assert_eq!(out.pose.contributions.len(), 2);
    assert_eq!(out.pose.contributions[0].resource, "a.anim");
    assert_eq!(out.pose.contributions[0].frame, 5.0);
    assert_eq!(out.pose.contributions[0].weight, 0.5);
    assert_eq!(out.pose.contributions[1].resource, "b.anim");
    assert_eq!(out.pose.contributions[1].weight, 0.5);
    assert_eq!(out.pose.total_weight(), 1.0);
    assert!(out.triggers.is_empty());
}

#[test]
fn blend_evaluates_every_child_and_orders_triggers() {
    let children = vec![
        clip_node("a", 0.0, 1.0, false),
        clip_node("b", 0.0, 2.0, false),
        clip_node("c", 0.0, 3.0, false),
    ];
    let mut root = Node::BlendLinear(BlendLinear::new("blend", 0.5, children));

    // a large step finishes all three clips in one tick; triggers arrive in
    // child order even for the zero-weight child
    let vars = VariantMap::new();
    let out = evaluate(&mut root, &vars, frames_to_sec(10.0));
    assert_eq!(
        out.triggers,
        vec![
            "aOnDone".to_string(),
            "bOnDone".to_string(),
            "cOnDone".to_string(),
        ]
    );
}

#[test]
fn blend_alpha_binding_and_clamping() {
    let children = vec![
        clip_node("a", 0.0, 10.0, true),
        clip_node("b", 0.0, 10.0, true),
        clip_node("c", 0.0, 10.0, true),
    ];
    let mut blend = BlendLinear::new("blend", 0.0, children);
    blend.set_alpha_var("blendAlpha");
    let mut root = Node::BlendLinear(blend);

    // an integer alpha selects a single child at full weight
    let mut vars = VariantMap::new();
    vars.set("blendAlpha", Variant::Float(2.0));
    let out = evaluate(&mut root, &vars, frames_to_sec(1.0));
    assert_eq!(out.pose.contributions.len(), 1);
    assert_eq!(out.pose.contributions[0].resource, "c.anim");
    assert_eq!(out.pose.contributions[0].weight, 1.0);

    // out-of-range alphas clamp to the child list
    let mut vars = VariantMap::new();
    vars.set("blendAlpha", Variant::Float(9.0));
    let out = evaluate(&mut root, &vars, frames_to_sec(1.0));
    assert_eq!(out.pose.contributions.len(), 1);
    assert_eq!(out.pose.contributions[0].resource, "c.anim");
}

#[test]
fn nested_blends_compose_weights() {
    let inner = Node::BlendLinear(BlendLinear::new(
        "inner",
        0.5,
        vec![
            clip_node("a", 0.0, 10.0, true),
            clip_node("b", 0.0, 10.0, true),
        ],
    ));
    let mut root = Node::BlendLinear(BlendLinear::new(
        "outer",
        0.5,
        vec![inner, clip_node("c", 0.0, 10.0, true)],
    ));

    let vars = VariantMap::new();
    let out = evaluate(&mut root, &vars, frames_to_sec(1.0));
    assert_eq!(out.pose.contributions.len(), 3);
    assert_eq!(out.pose.contributions[0].resource, "a.anim");
    assert_eq!(out.pose.contributions[0].weight, 0.25);
    assert_eq!(out.pose.contributions[1].resource, "b.anim");
    assert_eq!(out.pose.contributions[1].weight, 0.25);
    assert_eq!(out.pose.contributions[2].resource, "c.anim");
    assert_eq!(out.pose.contributions[2].weight, 0.5);
    assert_eq!(out.pose.total_weight(), 1.0);
}
