//! Canned graph descriptions shared by blendtree-core integration tests and
//! benches.

/// Well-formed document: a `blendLinear` root fanning over three clips.
pub const BLEND_THREE_CLIPS: &str = r#"{
    "version": "1.0",
    "root": {
        "id": "blend",
        "type": "blendLinear",
        "data": { "alpha": 0.5, "alphaVar": "blendAlpha" },
        "children": [
            {
                "id": "test01",
                "type": "clip",
                "data": {
                    "resource": "test01.anim",
                    "startFrame": 1.0,
                    "endFrame": 20.0,
                    "timeScale": 1.0,
                    "loopFlag": false
                },
                "children": []
            },
            {
                "id": "test02",
                "type": "clip",
                "data": {
                    "resource": "test02.anim",
                    "startFrame": 2.0,
                    "endFrame": 21.0,
                    "timeScale": 0.9,
                    "loopFlag": true
                },
                "children": []
            },
            {
                "id": "test03",
                "type": "clip",
                "data": {
                    "resource": "test03.anim",
                    "startFrame": 0.0,
                    "endFrame": 10.0,
                    "timeScale": 1.0,
                    "loopFlag": true
                },
                "children": []
            }
        ]
    }
}"#;

/// Single looping clip with every override bound to a variable.
pub const CLIP_ALL_VARS: &str = r#"{
    "version": "1.0",
    "root": {
        "id": "walk",
        "type": "clip",
        "data": {
            "resource": "walk.anim",
            "startFrame": 0.0,
            "endFrame": 30.0,
            "timeScale": 1.0,
            "loopFlag": true,
            "startFrameVar": "walkStart",
            "endFrameVar": "walkEnd",
            "timeScaleVar": "walkSpeed",
            "loopFlagVar": "walkLoop"
        },
        "children": []
    }
}"#;

/// Clip whose resource identifier is empty; the loader must reject it.
pub const CLIP_EMPTY_RESOURCE: &str = r#"{
    "root": {
        "id": "broken",
        "type": "clip",
        "data": { "resource": "", "startFrame": 0.0, "endFrame": 10.0 },
        "children": []
    }
}"#;

/// Blend with no children; the loader must reject it.
pub const BLEND_NO_CHILDREN: &str = r#"{
    "root": {
        "id": "empty",
        "type": "blendLinear",
        "data": { "alpha": 0.0 },
        "children": []
    }
}"#;

/// Clip that illegally carries a child; the loader must reject it.
pub const CLIP_WITH_CHILD: &str = r#"{
    "root": {
        "id": "parent",
        "type": "clip",
        "data": { "resource": "parent.anim", "startFrame": 0.0, "endFrame": 10.0 },
        "children": [
            {
                "id": "orphan",
                "type": "clip",
                "data": { "resource": "orphan.anim", "startFrame": 0.0, "endFrame": 10.0 },
                "children": []
            }
        ]
    }
}"#;

/// Node of a type this engine does not know.
pub const UNKNOWN_NODE_TYPE: &str = r#"{
    "root": {
        "id": "mystery",
        "type": "stateMachine",
        "data": {},
        "children": []
    }
}"#;

/// Clip whose end frame precedes its start frame.
pub const CLIP_INVERTED_RANGE: &str = r#"{
    "root": {
        "id": "inverted",
        "type": "clip",
        "data": { "resource": "inverted.anim", "startFrame": 10.0, "endFrame": 2.0 },
        "children": []
    }
}"#;
