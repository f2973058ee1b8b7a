//! Clip: leaf node playing one animation resource over a frame range.

use crate::time::{accumulate_time, Triggers};
use crate::vars::VariantMap;

use super::PoseResult;

/// Playback state. `Done` is only reachable with the loop flag off and is
/// terminal until an external reset (`set_frame`) or the flag flipping back
/// to looping via a variable binding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum PlayState {
    Playing,
    Done,
}

#[derive(Clone, Debug)]
pub struct Clip {
    id: String,
    resource: String,
    start_frame: f64,
    end_frame: f64,
    time_scale: f64,
    loop_flag: bool,
    frame: f64,
    state: PlayState,

    // Optional VariantMap names that override the static attributes each
    // tick they are present.
    start_frame_var: Option<String>,
    end_frame_var: Option<String>,
    time_scale_var: Option<String>,
    loop_flag_var: Option<String>,
}

impl Clip {
    pub fn new(
        id: impl Into<String>,
        resource: impl Into<String>,
        start_frame: f64,
        end_frame: f64,
        time_scale: f64,
        loop_flag: bool,
    ) -> Self {
        Self {
            id: id.into(),
            resource: resource.into(),
            start_frame,
            end_frame,
            time_scale,
            loop_flag,
            frame: start_frame,
            state: PlayState::Playing,
            start_frame_var: None,
            end_frame_var: None,
            time_scale_var: None,
            loop_flag_var: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn start_frame(&self) -> f64 {
        self.start_frame
    }

    pub fn end_frame(&self) -> f64 {
        self.end_frame
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn loop_flag(&self) -> bool {
        self.loop_flag
    }

    /// Current fractional playback position.
    pub fn frame(&self) -> f64 {
        self.frame
    }

    pub fn is_done(&self) -> bool {
        self.state == PlayState::Done
    }

    pub fn set_start_frame_var(&mut self, name: impl Into<String>) {
        self.start_frame_var = Some(name.into());
    }

    pub fn set_end_frame_var(&mut self, name: impl Into<String>) {
        self.end_frame_var = Some(name.into());
    }

    pub fn set_time_scale_var(&mut self, name: impl Into<String>) {
        self.time_scale_var = Some(name.into());
    }

    pub fn set_loop_flag_var(&mut self, name: impl Into<String>) {
        self.loop_flag_var = Some(name.into());
    }

    /// Explicit seek. Clamps into the frame range and re-arms a finished
    /// clip.
    pub fn set_frame(&mut self, frame: f64) {
        self.frame = frame.clamp(self.start_frame, self.end_frame);
        self.state = PlayState::Playing;
    }

    /// Advance one tick: pull bound overrides out of `vars`, step the frame
    /// cursor, forward triggers. The resolved overrides are stored back into
    /// the node's attributes so callers can observe the effective values.
    pub fn evaluate(&mut self, vars: &VariantMap, dt: f64, triggers: &mut Triggers) -> PoseResult {
        if let Some(name) = &self.start_frame_var {
            self.start_frame = vars.lookup_float(name, self.start_frame);
        }
        if let Some(name) = &self.end_frame_var {
            self.end_frame = vars.lookup_float(name, self.end_frame);
        }
        if let Some(name) = &self.time_scale_var {
            self.time_scale = vars.lookup_float(name, self.time_scale);
        }
        if let Some(name) = &self.loop_flag_var {
            self.loop_flag = vars.lookup_bool(name, self.loop_flag);
        }
        if self.loop_flag {
            // looping clips never finish
            self.state = PlayState::Playing;
        }

        let mut tick = Triggers::new();
        self.frame = accumulate_time(
            self.start_frame,
            self.end_frame,
            self.time_scale,
            self.frame,
            dt,
            self.loop_flag,
            &self.id,
            &mut tick,
        );

        for trigger in tick {
            if trigger.ends_with("OnDone") {
                if self.state == PlayState::Done {
                    // already finished; report the clamped frame without
                    // re-announcing it
                    continue;
                }
                self.state = PlayState::Done;
            }
            triggers.push(trigger);
        }

        PoseResult::from_clip(&self.resource, self.frame)
    }
}
