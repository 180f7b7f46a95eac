/// Audio context state as far as scheduling cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    Running,
    Suspended,
    Closed,
}

/// What to do with a tone the engine asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Schedule,
    /// Drop the tone. A suspended context's clock is frozen, so anything
    /// scheduled now would pile up and sound all at once on resume.
    Skip { request_resume: bool },
}

/// At most one resume request is in flight at a time.
pub fn playback_for(state: ContextState, resume_in_flight: bool) -> Playback {
    match state {
        ContextState::Running => Playback::Schedule,
        ContextState::Suspended => Playback::Skip {
            request_resume: !resume_in_flight,
        },
        ContextState::Closed => Playback::Skip {
            request_resume: false,
        },
    }
}
