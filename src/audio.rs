use crate::grid::constants::{
    DRUM_DECAY_SEC, DRUM_FREQUENCY_HZ, MASTER_GAIN, NOTE_DECAY_SEC, NOTE_RELEASE_FLOOR,
};
use crate::grid::{playback_for, ContextState, Playback, ToneRequest};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("audio requires a secure context")]
    InsecureContext,
    #[error("audio unavailable: {0}")]
    Unsupported(String),
    #[error("audio disabled after a failed start")]
    Disabled,
    #[error("audio context suspended until a user gesture")]
    Suspended,
    #[error("{node} error: {detail}")]
    Node { node: &'static str, detail: String },
}

fn node_err(node: &'static str) -> impl Fn(JsValue) -> AudioError {
    move |e| AudioError::Node {
        node,
        detail: format!("{:?}", e),
    }
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32) -> Result<web::GainNode, AudioError> {
    let g = web::GainNode::new(audio_ctx)
        .map_err(node_err("GainNode"))?;
    g.gain().set_value(value);
    Ok(g)
}

#[derive(Clone, Copy, Debug)]
enum Decay {
    Exponential,
    Linear,
}

struct AudioOut {
    ctx: web::AudioContext,
    master: web::GainNode,
    resume_in_flight: Rc<Cell<bool>>,
}

impl AudioOut {
    fn open() -> Result<Self, AudioError> {
        let Some(window) = web::window() else {
            return Err(AudioError::Unsupported("no window".into()));
        };
        if !window.is_secure_context() {
            return Err(AudioError::InsecureContext);
        }
        let ctx = web::AudioContext::new()
            .map_err(|e| AudioError::Unsupported(format!("{:?}", e)))?;
        let master = create_gain(&ctx, MASTER_GAIN)?;
        master
            .connect_with_audio_node(&ctx.destination())
            .map_err(node_err("master gain"))?;
        log::info!("[audio] context ready at {} Hz", ctx.sample_rate());
        Ok(Self {
            ctx,
            master,
            resume_in_flight: Rc::new(Cell::new(false)),
        })
    }

    fn state(&self) -> ContextState {
        match self.ctx.state() {
            web::AudioContextState::Running => ContextState::Running,
            web::AudioContextState::Closed => ContextState::Closed,
            _ => ContextState::Suspended,
        }
    }

    // Browsers start contexts suspended; the promise only settles once the
    // page has seen a user gesture.
    fn request_resume(&self) {
        let promise = match self.ctx.resume() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[audio] resume error: {:?}", e);
                return;
            }
        };
        self.resume_in_flight.set(true);
        let in_flight = self.resume_in_flight.clone();
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => log::info!("[audio] context resumed"),
                Err(e) => log::warn!("[audio] resume rejected: {:?}", e),
            }
            in_flight.set(false);
        });
    }

    fn one_shot(
        &self,
        waveform: web::OscillatorType,
        frequency_hz: f32,
        volume: f32,
        decay: Decay,
        duration_sec: f64,
    ) -> Result<(), AudioError> {
        let osc = web::OscillatorNode::new(&self.ctx)
            .map_err(node_err("OscillatorNode"))?;
        osc.set_type(waveform);
        osc.frequency().set_value(frequency_hz);
        let g = create_gain(&self.ctx, volume)?;

        let t0 = self.ctx.current_time();
        let t1 = t0 + duration_sec;
        let env = g.gain();
        let envelope_err = node_err("gain envelope");
        env.set_value_at_time(volume, t0).map_err(&envelope_err)?;
        let ramp = match decay {
            Decay::Exponential => env.exponential_ramp_to_value_at_time(NOTE_RELEASE_FLOOR, t1),
            Decay::Linear => env.linear_ramp_to_value_at_time(0.0, t1),
        };
        ramp.map_err(&envelope_err)?;

        osc.connect_with_audio_node(&g)
            .map_err(node_err("OscillatorNode"))?;
        g.connect_with_audio_node(&self.master)
            .map_err(node_err("GainNode"))?;
        osc.start_with_when(t0).map_err(node_err("OscillatorNode"))?;
        osc.stop_with_when(t1).map_err(node_err("OscillatorNode"))?;
        Ok(())
    }
}

enum Backend {
    Pending,
    Ready(AudioOut),
    Unavailable,
}

/// Fire-and-forget tone synthesis. The audio context is created on first use
/// and reused; once creation fails every call returns an error without
/// retrying.
pub struct ToneGenerator {
    backend: Backend,
}

impl ToneGenerator {
    pub fn new() -> Self {
        Self {
            backend: Backend::Pending,
        }
    }

    fn backend(&mut self) -> Result<&AudioOut, AudioError> {
        if let Backend::Pending = self.backend {
            match AudioOut::open() {
                Ok(out) => self.backend = Backend::Ready(out),
                Err(e) => {
                    self.backend = Backend::Unavailable;
                    return Err(e);
                }
            }
        }
        match &self.backend {
            Backend::Ready(out) => Ok(out),
            _ => Err(AudioError::Disabled),
        }
    }

    /// The output, if a tone scheduled now would sound now. A suspended
    /// context gets one resume request and the tone is dropped.
    fn output(&mut self) -> Result<&AudioOut, AudioError> {
        let out = self.backend()?;
        let state = out.state();
        match playback_for(state, out.resume_in_flight.get()) {
            Playback::Schedule => Ok(out),
            Playback::Skip { request_resume } => {
                if request_resume {
                    out.request_resume();
                }
                match state {
                    ContextState::Closed => Err(AudioError::Disabled),
                    _ => Err(AudioError::Suspended),
                }
            }
        }
    }

    /// Called from user-gesture events, the only place browsers let a
    /// suspended context start. Creates the context on first use.
    pub fn unlock(&mut self) {
        match self.backend() {
            Ok(out) => {
                if out.state() == ContextState::Suspended {
                    out.request_resume();
                }
            }
            Err(e) => log::debug!("[audio] unlock skipped: {}", e),
        }
    }

    pub fn play(&mut self, request: ToneRequest) -> Result<(), AudioError> {
        match request {
            ToneRequest::Note {
                frequency_hz,
                volume,
            } => self.play_tone(frequency_hz, volume),
            ToneRequest::Drum { volume } => self.play_drum(volume),
        }
    }

    /// Triangle wave with an exponential decay.
    pub fn play_tone(&mut self, frequency_hz: f32, volume: f32) -> Result<(), AudioError> {
        self.output()?.one_shot(
            web::OscillatorType::Triangle,
            frequency_hz,
            volume,
            Decay::Exponential,
            NOTE_DECAY_SEC,
        )
    }

    /// Low square-wave thump with a short linear decay.
    pub fn play_drum(&mut self, volume: f32) -> Result<(), AudioError> {
        self.output()?.one_shot(
            web::OscillatorType::Square,
            DRUM_FREQUENCY_HZ,
            volume,
            Decay::Linear,
            DRUM_DECAY_SEC,
        )
    }

    /// Releases the audio context; later calls report `Disabled`.
    pub fn close(&mut self) {
        if let Backend::Ready(out) = std::mem::replace(&mut self.backend, Backend::Unavailable) {
            _ = out.ctx.close();
        }
    }
}
