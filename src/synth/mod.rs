//! Synthetic recording generation for spike sorting validation
//! Location: src/synth/mod.rs

pub mod composer;
pub mod noise;
pub mod timeline;
pub mod waveform;
pub mod profiles;

pub mod config;

pub use composer::{MultiElectrodeRecording, RecordingComposer};
pub use config::RecordingConfig;
pub use profiles::RecordingProfile;
pub use timeline::SpikeTimeline;
pub use waveform::{WaveformSynthesizer, WaveformTemplate};
