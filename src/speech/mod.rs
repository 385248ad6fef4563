//! Speech synthesis system

pub mod backends;
pub mod chunker;
pub mod coordinator;
pub mod remote;
pub mod synth;

pub use coordinator::Coordinator;
pub use synth::{create_engine, Engine, VoiceDescriptor};
