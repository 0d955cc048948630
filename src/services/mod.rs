pub mod analysis;
pub mod atomic;
pub mod encoding;
pub mod history;
pub mod phrasebook;
pub mod pipeline;
pub mod sign;
pub mod translator;
pub mod tts;
pub mod tts_types;
