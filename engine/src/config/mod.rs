// Engine configuration: listen address and projection horizons.
pub mod durations;
pub mod settings;

pub use durations::Durations;
pub use settings::EngineSettings;
