pub mod processor;
pub mod random;
pub mod view;

pub use processor::Processor;
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use view::ConversionView;
