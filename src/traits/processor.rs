use crate::processors::TransformRequest;
use crate::traits::RandomSource;

/// A single humanization pass over a request payload.
///
/// Processors are synchronous and infallible on string input. All randomness
/// comes from the supplied [`RandomSource`] so a scripted source yields exact,
/// repeatable output.
pub trait Processor: Send + Sync {
    fn process(&self, req: &TransformRequest, rng: &mut dyn RandomSource) -> String;

    fn name(&self) -> &'static str;
}
