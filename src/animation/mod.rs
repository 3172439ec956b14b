pub mod driver;
pub mod scale_math;
pub mod state;

pub use driver::{AnimationDriver, DriverState};
pub use state::{AnimationState, StepOutcome, StepTuning};
