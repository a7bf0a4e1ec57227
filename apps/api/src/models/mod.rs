pub mod curriculum;
pub mod request;

pub use curriculum::{CurriculumSeries, TeachingPoint, WeekContent};
pub use request::{Audience, GenerationRequest};
