//! Leadership module - the ten personas and how each one biases risk.

mod bias;
mod persona;
mod style;

pub use bias::StyleBias;
pub use persona::Persona;
pub use style::LeadershipStyle;
