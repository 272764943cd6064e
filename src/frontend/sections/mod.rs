//! Page sections composed by the home page

mod cta;
mod features;
mod hero;
mod pricing;

pub use cta::Cta;
pub use features::Features;
pub use hero::Hero;
pub use pricing::Pricing;
