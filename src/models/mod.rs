pub use cta::*;
pub use features::*;
pub use footer::*;
pub use hero::*;
pub use items::*;
pub use merge::*;
pub use navbar::*;
pub use newsletter::*;
pub use pricing::*;

mod cta;
mod features;
mod footer;
mod hero;
mod items;
mod merge;
mod navbar;
mod newsletter;
mod pricing;
