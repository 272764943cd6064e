//! Reusable UI components for the landing page

mod button;
mod feature_card;
mod footer;
mod nav;

pub use button::{ButtonVariant, NavButton, SubmitButton};
pub use feature_card::{CardTone, FeatureCard};
pub use footer::Footer;
pub use nav::Nav;
