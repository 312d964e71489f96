//! Country / state / city containment chain.
//!
//! Containment is strict: a state belongs to exactly one country and a city
//! to exactly one state.

pub mod city;
pub mod country;
pub mod state;

pub use city::{CreateCity, GeoCity, UpdateCity};
pub use country::{CreateCountry, GeoCountry, UpdateCountry};
pub use state::{CreateState, GeoState, UpdateState};
