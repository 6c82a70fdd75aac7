//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `person_form`: The person form view

mod field_renderer;
mod person_form;

pub use person_form::draw as draw_person_form;
