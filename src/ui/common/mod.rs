//! Common reusable UI components
//!
//! Building blocks shared by the landing page sections: buttons, cards,
//! layout containers, form fields, the modal shell and the auto-advance timer.

pub mod auto_advance;
pub mod button;
pub mod card;
pub mod container;
pub mod form;
pub mod modal;

pub use auto_advance::use_auto_advance;
pub use button::{Button, ButtonSize, ButtonVariant, LinkButton, button_classes};
pub use card::Card;
pub use container::{Container, SectionHeading};
pub use form::{FormField, RangeField, SelectField, parse_slider_value};
pub use modal::BaseModal;
