//! Typed entities for every back-office screen.
//!
//! Each entity pairs a row type (what the list endpoint returns) with an
//! input type (what create/update submit).

#[macro_use]
mod choice;
mod catalog;
mod commerce;
mod contact;
mod content;
mod resource;
mod user;
pub mod validation;

pub use catalog::{Category, CategoryInput, Product, ProductInput, ServiceInput, ServiceOffering};
pub use commerce::{
    DeliveryFrequency, Order, OrderInput, OrderStatus, Reservation, ReservationInput,
    ReservationStatus, Subscription, SubscriptionInput, SubscriptionStatus,
};
pub use contact::{
    ContactInfo, ContactInfoInput, ContactInfoKind, ContactMessage, ContactMessageInput,
    ContactSubject, ContactSubjectInput, MessageStatus,
};
pub use content::{BlogPost, BlogPostInput, Faq, FaqInput, Testimonial, TestimonialInput};
pub use resource::{flag_cell, opt_cell, Draft, Featurable, HasStatus, Resource};
pub use user::{User, UserInput, UserRole};
pub use validation::ValidationError;

#[cfg(test)]
#[path = "../model_tests.rs"]
mod model_tests;
