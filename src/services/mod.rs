//! Per-entity services, one REST endpoint per operation.
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | list | GET | `/api/admin/<entity>` |
//! | get | GET | `/api/admin/<entity>/{id}` |
//! | create | POST | `/api/admin/<entity>` |
//! | update | PUT | `/api/admin/<entity>/{id}` |
//! | delete | DELETE | `/api/admin/<entity>/{id}` |
//! | status | PATCH | `/api/admin/<entity>/{id}/status` |
//! | featured | PATCH | `/api/admin/<entity>/{id}/featured` |
//! | display order | PATCH | `/api/admin/<entity>/{id}/display-order` |
//! | batched reorder | PATCH | `/api/admin/<entity>/reorder` |

mod resource;

pub use resource::ResourceService;

use crate::model::{
    BlogPost, Category, ContactInfo, ContactMessage, ContactSubject, Faq, Order, Product,
    Reservation, ServiceOffering, Subscription, Testimonial, User,
};

pub type CategoryService = ResourceService<Category>;
pub type ProductService = ResourceService<Product>;
pub type OfferingService = ResourceService<ServiceOffering>;
pub type OrderService = ResourceService<Order>;
pub type ReservationService = ResourceService<Reservation>;
pub type SubscriptionService = ResourceService<Subscription>;
pub type BlogPostService = ResourceService<BlogPost>;
pub type TestimonialService = ResourceService<Testimonial>;
pub type ContactInfoService = ResourceService<ContactInfo>;
pub type ContactSubjectService = ResourceService<ContactSubject>;
pub type ContactMessageService = ResourceService<ContactMessage>;
pub type FaqService = ResourceService<Faq>;
pub type UserService = ResourceService<User>;
