//! # People
//!
//! The closed classification of persons at a conference.
//!
//! ## Shape
//!
//! * [`AllowedPerson`] enumerates the four top-level categories: attendee, speaker,
//!   staff and vendor/sponsor. No other category can ever be constructed.
//! * The attendee branch is bounded: [`AttendeeKind`] is either a plain [`Attendee`] or an
//!   [`Alumnus`], and nothing else.
//! * [`Speaker`], [`VendorSponsor`] and [`Alumnus`] are closed.
//! * The staff branch is open: any type implementing [`StaffRole`] fits into
//!   [`AllowedPerson::Staff`].
//!
//! The same policy is available as data through [`Category::closure`].
//!
//! ## Construction
//!
//! Every constructor takes an [`IdGenerator`] for the categories that carry an identifier.
//! Attendee and alumnus constructors validate the payment type first and return
//! [`PersonError::InvalidArgument`] without building anything if it is absent.
//!
//! ```rust
//! use conf_people::{AllowedPerson, Attendee, AttendeeKind, NanoIdGenerator, PaymentType};
//!
//! let ids = NanoIdGenerator::default();
//! let ana = Attendee::new("Ana", "Lee", PaymentType::Credit, &ids).unwrap();
//! assert_eq!(ana.payment_type(), PaymentType::Credit);
//!
//! assert!(Attendee::new("Ana", "Lee", PaymentType::None, &ids).is_err());
//!
//! let badge = match AllowedPerson::from(ana) {
//!     AllowedPerson::Attendee(AttendeeKind::Regular(a)) => format!("ATTENDEE {}", a.unique_id()),
//!     AllowedPerson::Attendee(AttendeeKind::Alumnus(a)) => format!("ALUMNUS {}", a.unique_id()),
//!     AllowedPerson::Speaker(s) => format!("SPEAKER {}", s.unique_id()),
//!     AllowedPerson::Staff(role) => role.title().into_owned(),
//!     AllowedPerson::VendorSponsor(v) => format!("BOOTH {}", v.booth_name()),
//! };
//! assert!(badge.starts_with("ATTENDEE "));
//! ```
//!
//! ## What does not compile
//!
//! A category outside the fixed set does not exist:
//!
//! ```rust,compile_fail
//! use conf_people::AllowedPerson;
//!
//! fn volunteer(name: String) -> AllowedPerson {
//!     AllowedPerson::Volunteer(name)
//! }
//! ```
//!
//! Outside types cannot join the hierarchy, because [`Classified`] is sealed:
//!
//! ```rust,compile_fail
//! use conf_people::{Category, Classified, Person};
//!
//! struct Volunteer(Person);
//!
//! impl Classified for Volunteer {
//!     const CATEGORY: Category = Category::Staff;
//!     fn person(&self) -> &Person { &self.0 }
//!     fn person_mut(&mut self) -> &mut Person { &mut self.0 }
//! }
//! ```
//!
//! Attendee admits only the alumnus shape:
//!
//! ```rust,compile_fail
//! use conf_people::{Attendee, AttendeeKind};
//!
//! fn honorary(attendee: Attendee) -> AttendeeKind {
//!     AttendeeKind::Honorary(attendee)
//! }
//! ```
//!
//! Closed branches have no specialization hook:
//!
//! ```rust,compile_fail
//! use conf_people::{Speaker, Specializes};
//!
//! struct Keynote(Speaker);
//!
//! impl Specializes<Speaker> for Keynote {
//!     fn generalize(&self) -> &Speaker { &self.0 }
//! }
//! ```
//!
//! Validation cannot be bypassed with a struct literal:
//!
//! ```rust,compile_fail
//! use conf_people::{Alumnus, Attendee};
//!
//! fn promote(attendee: Attendee) -> Alumnus {
//!     Alumnus(attendee)
//! }
//! ```
//!
//! Nor by swapping the attendee inside an existing alumnus:
//!
//! ```rust,compile_fail
//! use conf_people::{Alumnus, Attendee};
//!
//! fn promote(alumnus: &mut Alumnus, attendee: Attendee) -> Attendee {
//!     std::mem::replace(&mut *alumnus, attendee)
//! }
//! ```
//!
//! And matching is exhaustive over the closed set:
//!
//! ```rust,compile_fail
//! use conf_people::AllowedPerson;
//!
//! fn has_badge_photo(person: &AllowedPerson) -> bool {
//!     match person {
//!         AllowedPerson::Attendee(_) => false,
//!         AllowedPerson::Speaker(_) => true,
//!         AllowedPerson::Staff(_) => true,
//!     }
//! }
//! ```

mod allowed;
mod attendee;
mod person;
mod speaker;
mod staff;
mod vendor;

pub use crate::allowed::AllowedPerson;
pub use crate::attendee::{Alumnus, Attendee, AttendeeKind};
pub use crate::person::{Classified, Person, Specializes};
pub use crate::speaker::Speaker;
pub use crate::staff::{Staff, StaffRole};
pub use crate::vendor::VendorSponsor;

pub use conf_domain::identity::{IdGenerator, UniqueId};
pub use conf_domain::payment::PaymentType;
pub use conf_domain::taxonomy::{Category, Closure};
pub use conf_domain::{PersonError, PersonErrorExt};
pub use conf_kernel::NanoIdGenerator;

mod private {
    pub trait Sealed {}
}
