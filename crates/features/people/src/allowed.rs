//! # Allowed Persons
//!
//! [`AllowedPerson`] is the closed set of top-level categories. It is an ordinary
//! exhaustive enum, so downstream `match`es need no wildcard arm, and no new variant can
//! appear without changing this file.

use crate::attendee::{Alumnus, Attendee, AttendeeKind};
use crate::person::{Classified, Person};
use crate::speaker::Speaker;
use crate::staff::{Staff, StaffRole, write_role};
use crate::vendor::VendorSponsor;
use conf_domain::identity::UniqueId;
use conf_domain::taxonomy::Category;
use std::any::Any;
use std::fmt;

/// Any person allowed at the event.
///
/// The attendee slot is itself closed ([`AttendeeKind`]). The staff slot holds a trait
/// object so that staff specializations defined elsewhere fit without touching this enum.
#[derive(Debug)]
pub enum AllowedPerson {
    Attendee(AttendeeKind),
    Speaker(Speaker),
    Staff(Box<dyn StaffRole>),
    VendorSponsor(VendorSponsor),
}

impl AllowedPerson {
    /// Wraps any staff role, including specializations from other crates.
    pub fn staff(role: impl StaffRole) -> Self {
        Self::Staff(Box::new(role))
    }

    /// The most specific known category. Staff specializations report [`Category::Staff`].
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Attendee(kind) => kind.category(),
            Self::Speaker(_) => Category::Speaker,
            Self::Staff(_) => Category::Staff,
            Self::VendorSponsor(_) => Category::VendorSponsor,
        }
    }

    /// Whether this person belongs to `category`, directly or through a specialization.
    #[must_use]
    pub fn is_a(&self, category: Category) -> bool {
        self.category().is_a(category)
    }

    #[must_use]
    pub fn person(&self) -> &Person {
        match self {
            Self::Attendee(kind) => kind.attendee().person(),
            Self::Speaker(speaker) => speaker.person(),
            Self::Staff(role) => role.staff().person(),
            Self::VendorSponsor(vendor) => vendor.person(),
        }
    }

    pub fn person_mut(&mut self) -> &mut Person {
        match self {
            Self::Attendee(kind) => kind.person_mut(),
            Self::Speaker(speaker) => speaker.person_mut(),
            Self::Staff(role) => role.staff_mut().person_mut(),
            Self::VendorSponsor(vendor) => vendor.person_mut(),
        }
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        self.person().first_name()
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        self.person().last_name()
    }

    /// The identifier assigned at construction; staff have none.
    #[must_use]
    pub const fn unique_id(&self) -> Option<&UniqueId> {
        match self {
            Self::Attendee(kind) => Some(kind.attendee().unique_id()),
            Self::Speaker(speaker) => Some(speaker.unique_id()),
            Self::Staff(_) => None,
            Self::VendorSponsor(vendor) => Some(vendor.unique_id()),
        }
    }

    /// The attendee data for plain attendees and alumni alike.
    #[must_use]
    pub const fn as_attendee(&self) -> Option<&Attendee> {
        match self {
            Self::Attendee(kind) => Some(kind.attendee()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_alumnus(&self) -> Option<&Alumnus> {
        match self {
            Self::Attendee(AttendeeKind::Alumnus(alumnus)) => Some(alumnus),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_speaker(&self) -> Option<&Speaker> {
        match self {
            Self::Speaker(speaker) => Some(speaker),
            _ => None,
        }
    }

    /// The staff data of any staff role.
    #[must_use]
    pub fn as_staff(&self) -> Option<&Staff> {
        match self {
            Self::Staff(role) => Some(role.staff()),
            _ => None,
        }
    }

    /// Recovers a concrete staff role, e.g. a specialization defined by a collaborator.
    #[must_use]
    pub fn staff_role<R: StaffRole>(&self) -> Option<&R> {
        match self {
            Self::Staff(role) => {
                let role: &dyn StaffRole = &**role;
                let any: &dyn Any = role;
                any.downcast_ref::<R>()
            }
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_vendor_sponsor(&self) -> Option<&VendorSponsor> {
        match self {
            Self::VendorSponsor(vendor) => Some(vendor),
            _ => None,
        }
    }
}

impl fmt::Display for AllowedPerson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attendee(kind) => fmt::Display::fmt(kind, f),
            Self::Speaker(speaker) => fmt::Display::fmt(speaker, f),
            Self::Staff(role) => write_role(f, &**role),
            Self::VendorSponsor(vendor) => fmt::Display::fmt(vendor, f),
        }
    }
}

impl From<AttendeeKind> for AllowedPerson {
    fn from(kind: AttendeeKind) -> Self {
        Self::Attendee(kind)
    }
}

impl From<Attendee> for AllowedPerson {
    fn from(attendee: Attendee) -> Self {
        Self::Attendee(AttendeeKind::Regular(attendee))
    }
}

impl From<Alumnus> for AllowedPerson {
    fn from(alumnus: Alumnus) -> Self {
        Self::Attendee(AttendeeKind::Alumnus(alumnus))
    }
}

impl From<Speaker> for AllowedPerson {
    fn from(speaker: Speaker) -> Self {
        Self::Speaker(speaker)
    }
}

impl From<Staff> for AllowedPerson {
    fn from(staff: Staff) -> Self {
        Self::staff(staff)
    }
}

impl From<VendorSponsor> for AllowedPerson {
    fn from(vendor: VendorSponsor) -> Self {
        Self::VendorSponsor(vendor)
    }
}
