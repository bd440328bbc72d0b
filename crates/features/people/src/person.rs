//! The base person and the sealed traits that pin down the hierarchy.

use crate::private::Sealed;
use conf_domain::identity::UniqueId;
use conf_domain::taxonomy::Category;
use std::fmt;

/// Name fields shared by every category.
///
/// Only the variant constructors in this crate can create one from names. A detached
/// copy (via `Clone`) is plain data: it cannot be turned into any category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    first_name: String,
    last_name: String,
}

impl Person {
    pub(crate) fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self { first_name: first_name.into(), last_name: last_name.into() }
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Implemented by exactly the five model types: `Attendee`, `Alumnus`, `Speaker`,
/// `Staff` and `VendorSponsor`.
///
/// The trait is sealed. Downstream crates can call it but never implement it, which is
/// what keeps the category set closed.
pub trait Classified: Sealed {
    const CATEGORY: Category;

    fn person(&self) -> &Person;

    fn person_mut(&mut self) -> &mut Person;

    /// The identifier assigned at construction. `None` for categories without one.
    fn unique_id(&self) -> Option<&UniqueId> {
        None
    }

    fn first_name(&self) -> &str {
        self.person().first_name()
    }

    fn last_name(&self) -> &str {
        self.person().last_name()
    }

    fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.person_mut().set_first_name(first_name);
    }

    fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.person_mut().set_last_name(last_name);
    }
}

/// `Self` is a sanctioned specialization of `P`.
///
/// Sealed as well: the only implementation is `Alumnus: Specializes<Attendee>`, matching
/// the bounded closure policy of the attendee branch.
pub trait Specializes<P: Classified>: Classified {
    /// Views the value as its parent category.
    fn generalize(&self) -> &P;
}
