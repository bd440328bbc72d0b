use crate::person::{Classified, Person};
use crate::private::Sealed;
use conf_domain::identity::{IdGenerator, UniqueId};
use conf_domain::taxonomy::Category;
use std::fmt;
use tracing::trace;

/// A vendor or sponsor staffing a booth. Closed: nothing specializes it.
#[derive(Debug, PartialEq, Eq)]
pub struct VendorSponsor {
    person: Person,
    booth_name: String,
    unique_id: UniqueId,
}

impl VendorSponsor {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        booth_name: impl Into<String>,
        ids: &(impl IdGenerator + ?Sized),
    ) -> Self {
        let vendor = Self {
            person: Person::new(first_name, last_name),
            booth_name: booth_name.into(),
            unique_id: ids.generate(),
        };
        trace!(category = %Category::VendorSponsor, id = %vendor.unique_id, "Registered");
        vendor
    }

    #[must_use]
    pub fn booth_name(&self) -> &str {
        &self.booth_name
    }

    pub fn set_booth_name(&mut self, booth_name: impl Into<String>) {
        self.booth_name = booth_name.into();
    }

    #[must_use]
    pub const fn unique_id(&self) -> &UniqueId {
        &self.unique_id
    }
}

impl Sealed for VendorSponsor {}

impl Classified for VendorSponsor {
    const CATEGORY: Category = Category::VendorSponsor;

    fn person(&self) -> &Person {
        &self.person
    }

    fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    fn unique_id(&self) -> Option<&UniqueId> {
        Some(&self.unique_id)
    }
}

impl fmt::Display for VendorSponsor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { person, booth_name, unique_id } = self;
        write!(f, "VendorSponsor: {person} (booth: {booth_name}, id: {unique_id})")
    }
}
