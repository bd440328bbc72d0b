use crate::person::{Classified, Person};
use crate::private::Sealed;
use conf_domain::identity::{IdGenerator, UniqueId};
use conf_domain::taxonomy::Category;
use std::fmt;
use tracing::trace;

/// A conference speaker. Closed: nothing specializes it.
#[derive(Debug, PartialEq, Eq)]
pub struct Speaker {
    person: Person,
    shirt_size: String,
    unique_id: UniqueId,
}

impl Speaker {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        shirt_size: impl Into<String>,
        ids: &(impl IdGenerator + ?Sized),
    ) -> Self {
        let speaker = Self {
            person: Person::new(first_name, last_name),
            shirt_size: shirt_size.into(),
            unique_id: ids.generate(),
        };
        trace!(category = %Category::Speaker, id = %speaker.unique_id, "Registered");
        speaker
    }

    #[must_use]
    pub fn shirt_size(&self) -> &str {
        &self.shirt_size
    }

    pub fn set_shirt_size(&mut self, shirt_size: impl Into<String>) {
        self.shirt_size = shirt_size.into();
    }

    #[must_use]
    pub const fn unique_id(&self) -> &UniqueId {
        &self.unique_id
    }
}

impl Sealed for Speaker {}

impl Classified for Speaker {
    const CATEGORY: Category = Category::Speaker;

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

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Speaker: {} (shirt: {}, id: {})", self.person, self.shirt_size, self.unique_id)
    }
}
