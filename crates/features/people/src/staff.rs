//! The staff branch, the one place the hierarchy is open.
//!
//! `Staff` itself is a closed model type like the others, but anyone may define a staff
//! specialization by embedding a `Staff` and implementing [`StaffRole`]:
//!
//! ```rust
//! use conf_people::{AllowedPerson, Staff, StaffRole};
//! use std::borrow::Cow;
//!
//! #[derive(Debug)]
//! struct FrontDesk {
//!     staff: Staff,
//!     desk: u8,
//! }
//!
//! impl StaffRole for FrontDesk {
//!     fn staff(&self) -> &Staff {
//!         &self.staff
//!     }
//!
//!     fn staff_mut(&mut self) -> &mut Staff {
//!         &mut self.staff
//!     }
//!
//!     fn title(&self) -> Cow<'static, str> {
//!         format!("Front Desk #{}", self.desk).into()
//!     }
//! }
//!
//! let person = AllowedPerson::staff(FrontDesk { staff: Staff::new("Di", "Oh", "M"), desk: 2 });
//! assert_eq!(person.to_string(), "Front Desk #2: Di Oh (hat: M)");
//! assert_eq!(person.staff_role::<FrontDesk>().map(|d| d.desk), Some(2));
//! ```

use crate::person::{Classified, Person};
use crate::private::Sealed;
use conf_domain::taxonomy::Category;
use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use tracing::trace;

/// Event staff. Carries no unique identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Staff {
    person: Person,
    hat_size: String,
}

impl Staff {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        hat_size: impl Into<String>,
    ) -> Self {
        let staff = Self { person: Person::new(first_name, last_name), hat_size: hat_size.into() };
        trace!(category = %Category::Staff, "Registered");
        staff
    }

    #[must_use]
    pub fn hat_size(&self) -> &str {
        &self.hat_size
    }

    pub fn set_hat_size(&mut self, hat_size: impl Into<String>) {
        self.hat_size = hat_size.into();
    }
}

impl Sealed for Staff {}

impl Classified for Staff {
    const CATEGORY: Category = Category::Staff;

    fn person(&self) -> &Person {
        &self.person
    }

    fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }
}

impl fmt::Display for Staff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_role(f, self)
    }
}

/// Extension point for staff specializations (security, admin, front desk, ...).
///
/// Deliberately not sealed. The `Any` bound lets [`AllowedPerson::staff_role`] recover the
/// concrete type.
///
/// [`AllowedPerson::staff_role`]: crate::AllowedPerson::staff_role
pub trait StaffRole: Any + fmt::Debug + Send + Sync {
    fn staff(&self) -> &Staff;

    fn staff_mut(&mut self) -> &mut Staff;

    /// Human-readable role name used in renderings.
    fn title(&self) -> Cow<'static, str> {
        Cow::Borrowed("Staff")
    }
}

impl StaffRole for Staff {
    fn staff(&self) -> &Self {
        self
    }

    fn staff_mut(&mut self) -> &mut Self {
        self
    }
}

pub(crate) fn write_role(
    f: &mut fmt::Formatter<'_>,
    role: &(impl StaffRole + ?Sized),
) -> fmt::Result {
    let staff = role.staff();
    write!(f, "{}: {} (hat: {})", role.title(), staff.person, staff.hat_size)
}
