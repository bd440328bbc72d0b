//! The attendee branch: `Attendee` and its single sanctioned child, `Alumnus`.

use crate::person::{Classified, Person, Specializes};
use crate::private::Sealed;
use conf_domain::identity::{IdGenerator, UniqueId};
use conf_domain::payment::PaymentType;
use conf_domain::taxonomy::Category;
use conf_domain::{PersonError, PersonErrorExt};
use std::fmt;
use std::ops::Deref;
use tracing::{debug, trace};

/// A paying attendee.
///
/// Construction is a validating factory: the payment type is checked before any other
/// field is built, so a value of this type always carries a real payment type.
#[derive(Debug, PartialEq, Eq)]
pub struct Attendee {
    person: Person,
    payment_type: PaymentType,
    unique_id: UniqueId,
}

impl Attendee {
    /// Registers a new attendee with a fresh identifier from `ids`.
    ///
    /// # Errors
    /// Returns [`PersonError::InvalidArgument`] if `payment_type` is [`PaymentType::None`].
    /// Nothing is built in that case and `ids` is not consulted.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        payment_type: PaymentType,
        ids: &(impl IdGenerator + ?Sized),
    ) -> Result<Self, PersonError> {
        Self::register(Category::Attendee, first_name, last_name, payment_type, ids)
    }

    fn register(
        category: Category,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        payment_type: PaymentType,
        ids: &(impl IdGenerator + ?Sized),
    ) -> Result<Self, PersonError> {
        let payment_type = require_payment(payment_type).inspect_err(|err| {
            debug!(%category, error = %err, "Rejected registration");
        })?;

        let attendee = Self {
            person: Person::new(first_name, last_name),
            payment_type,
            unique_id: ids.generate(),
        };
        trace!(%category, id = %attendee.unique_id, "Registered");

        Ok(attendee)
    }

    #[must_use]
    pub const fn payment_type(&self) -> PaymentType {
        self.payment_type
    }

    /// Changes the payment type, applying the same check as construction.
    ///
    /// # Errors
    /// Returns [`PersonError::InvalidArgument`] for [`PaymentType::None`]; the current
    /// payment type is kept.
    pub fn set_payment_type(&mut self, payment_type: PaymentType) -> Result<(), PersonError> {
        self.payment_type = require_payment(payment_type).context("Updating payment type")?;
        Ok(())
    }

    #[must_use]
    pub const fn unique_id(&self) -> &UniqueId {
        &self.unique_id
    }
}

fn require_payment(payment_type: PaymentType) -> Result<PaymentType, PersonError> {
    if payment_type.is_none() {
        return Err(PersonError::invalid_argument("Invalid payment type"));
    }
    Ok(payment_type)
}

impl Sealed for Attendee {}

impl Classified for Attendee {
    const CATEGORY: Category = Category::Attendee;

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

impl fmt::Display for Attendee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_attendee(f, Category::Attendee, self)
    }
}

fn write_attendee(f: &mut fmt::Formatter<'_>, category: Category, a: &Attendee) -> fmt::Result {
    write!(f, "{category}: {} (payment: {}, id: {})", a.person, a.payment_type, a.unique_id)
}

/// A returning attendee.
///
/// Adds nothing to [`Attendee`]: same fields, same validation. It dereferences to the
/// attendee it specializes and cannot be specialized further.
///
/// Only shared access to the inner attendee is handed out, so an alumnus can never be
/// rebuilt around some other attendee.
#[derive(Debug, PartialEq, Eq)]
pub struct Alumnus(Attendee);

impl Alumnus {
    /// # Errors
    /// Same as [`Attendee::new`].
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        payment_type: PaymentType,
        ids: &(impl IdGenerator + ?Sized),
    ) -> Result<Self, PersonError> {
        Attendee::register(Category::Alumnus, first_name, last_name, payment_type, ids).map(Self)
    }

    #[must_use]
    pub const fn unique_id(&self) -> &UniqueId {
        &self.0.unique_id
    }

    #[must_use]
    pub const fn as_attendee(&self) -> &Attendee {
        &self.0
    }

    /// # Errors
    /// Same as [`Attendee::set_payment_type`].
    pub fn set_payment_type(&mut self, payment_type: PaymentType) -> Result<(), PersonError> {
        self.0.set_payment_type(payment_type)
    }

    /// Drops the alumnus status, keeping every field including the identifier.
    #[must_use]
    pub fn into_attendee(self) -> Attendee {
        self.0
    }
}

impl Deref for Alumnus {
    type Target = Attendee;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Sealed for Alumnus {}

impl Classified for Alumnus {
    const CATEGORY: Category = Category::Alumnus;

    fn person(&self) -> &Person {
        &self.0.person
    }

    fn person_mut(&mut self) -> &mut Person {
        &mut self.0.person
    }

    fn unique_id(&self) -> Option<&UniqueId> {
        Some(&self.0.unique_id)
    }
}

impl Specializes<Attendee> for Alumnus {
    fn generalize(&self) -> &Attendee {
        &self.0
    }
}

impl fmt::Display for Alumnus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_attendee(f, Category::Alumnus, &self.0)
    }
}

/// The closed set of attendee shapes: a plain attendee or an alumnus.
#[derive(Debug, PartialEq, Eq)]
pub enum AttendeeKind {
    Regular(Attendee),
    Alumnus(Alumnus),
}

impl AttendeeKind {
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Regular(_) => Category::Attendee,
            Self::Alumnus(_) => Category::Alumnus,
        }
    }

    /// The attendee data, whichever shape holds it.
    #[must_use]
    pub const fn attendee(&self) -> &Attendee {
        match self {
            Self::Regular(attendee) => attendee,
            Self::Alumnus(alumnus) => alumnus.as_attendee(),
        }
    }

    pub fn person_mut(&mut self) -> &mut Person {
        match self {
            Self::Regular(attendee) => attendee.person_mut(),
            Self::Alumnus(alumnus) => alumnus.person_mut(),
        }
    }

    /// # Errors
    /// Same as [`Attendee::set_payment_type`].
    pub fn set_payment_type(&mut self, payment_type: PaymentType) -> Result<(), PersonError> {
        match self {
            Self::Regular(attendee) => attendee.set_payment_type(payment_type),
            Self::Alumnus(alumnus) => alumnus.set_payment_type(payment_type),
        }
    }

    #[must_use]
    pub const fn is_alumnus(&self) -> bool {
        matches!(self, Self::Alumnus(_))
    }
}

impl fmt::Display for AttendeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regular(attendee) => fmt::Display::fmt(attendee, f),
            Self::Alumnus(alumnus) => fmt::Display::fmt(alumnus, f),
        }
    }
}

impl From<Attendee> for AttendeeKind {
    fn from(attendee: Attendee) -> Self {
        Self::Regular(attendee)
    }
}

impl From<Alumnus> for AttendeeKind {
    fn from(alumnus: Alumnus) -> Self {
        Self::Alumnus(alumnus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn sequential() -> impl Fn() -> String {
        let next = Cell::new(0_u32);
        move || {
            next.set(next.get() + 1);
            format!("att-{}", next.get())
        }
    }

    #[test]
    fn valid_payment_builds_attendee() {
        let ids = sequential();
        let attendee = Attendee::new("Ana", "Lee", PaymentType::Credit, &ids).unwrap();

        assert_eq!(attendee.first_name(), "Ana");
        assert_eq!(attendee.last_name(), "Lee");
        assert_eq!(attendee.payment_type(), PaymentType::Credit);
        assert_eq!(attendee.unique_id().as_str(), "att-1");
    }

    #[test]
    fn absent_payment_is_rejected_before_anything_is_built() {
        let calls = Cell::new(0_u32);
        let ids = || {
            calls.set(calls.get() + 1);
            "unused".to_owned()
        };

        let err = Attendee::new("Ana", "Lee", PaymentType::None, &ids).unwrap_err();
        assert!(matches!(err, PersonError::InvalidArgument { .. }));
        assert_eq!(calls.get(), 0, "no identifier may be minted for a rejected attendee");
    }

    #[test]
    fn setter_revalidates_and_keeps_previous_value() {
        let ids = sequential();
        let mut attendee = Attendee::new("Ana", "Lee", PaymentType::Cash, &ids).unwrap();

        attendee.set_payment_type(PaymentType::Debit).unwrap();
        assert_eq!(attendee.payment_type(), PaymentType::Debit);

        let err = attendee.set_payment_type(PaymentType::None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument (Updating payment type): Invalid payment type"
        );
        assert_eq!(attendee.payment_type(), PaymentType::Debit);
    }

    #[test]
    fn alumnus_forwards_validation() {
        let ids = sequential();
        assert!(Alumnus::new("Bo", "Kim", PaymentType::None, &ids).is_err());

        let alumnus = Alumnus::new("Bo", "Kim", PaymentType::Cash, &ids).unwrap();
        assert_eq!(alumnus.payment_type(), PaymentType::Cash);
        assert_eq!(alumnus.generalize().unique_id().as_str(), "att-1");
    }

    #[test]
    fn display_names_the_category() {
        let ids = sequential();
        let alumnus = Alumnus::new("Bo", "Kim", PaymentType::Cash, &ids).unwrap();
        assert_eq!(alumnus.to_string(), "Alumnus: Bo Kim (payment: cash, id: att-1)");

        let attendee = alumnus.into_attendee();
        assert_eq!(attendee.to_string(), "Attendee: Bo Kim (payment: cash, id: att-1)");
    }

    #[test]
    fn kind_exposes_attendee_data_for_both_shapes() {
        let ids = sequential();
        let regular = Attendee::new("A", "B", PaymentType::Check, &ids).unwrap();
        let regular = AttendeeKind::from(regular);
        let alumnus = Alumnus::new("C", "D", PaymentType::Invoice, &ids).unwrap();
        let mut alumnus = AttendeeKind::from(alumnus);

        assert_eq!(regular.category(), Category::Attendee);
        assert_eq!(alumnus.category(), Category::Alumnus);
        assert!(alumnus.is_alumnus());
        assert_eq!(alumnus.attendee().payment_type(), PaymentType::Invoice);

        alumnus.set_payment_type(PaymentType::Debit).unwrap();
        assert!(alumnus.set_payment_type(PaymentType::None).is_err());
        alumnus.person_mut().set_first_name("Cee");
        assert!(alumnus.is_alumnus());
        assert_eq!(alumnus.attendee().payment_type(), PaymentType::Debit);
        assert_eq!(alumnus.attendee().first_name(), "Cee");
        assert_eq!(alumnus.attendee().unique_id().as_str(), "att-2");
    }
}
