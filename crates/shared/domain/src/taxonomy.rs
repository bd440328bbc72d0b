//! # Category Taxonomy
//!
//! The fixed list of person categories and the closure policy of every branch.
//!
//! ```text
//! Person
//! ├── Attendee        bounded: only Alumnus
//! │   └── Alumnus     closed
//! ├── Speaker         closed
//! ├── Staff           open: any collaborator may specialize it
//! └── VendorSponsor   closed
//! ```
//!
//! This table is metadata. The people crate enforces the same shape structurally with a
//! closed enum and sealed traits; tests keep the two in agreement.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Every category a person can belong to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Attendee,
    Alumnus,
    Speaker,
    Staff,
    VendorSponsor,
}

/// Whether a branch may be specialized further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closure {
    /// No further specialization.
    Closed,
    /// Exactly the listed children, nothing else.
    Bounded(&'static [Category]),
    /// Open to specializations defined outside the model.
    Open,
}

impl Closure {
    /// Whether `child` is an allowed specialization under this policy.
    #[must_use]
    pub fn permits(self, child: Category) -> bool {
        match self {
            Self::Closed => false,
            Self::Bounded(children) => children.contains(&child),
            Self::Open => true,
        }
    }

    /// Whether collaborators outside the model may add specializations.
    #[must_use]
    pub const fn accepts_external(self) -> bool {
        matches!(self, Self::Open)
    }
}

const ATTENDEE_CHILDREN: &[Category] = &[Category::Alumnus];

impl Category {
    /// The category this one specializes, if any.
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Alumnus => Some(Self::Attendee),
            Self::Attendee | Self::Speaker | Self::Staff | Self::VendorSponsor => None,
        }
    }

    #[must_use]
    pub const fn closure(self) -> Closure {
        match self {
            Self::Attendee => Closure::Bounded(ATTENDEE_CHILDREN),
            Self::Staff => Closure::Open,
            Self::Alumnus | Self::Speaker | Self::VendorSponsor => Closure::Closed,
        }
    }

    /// Named children of this category. Open branches have none: their specializations
    /// live outside the taxonomy.
    #[must_use]
    pub const fn children(self) -> &'static [Self] {
        match self.closure() {
            Closure::Bounded(children) => children,
            Closure::Closed | Closure::Open => &[],
        }
    }

    /// Whether `child` is a sanctioned direct specialization of `self`.
    #[must_use]
    pub fn permits(self, child: Self) -> bool {
        child.parent() == Some(self) && self.closure().permits(child)
    }

    #[must_use]
    pub const fn is_top_level(self) -> bool {
        self.parent().is_none()
    }

    /// The direct variants of a person: Attendee, Speaker, Staff, `VendorSponsor`.
    pub fn top_level() -> impl Iterator<Item = Self> {
        Self::iter().filter(|c| c.is_top_level())
    }

    /// Whether `self` is `ancestor` or specializes it, directly or transitively.
    #[must_use]
    pub fn is_a(self, ancestor: Self) -> bool {
        std::iter::successors(Some(self), |c| c.parent()).any(|c| c == ancestor)
    }

    /// Whether persons of this category carry an opaque unique identifier.
    #[must_use]
    pub const fn has_unique_id(self) -> bool {
        !matches!(self, Self::Staff)
    }
}
