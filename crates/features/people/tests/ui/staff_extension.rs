use conf_people::{AllowedPerson, Category, Staff, StaffRole};
use std::borrow::Cow;

#[derive(Debug)]
struct Admin {
    staff: Staff,
    clearance: u8,
}

impl StaffRole for Admin {
    fn staff(&self) -> &Staff {
        &self.staff
    }

    fn staff_mut(&mut self) -> &mut Staff {
        &mut self.staff
    }

    fn title(&self) -> Cow<'static, str> {
        format!("Admin L{}", self.clearance).into()
    }
}

fn main() {
    let person = AllowedPerson::staff(Admin { staff: Staff::new("Gu", "Ra", "S"), clearance: 3 });
    assert_eq!(person.category(), Category::Staff);
    assert_eq!(person.to_string(), "Admin L3: Gu Ra (hat: S)");
}
