use conf_people::{
    AllowedPerson, Alumnus, Attendee, AttendeeKind, Category, Classified, NanoIdGenerator,
    PaymentType, PersonError, Speaker, Specializes, Staff, StaffRole, VendorSponsor,
};
use std::borrow::Cow;

#[test]
fn attendee_with_credit_payment() {
    let ids = NanoIdGenerator::default();
    let attendee = Attendee::new("Ana", "Lee", PaymentType::Credit, &ids).expect("valid attendee");

    assert_eq!(attendee.payment_type(), PaymentType::Credit);
    assert!(!attendee.unique_id().is_empty());
    assert_eq!(attendee.first_name(), "Ana");
    assert_eq!(attendee.last_name(), "Lee");
}

#[test]
fn attendee_without_payment_is_invalid_argument() {
    let ids = NanoIdGenerator::default();
    let result = Attendee::new("Ana", "Lee", PaymentType::None, &ids);

    assert!(matches!(result, Err(PersonError::InvalidArgument { .. })));
}

#[test]
fn alumnus_is_also_an_attendee() {
    let ids = NanoIdGenerator::default();
    let alumnus = Alumnus::new("Bo", "Kim", PaymentType::Cash, &ids).expect("valid alumnus");

    let generalized: &Attendee = alumnus.generalize();
    assert_eq!(generalized.payment_type(), PaymentType::Cash);

    let person = AllowedPerson::from(alumnus);
    assert!(person.as_alumnus().is_some());
    assert!(person.as_attendee().is_some());
    assert!(person.is_a(Category::Alumnus));
    assert!(person.is_a(Category::Attendee));
}

#[test]
fn speakers_with_equal_fields_get_distinct_ids() {
    let ids = NanoIdGenerator::default();
    let first = Speaker::new("Cy", "Ng", "L", &ids);
    let second = Speaker::new("Cy", "Ng", "L", &ids);

    assert_eq!(first.person(), second.person());
    assert_eq!(first.shirt_size(), second.shirt_size());
    assert_ne!(first.unique_id(), second.unique_id());
    assert_ne!(first, second);
}

#[derive(Debug)]
struct Security {
    staff: Staff,
    radio_channel: u8,
}

impl StaffRole for Security {
    fn staff(&self) -> &Staff {
        &self.staff
    }

    fn staff_mut(&mut self) -> &mut Staff {
        &mut self.staff
    }

    fn title(&self) -> Cow<'static, str> {
        Cow::Borrowed("Security")
    }
}

fn badge(person: &AllowedPerson) -> String {
    match person {
        AllowedPerson::Attendee(AttendeeKind::Regular(a)) => {
            format!("attendee/{}", a.payment_type())
        }
        AllowedPerson::Attendee(AttendeeKind::Alumnus(a)) => {
            format!("alumnus/{}", a.payment_type())
        }
        AllowedPerson::Speaker(s) => format!("speaker/{}", s.shirt_size()),
        AllowedPerson::Staff(role) => match person.staff_role::<Security>() {
            Some(security) => format!("security/{}", security.radio_channel),
            None => format!("{}/{}", role.title().to_lowercase(), role.staff().hat_size()),
        },
        AllowedPerson::VendorSponsor(v) => format!("vendor/{}", v.booth_name()),
    }
}

#[test]
fn exhaustive_match_covers_every_category_and_open_staff() {
    let ids = NanoIdGenerator::default();
    let people = [
        AllowedPerson::from(Attendee::new("Ana", "Lee", PaymentType::Credit, &ids).unwrap()),
        AllowedPerson::from(Alumnus::new("Bo", "Kim", PaymentType::Cash, &ids).unwrap()),
        AllowedPerson::from(Speaker::new("Cy", "Ng", "L", &ids)),
        AllowedPerson::from(Staff::new("Di", "Oh", "M")),
        AllowedPerson::staff(Security { staff: Staff::new("Ed", "Po", "XL"), radio_channel: 7 }),
        AllowedPerson::from(VendorSponsor::new("Fa", "Qi", "Acme", &ids)),
    ];

    let badges: Vec<_> = people.iter().map(badge).collect();
    assert_eq!(
        badges,
        [
            "attendee/credit",
            "alumnus/cash",
            "speaker/L",
            "staff/M",
            "security/7",
            "vendor/Acme"
        ]
    );
}

#[test]
fn identifier_survives_field_mutation() {
    let ids = NanoIdGenerator::default();
    let mut vendor = VendorSponsor::new("Fa", "Qi", "Acme", &ids);
    let before = vendor.unique_id().clone();

    vendor.set_booth_name("Globex");
    vendor.set_first_name("Fay");
    vendor.set_last_name("Quinn");

    assert_eq!(vendor.unique_id(), &before);
    assert_eq!(vendor.booth_name(), "Globex");
    assert_eq!(vendor.first_name(), "Fay");
}

#[test]
fn attendee_identifier_survives_payment_changes() {
    let ids = NanoIdGenerator::default();
    let mut attendee = Attendee::new("Ana", "Lee", PaymentType::Credit, &ids).unwrap();
    let before = attendee.unique_id().clone();

    attendee.set_payment_type(PaymentType::Invoice).expect("accepted payment type");
    assert_eq!(attendee.unique_id(), &before);

    assert!(attendee.set_payment_type(PaymentType::None).is_err());
    assert_eq!(attendee.unique_id(), &before);
    assert_eq!(attendee.payment_type(), PaymentType::Invoice);
}

#[test]
fn speaker_identifier_survives_shirt_change() {
    let ids = NanoIdGenerator::default();
    let mut speaker = Speaker::new("Cy", "Ng", "L", &ids);
    let before = speaker.unique_id().clone();

    speaker.set_shirt_size("XL");
    speaker.set_first_name("Cyrus");

    assert_eq!(speaker.unique_id(), &before);
    assert_eq!(speaker.shirt_size(), "XL");
}

#[test]
fn alumnus_stays_an_alumnus_through_mutation() {
    let ids = NanoIdGenerator::default();
    let alumnus = Alumnus::new("Bo", "Kim", PaymentType::Cash, &ids).unwrap();
    let mut person = AllowedPerson::from(alumnus);
    let before = person.unique_id().cloned();

    person.person_mut().set_last_name("Park");
    if let AllowedPerson::Attendee(kind) = &mut person {
        assert!(kind.set_payment_type(PaymentType::None).is_err());
        kind.set_payment_type(PaymentType::Check).expect("accepted payment type");
    }

    assert_eq!(person.category(), Category::Alumnus);
    assert_eq!(person.unique_id().cloned(), before);
    assert_eq!(person.last_name(), "Park");
    assert_eq!(person.as_attendee().map(Attendee::payment_type), Some(PaymentType::Check));
}

#[test]
fn rendering_summarizes_fields() {
    let ids = || "T0K3N".to_owned();
    let attendee = Attendee::new("Ana", "Lee", PaymentType::Credit, &ids).unwrap();
    let attendee = AllowedPerson::from(attendee);
    let speaker = AllowedPerson::from(Speaker::new("Cy", "Ng", "L", &ids));
    let vendor = AllowedPerson::from(VendorSponsor::new("Fa", "Qi", "Acme", &ids));

    assert_eq!(attendee.to_string(), "Attendee: Ana Lee (payment: credit, id: T0K3N)");
    assert_eq!(speaker.to_string(), "Speaker: Cy Ng (shirt: L, id: T0K3N)");
    assert_eq!(vendor.to_string(), "VendorSponsor: Fa Qi (booth: Acme, id: T0K3N)");
}

#[test]
fn payment_text_is_validated_before_construction() {
    let ids = NanoIdGenerator::default();

    let parsed: PaymentType = "debit".parse().expect("known payment type");
    assert!(Attendee::new("Ana", "Lee", parsed, &ids).is_ok());

    let err = "bitcoin".parse::<PaymentType>().expect_err("unknown payment type");
    assert!(matches!(err, PersonError::InvalidArgument { .. }));

    let none: PaymentType = "none".parse().expect("sentinel parses");
    assert!(Attendee::new("Ana", "Lee", none, &ids).is_err());
}
