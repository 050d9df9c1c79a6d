use staged_builder_core::demo::{long_story_example, short_story_example};
use staged_builder_core::Address;

#[test]
fn long_story_example_matches_documented_person() {
    let person = long_story_example();

    assert_eq!(person.id(), 325);
    assert_eq!(person.age(), 16);
    assert_eq!(person.first_name(), "Peter");
    assert_eq!(person.middle_name(), Some("M"));
    assert_eq!(person.last_name(), "Newford");
    assert_eq!(person.shipping_address(), &Address::new("Ship to"));
    assert_eq!(person.billing_address(), Some(&Address::new("Bill to")));
}

#[test]
fn short_story_example_matches_documented_record() {
    let value = short_story_example();

    assert_eq!(value.mandatory_field_one(), "Mandatory Value");
    assert!(!value.mandatory_field_two().id().is_nil());
    assert_eq!(value.optional_field_one(), Some(42));
    assert_eq!(value.optional_field_two(), Some("Optional Value"));
}

#[test]
fn short_story_example_uses_fresh_auxiliary_record_each_time() {
    let first = short_story_example();
    let second = short_story_example();

    assert_ne!(first.mandatory_field_two(), second.mandatory_field_two());
}
