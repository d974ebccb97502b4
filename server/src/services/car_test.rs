use super::*;

fn valid_new_car() -> NewCar {
    NewCar {
        name: "Onix 1.0".to_owned(),
        model: "1.0 flex".to_owned(),
        year: "2016".to_owned(),
        km: "180.000".to_owned(),
        price: "69.000".to_owned(),
        city: "Palhoça - SC".to_owned(),
        whatsapp: "48999850058".to_owned(),
        description: "Second owner, serviced".to_owned(),
        image_ids: vec![Uuid::new_v4()],
    }
}

#[test]
fn listing_name_trims_and_uppercases() {
    assert_eq!(listing_name("  onix 1.0  "), "ONIX 1.0");
}

#[test]
fn valid_payload_passes_validation() {
    assert!(validate_new_car(&valid_new_car()).is_ok());
}

#[test]
fn blank_required_field_names_the_field() {
    let mut new = valid_new_car();
    new.city = "   ".to_owned();
    match validate_new_car(&new) {
        Err(CarError::Invalid(field)) => assert_eq!(field, "city"),
        other => panic!("expected Invalid(city), got {other:?}"),
    }
}

#[test]
fn whatsapp_must_be_11_or_12_digits() {
    let mut new = valid_new_car();
    new.whatsapp = "(48) 99985-0058".to_owned();
    assert!(matches!(validate_new_car(&new), Err(CarError::Invalid("whatsapp"))));

    new.whatsapp = "4899985005".to_owned();
    assert!(matches!(validate_new_car(&new), Err(CarError::Invalid("whatsapp"))));

    new.whatsapp = "554899985005".to_owned();
    assert!(validate_new_car(&new).is_ok());
}

#[test]
fn at_least_one_photo_required() {
    let mut new = valid_new_car();
    new.image_ids.clear();
    assert!(matches!(validate_new_car(&new), Err(CarError::Invalid("images"))));
}

#[test]
fn search_pattern_wraps_trimmed_term() {
    assert_eq!(search_pattern("  onix "), "%onix%");
}
