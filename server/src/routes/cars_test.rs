use super::*;

fn summary_row(cover: Option<ImageRef>) -> CarSummaryRow {
    CarSummaryRow {
        id: Uuid::new_v4(),
        name: "ONIX 1.0".to_owned(),
        year: "2016".to_owned(),
        km: "180.000".to_owned(),
        price: "69.000".to_owned(),
        city: "Palhoça - SC".to_owned(),
        cover,
    }
}

#[test]
fn summary_response_builds_cover_url_from_refs() {
    let user_id = Uuid::new_v4();
    let image_id = Uuid::new_v4();
    let response = to_summary_response(summary_row(Some(ImageRef { id: image_id, user_id })));
    assert_eq!(response.cover_url, Some(format!("/uploads/{user_id}/{image_id}")));
}

#[test]
fn summary_response_without_photos_has_no_cover() {
    let response = to_summary_response(summary_row(None));
    assert_eq!(response.cover_url, None);
}

#[test]
fn car_errors_map_to_expected_statuses() {
    let id = Uuid::new_v4();
    assert_eq!(car_error_to_status(&CarError::NotFound(id)), StatusCode::NOT_FOUND);
    assert_eq!(car_error_to_status(&CarError::Forbidden(id)), StatusCode::FORBIDDEN);
    assert_eq!(car_error_to_status(&CarError::Invalid("images")), StatusCode::BAD_REQUEST);
}

#[test]
fn create_body_converts_field_for_field() {
    let image_id = Uuid::new_v4();
    let body = CreateCarBody {
        name: "Onix".to_owned(),
        model: "1.0".to_owned(),
        year: "2016".to_owned(),
        km: "180.000".to_owned(),
        price: "69.000".to_owned(),
        city: "Palhoça".to_owned(),
        whatsapp: "48999850058".to_owned(),
        description: "ok".to_owned(),
        image_ids: vec![image_id],
    };
    let new: NewCar = body.into();
    assert_eq!(new.name, "Onix");
    assert_eq!(new.image_ids, vec![image_id]);
}

#[test]
fn create_body_accepts_missing_image_ids() {
    // The client always sends the field, but the default keeps the payload
    // deserializable so validation can answer with 400 instead of 422.
    let body: CreateCarBody = serde_json::from_str(
        r#"{"name":"a","model":"b","year":"c","km":"d","price":"e","city":"f","whatsapp":"48999850058","description":"g"}"#,
    )
    .unwrap();
    assert!(body.image_ids.is_empty());
}
