use super::*;

#[test]
fn user_deserializes_from_server_payload() {
    let user: User = serde_json::from_str(r#"{"id":"u1","name":"Ann","email":"a@x.com"}"#).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.name, "Ann");
    assert_eq!(user.email, "a@x.com");
}

#[test]
fn car_summary_cover_url_is_optional() {
    let json = r#"{"id":"c1","name":"ONIX 1.0","year":"2018","km":"40.000","price":"52.000","city":"Palhoça - SC"}"#;
    let summary: CarSummary = serde_json::from_str(json).unwrap();
    assert_eq!(summary.cover_url, None);
}

#[test]
fn car_detail_round_trips_with_images() {
    let car = Car {
        id: "c1".to_owned(),
        name: "CIVIC EX".to_owned(),
        model: "2.0 automático".to_owned(),
        year: "2020".to_owned(),
        km: "31.000".to_owned(),
        price: "115.000".to_owned(),
        city: "Florianópolis - SC".to_owned(),
        whatsapp: "48999850058".to_owned(),
        description: "Único dono".to_owned(),
        owner_name: "Joe".to_owned(),
        user_id: "u1".to_owned(),
        images: vec![CarImage { id: "i1".to_owned(), url: "/uploads/u1/i1".to_owned() }],
    };
    let json = serde_json::to_string(&car).unwrap();
    let restored: Car = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, car);
}
