use super::*;

#[test]
fn price_tag_prefixes_currency() {
    assert_eq!(price_tag("69.000"), "R$ 69.000");
}

#[test]
fn year_km_line_combines_both_fields() {
    assert_eq!(year_km_line("2016", "180.000"), "Year 2016 | 180.000 km");
}

#[test]
fn whatsapp_link_targets_the_seller_phone() {
    let link = whatsapp_link("48999850058", "ONIX 1.0");
    assert!(link.starts_with("https://api.whatsapp.com/send?phone=48999850058&text="));
    assert!(link.contains("ONIX"));
    assert!(!link.contains(' '), "spaces must be percent-encoded: {link}");
}
