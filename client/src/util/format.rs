//! Listing display helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Price tag as shown on cards and the detail page.
#[must_use]
pub fn price_tag(price: &str) -> String {
    format!("R$ {price}")
}

/// The "year | mileage" line under a card title.
#[must_use]
pub fn year_km_line(year: &str, km: &str) -> String {
    format!("Year {year} | {km} km")
}

/// WhatsApp deep link with a prefilled interest message.
#[must_use]
pub fn whatsapp_link(phone: &str, car_name: &str) -> String {
    let message = format!("Hello, I saw the {car_name} listing on Carango and I am interested.");
    let mut encoded = String::with_capacity(message.len());
    for c in message.chars() {
        if c == ' ' {
            encoded.push_str("%20");
        } else {
            encoded.push(c);
        }
    }
    format!("https://api.whatsapp.com/send?phone={phone}&text={encoded}")
}
