//! Booking form → `mailto:` compose link.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

pub const BOOKING_SUBJECT: &str = "Consulting session request";

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, as `encodeURIComponent` escapes.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Fields read from the booking form at submit time. Nothing is validated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub topic: String,
    pub time: String,
}

impl BookingRequest {
    /// Pick the four named fields out of submitted form values.
    /// Missing fields are left empty; unrelated fields are ignored.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut request = Self::default();
        for (key, value) in fields {
            let slot = match key.as_ref() {
                "name" => &mut request.name,
                "email" => &mut request.email,
                "topic" => &mut request.topic,
                "time" => &mut request.time,
                _ => continue,
            };
            *slot = value.into();
        }
        request
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nTopic: {}\nPreferred time: {}",
            self.name, self.email, self.topic, self.time
        )
    }

    pub fn mailto_uri(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            encode_component(BOOKING_SUBJECT),
            encode_component(&self.body())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_lists_fields_in_order() {
        let request = BookingRequest {
            name: "Ana".into(),
            email: "a@b.com".into(),
            topic: "AI".into(),
            time: "Mon".into(),
        };
        assert_eq!(
            request.body(),
            "Name: Ana\nEmail: a@b.com\nTopic: AI\nPreferred time: Mon"
        );
    }

    #[test]
    fn missing_fields_become_empty_segments() {
        let request = BookingRequest::from_fields([("name", "Ana"), ("unrelated", "x")]);
        assert_eq!(request.email, "");
        assert_eq!(
            request.body(),
            "Name: Ana\nEmail: \nTopic: \nPreferred time: "
        );
    }

    #[test]
    fn non_ascii_is_percent_encoded_as_utf8() {
        let request = BookingRequest::from_fields([("name", "Jyväskylä")]);
        let uri = request.mailto_uri("x@y.fi");
        assert!(uri.contains("Name%3A%20Jyv%C3%A4skyl%C3%A4%0A"));
    }

    #[test]
    fn component_marks_stay_literal() {
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("a b/c?d#e"), "a%20b%2Fc%3Fd%23e");
        assert_eq!(encode_component("\t\u{7f}"), "%09%7F");
    }
}
