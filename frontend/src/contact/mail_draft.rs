use urlencoding::encode;

use super::models::ContactForm;

pub const SUBJECT: &str = "採用に関するお問い合わせ";

/// Plain-text application body for the mail client.
pub fn body(form: &ContactForm) -> String {
    let licenses = if form.licenses.is_empty() {
        "無し".to_string()
    } else {
        form.licenses.as_slice().join("、")
    };
    let age = form.age.map(|age| age.to_string()).unwrap_or_default();
    let experience = form.experience.map(|e| e.label()).unwrap_or_default();
    let position = form.position.map(|p| p.label()).unwrap_or("未選択");

    format!(
        "お名前: {} {}\n年齢: {}歳\n電話番号: {}\nメールアドレス: {}\n経験年数: {}\n保有資格: {}\n現在のポジション: {}\nメッセージ:\n{}",
        form.last_name, form.first_name, age, form.phone, form.email, experience, licenses, position, form.message,
    )
    .trim()
    .to_string()
}

/// `mailto:` URI with the subject and body percent-encoded.
pub fn mailto_uri(recipient: &str, form: &ContactForm) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        encode(SUBJECT),
        encode(&body(form))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::models::{ExperienceBracket, Position};

    fn form() -> ContactForm {
        let mut form = ContactForm {
            last_name: "山田".into(),
            first_name: "花子".into(),
            phone: "090-1234-5678".into(),
            email: "hanako@example.com".into(),
            experience: Some(ExperienceBracket::ThreeToFive),
            age: Some(25),
            message: "よろしくお願いします".into(),
            ..ContactForm::default()
        };
        form.licenses.insert("美容師免許");
        form.licenses.insert("管理美容師");
        form
    }

    #[test]
    fn body_embeds_every_field_in_order() {
        let expected = "お名前: 山田 花子\n年齢: 25歳\n電話番号: 090-1234-5678\nメールアドレス: hanako@example.com\n経験年数: 3~5年\n保有資格: 美容師免許、管理美容師\n現在のポジション: 未選択\nメッセージ:\nよろしくお願いします";
        assert_eq!(body(&form()), expected);
    }

    #[test]
    fn empty_licenses_read_none_and_position_is_shown_when_chosen() {
        let mut form = form();
        form.licenses = Default::default();
        form.position = Some(Position::Assistant);
        let body = body(&form);
        assert!(body.contains("保有資格: 無し"));
        assert!(body.contains("現在のポジション: アシスタント"));
    }

    #[test]
    fn uri_is_percent_encoded() {
        let uri = mailto_uri("recruit@example.com", &form());
        assert!(uri.starts_with("mailto:recruit@example.com?subject="));
        let (_, query) = uri.split_once('?').unwrap();
        assert!(query.is_ascii());
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));

        let body_param = query.split_once("&body=").unwrap().1;
        let decoded = urlencoding::decode(body_param).unwrap();
        assert_eq!(decoded, super::body(&form()));
    }
}
