use super::*;

#[test]
fn app_id_from_str() {
    assert_eq!(AppId::try_from("413150").unwrap(), AppId { app_id: 413150 });
    assert_eq!(AppId::try_from(" 10 ").unwrap(), AppId { app_id: 10 });
}

#[test]
fn app_id_rejects_invalid() {
    assert!(AppId::try_from("0").is_err());
    assert!(AppId::try_from("-5").is_err());
    assert!(AppId::try_from("stardew").is_err());
}

#[test]
fn app_id_display() {
    assert_eq!(AppId::from(730).to_string(), "730");
}
