use crate::config::ErrorPolicy;

#[test]
fn test_error_policy_parsing() {
    assert_eq!("distinct".parse::<ErrorPolicy>(), Ok(ErrorPolicy::Distinct));
    assert_eq!("Legacy".parse::<ErrorPolicy>(), Ok(ErrorPolicy::Legacy));
    assert_eq!(" legacy ".parse::<ErrorPolicy>(), Ok(ErrorPolicy::Legacy));
    assert!("strict".parse::<ErrorPolicy>().is_err());
}

#[test]
fn test_error_policy_defaults_to_distinct() {
    assert_eq!(ErrorPolicy::default(), ErrorPolicy::Distinct);
}
