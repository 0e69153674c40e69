use super::*;

#[test]
fn can_display_fetch_errors() {
    assert_eq!(FetchError::Transport("404".to_string()).to_string(), "transport failure: '404'");
    assert_eq!(FetchError::Shape("not json".to_string()).to_string(), "shape failure: 'not json'");
    assert_eq!(FetchError::Timeout(Duration::from_millis(1500)).to_string(), "timeout after 1500ms");
}

#[test]
fn can_convert_errors_into_generic_error() {
    let from_fetch: GenericError = FetchError::Timeout(Duration::from_secs(1)).into();
    let from_io: GenericError = std::io::Error::other("broken").into();
    let from_str: GenericError = "message".into();

    assert_eq!(from_fetch.to_string(), "timeout after 1000ms");
    assert_eq!(from_io.to_string(), "broken");
    assert_eq!(from_str, GenericError::from("message".to_string()));
}

