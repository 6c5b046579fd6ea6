use super::*;

#[test]
fn parse_ws_url_accepts_ws_and_wss() {
    assert_eq!(parse_ws_url("ws://localhost:9000").expect("ws"), "ws://localhost:9000");
    assert_eq!(parse_ws_url(" wss://chat.example ").expect("wss"), "wss://chat.example");
}

#[test]
fn parse_ws_url_rejects_other_schemes() {
    for raw in ["http://localhost:9000", "localhost:9000", "", "ws://"] {
        assert!(
            matches!(parse_ws_url(raw), Err(ClientError::InvalidUrl(_))),
            "input {raw:?}"
        );
    }
}

#[test]
fn cli_defaults_to_fixed_endpoint() {
    let cli = Cli::try_parse_from(["chatroom"]).expect("parse");
    if std::env::var_os("CHATROOM_URL").is_none() {
        assert_eq!(cli.url, "ws://localhost:9000");
    }
    assert!(!cli.verbose);
    assert_eq!(cli.max_level(), tracing::Level::WARN);
}

#[test]
fn cli_accepts_url_and_verbose_flags() {
    let cli = Cli::try_parse_from(["chatroom", "--url", "ws://127.0.0.1:9100", "-v"]).expect("parse");
    assert_eq!(cli.url, "ws://127.0.0.1:9100");
    assert_eq!(cli.max_level(), tracing::Level::DEBUG);
}
