use chrono::NaiveDate;
use greekbook::core::{BookSnapshot, OptionType, RiskReport, from_json, to_json_pretty};
use greekbook::instruments::{ForwardInstrument, OptionInstrument};
use greekbook::risk::Portfolio;
use greekbook::vol::{RollingVolConfig, RollingVolPoint};

fn sample_snapshot() -> BookSnapshot {
    let mut portfolio = Portfolio::new(2_500_000.0);
    portfolio.add_option(
        OptionInstrument::new(OptionType::Call, 100.0, 110.0, 0.05, 0.02, 30, 0.20).unwrap(),
        100.0,
        1.0,
    );
    portfolio.add_option(
        OptionInstrument::new(OptionType::Put, 3_150.0, 2_900.0, -0.001, 0.0, 91, 0.65).unwrap(),
        -12.0,
        0.1,
    );
    portfolio.add_forward(ForwardInstrument::new(3_150.0).unwrap(), 4.0, 0.1);

    BookSnapshot {
        book_id: "DERIBIT-ETH".to_string(),
        as_of: NaiveDate::from_ymd_opt(2024, 6, 28).unwrap(),
        portfolio,
    }
}

#[test]
fn book_snapshot_json_roundtrip() {
    let snapshot = sample_snapshot();
    let json = to_json_pretty(&snapshot).unwrap();
    assert!(json.contains("\"as_of\": \"2024-06-28\""));
    assert!(json.contains("\"option_type\": \"Put\""));

    let decoded: BookSnapshot = from_json(&json).unwrap();
    assert_eq!(decoded, snapshot);
    assert_eq!(decoded.risk_report().unwrap(), snapshot.risk_report().unwrap());
}

#[test]
fn risk_report_json_roundtrip() {
    let report = sample_snapshot().risk_report().unwrap();
    assert_eq!(report.book_id, "DERIBIT-ETH");
    assert_eq!(report.portfolio_value, 2_500_000.0);

    let decoded: RiskReport = from_json(&to_json_pretty(&report).unwrap()).unwrap();
    assert_eq!(decoded, report);
}

#[test]
fn instrument_payloads_are_validated_on_decode() {
    let expired = r#"{
        "option_type": "Call",
        "underlying_price": 100.0,
        "strike_price": 110.0,
        "risk_free_rate": 0.05,
        "dividend_yield": 0.02,
        "time_to_maturity_days": 0,
        "implied_volatility": 0.2
    }"#;
    assert!(from_json::<OptionInstrument>(expired).is_err());

    let lowercase_kind = expired
        .replace("\"Call\"", "\"call\"")
        .replace("\"time_to_maturity_days\": 0", "\"time_to_maturity_days\": 30");
    assert!(from_json::<OptionInstrument>(&lowercase_kind).is_err());

    let valid = lowercase_kind.replace("\"call\"", "\"Call\"");
    let option: OptionInstrument = from_json(&valid).unwrap();
    assert_eq!(option.time_to_maturity_days(), 30);

    assert!(from_json::<ForwardInstrument>(r#"{"underlying_price": -5.0}"#).is_err());
}

#[test]
fn volatility_types_roundtrip() {
    let config = RollingVolConfig::new(21, 16.0).unwrap();
    let decoded: RollingVolConfig = from_json(&to_json_pretty(&config).unwrap()).unwrap();
    assert_eq!(decoded, config);

    let points = vec![
        RollingVolPoint {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            value: None,
        },
        RollingVolPoint {
            date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            value: Some(0.42),
        },
    ];
    let json = to_json_pretty(&points).unwrap();
    assert!(json.contains("null"));
    let decoded: Vec<RollingVolPoint> = from_json(&json).unwrap();
    assert_eq!(decoded, points);
}
