// Book aggregation must not depend on how per-entry Greeks are scheduled: with or
// without the `parallel` feature, totals equal an insertion-order fold.

use greekbook::core::OptionType;
use greekbook::instruments::{ForwardInstrument, OptionInstrument};
use greekbook::risk::Portfolio;

fn large_book() -> Portfolio {
    let mut book = Portfolio::new(3_000_000.0);
    for i in 0..2_000 {
        let kind = if i % 3 == 0 { OptionType::Put } else { OptionType::Call };
        let option = OptionInstrument::new(
            kind,
            90.0 + (i % 21) as f64,
            100.0,
            0.02,
            0.005,
            5 + (i % 400) as i64,
            0.12 + 0.003 * (i % 100) as f64,
        )
        .unwrap();
        let quantity = if i % 5 == 0 { -3.0 } else { 1.0 + (i % 4) as f64 };
        book.add_option(option, quantity, 10.0);
    }
    book.add_forward(ForwardInstrument::new(100.0).unwrap(), -150.0, 10.0);
    book
}

#[test]
fn totals_equal_insertion_order_fold() {
    let book = large_book();
    let value = book.portfolio_value();

    let mut expected_premium = 0.0;
    let mut expected_vega = 0.0;
    let mut expected_delta = 0.0;
    for e in book.options() {
        let g = e.instrument.greeks().unwrap();
        expected_premium += g.price * e.quantity * e.contract_size;
        expected_vega += g.vega * e.quantity * e.contract_size * 10_000.0 / value;
        expected_delta +=
            g.delta * e.quantity * e.contract_size * e.instrument.underlying_price() / value;
    }
    for e in book.forwards() {
        expected_delta += e.quantity * e.contract_size * e.instrument.underlying_price() / value;
    }

    assert_eq!(book.total_premium().unwrap(), expected_premium);
    assert_eq!(book.total_vega().unwrap(), expected_vega);
    assert_eq!(book.total_delta().unwrap(), expected_delta);
}

#[test]
fn repeated_summaries_are_bitwise_identical() {
    let book = large_book();
    let first = book.risk_summary().unwrap();
    for _ in 0..10 {
        assert_eq!(book.risk_summary().unwrap(), first);
    }
}

#[cfg(feature = "parallel")]
#[test]
fn summary_is_independent_of_pool_size() {
    let book = large_book();
    let single = rayon::ThreadPoolBuilder::new()
        .num_threads(1)
        .build()
        .unwrap()
        .install(|| book.risk_summary().unwrap());
    let many = rayon::ThreadPoolBuilder::new()
        .num_threads(8)
        .build()
        .unwrap()
        .install(|| book.risk_summary().unwrap());
    assert_eq!(single, many);
}
