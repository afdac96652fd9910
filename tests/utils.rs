#![allow(missing_docs)]
#![allow(dead_code)]

use std::sync::Once;

use credibil_jwe::{Header, Recipient};
use rstest::fixture;
use serde_json::{json, Value};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// initalise tracing once for all tests
static INIT: Once = Once::new();

/// Initialise tracing for tests.
pub fn init_tracer() {
    INIT.call_once(|| {
        let subscriber = FmtSubscriber::builder().with_max_level(Level::ERROR).finish();
        tracing::subscriber::set_global_default(subscriber).expect("subscriber set");
    });
}

/// Convert a JSON object literal into a `Header`.
pub fn header(value: Value) -> Header {
    let Value::Object(map) = value else { panic!("header should be a JSON object") };
    map
}

/// Three recipients, each with a distinct key ID and wrapped key.
#[fixture]
pub fn recipients() -> Vec<Recipient> {
    vec![
        Recipient::new(header(json!({"alg": "RSA1_5", "kid": "2011-04-29"})), vec![0xA0; 256]),
        Recipient::new(header(json!({"alg": "A128KW", "kid": "7"})), vec![0xB1; 24]),
        Recipient::new(header(json!({"alg": "ECDH-ES", "kid": "peer"})), Vec::new()),
    ]
}
