//! Decode a submitted form into a nested typed object.
//!
//! Run with: `cargo run --example fluent_decode`

use formlit::{FormData, Forms, Value};

fn main() {
    env_logger::init();

    // What the browser would submit for a small profile form.
    let body = "user.name=Alice+Smith&user.age=39,5&user.active=true&tags=rust&tags=forms&bio=";

    let decoder = Forms::decoder()
        .number("user.age")
        .flag("user.active")
        .list("tags")
        .custom("user.name", |raw| Ok(Value::String(raw.to_uppercase())))
        .debug()
        .build()
        .expect("field registrations are valid");

    let form = FormData::parse_urlencoded(body);
    match decoder.decode(&form) {
        Ok(object) => println!("{}", serde_json::to_string_pretty(&object).expect("serialize")),
        Err(error) => eprintln!("decode failed: {error}"),
    }
}
