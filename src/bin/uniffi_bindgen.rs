//! UniFFI bindgen CLI tool for generating language bindings.
//!
//! Generates Swift, Kotlin, Python and Ruby bindings for the recipe-cards
//! library, e.g.:
//!
//! ```bash
//! cargo run --features cli --bin uniffi-bindgen generate --library target/release/librecipe_cards.so --language kotlin --out-dir ./bindings
//! ```

fn main() {
    uniffi::uniffi_bindgen_main()
}
