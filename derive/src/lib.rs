use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod record_sink;

#[proc_macro_derive(RecordSink, attributes(records))]
pub fn derive_record_sink(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match record_sink::expand_record_sink(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error().into(),
    }
}
