use proc_macro2::TokenStream;
use syn::Result;

macro_rules! bail {
    ($span:expr, $($arg:tt)*) => {
        return ::std::result::Result::Err(::syn::Error::new($span, ::std::format!($($arg)*)))
    };
}

pub fn into_macro_output(input: Result<TokenStream>) -> proc_macro::TokenStream {
    input.unwrap_or_else(|e| e.to_compile_error()).into()
}
