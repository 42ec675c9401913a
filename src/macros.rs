// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, &str vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// `{{Template|arg|arg…}}` as a String.
#[macro_export]
macro_rules! template {
    ($name:expr $(, $arg:expr)* $(,)?) => {{
        let mut s = ::std::string::String::from("{{");
        s.push_str($name);
        $(
            s.push('|');
            s.push_str($arg);
        )*
        s.push_str("}}");
        s
    }};
}
