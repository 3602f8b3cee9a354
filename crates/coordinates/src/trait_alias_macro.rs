// Same shape as https://github.com/abcperf/trait-alias-macro, narrowed to what the crate needs

macro_rules! trait_alias {
    ($(#[$meta:meta])* $vis:vis trait $name:ident = $($base:tt)+) => {
        $(#[$meta])*
        $vis trait $name: $($base)+ {}
        impl<T: $($base)+> $name for T {}
    };
}

pub(crate) use trait_alias;
