#[macro_export]
macro_rules! env_lazy {
    ($( $vis:vis $name:ident : $ty:ty = ($key:literal, $default:expr); )* ) => {
        $(
            $vis static $name: ::std::sync::LazyLock<$ty> = ::std::sync::LazyLock::new(|| {
                $crate::libs::config::load_env();
                $crate::libs::config::Config::get_var_t::<$ty>($key, $default)
            });
        )*
    };
}

env_lazy! {
    // rows printed by `assets` before the listing is cut short; 0 prints all.
    pub ASSET_PREVIEW: usize = ("ZANO_ASSET_PREVIEW", 0);
    // strip ANSI colors from console output.
    pub NO_COLOR: bool       = ("ZANO_NO_COLOR", false);
}

/// Ticker column width in the balance table.
pub const TICKER_WIDTH: usize = 8;
