//! Typed accessors over the options mapping.
//!
//! [`option_accessors!`](crate::option_accessors) declares a trait with one
//! getter and one setter per option, implements it for
//! [`Instance`](crate::Instance), and emits a constant listing the option
//! names so the same list can be handed to
//! [`Script::accessor`](crate::Script::accessor).

/// Declares typed option accessors for [`Instance`](crate::Instance).
///
/// Each `getter / setter: Type` entry reads and writes the option named
/// `getter`. Values convert through [`OptionType`](crate::OptionType); a
/// getter returns `None` when the option is unset or holds another type.
///
/// # Examples
///
/// ```
/// use script_opts::{Console, Launch, OptionSpec, Script, option_accessors};
///
/// option_accessors! {
///     /// Accessors for the purge options.
///     pub trait PurgeAccessors (PURGE_ACCESSORS) {
///         path / set_path: String,
///         keep_n_days / set_keep_n_days: i64,
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let script = Script::new("purge")
///     .option(OptionSpec::new(["-p", "--path PATH"])?)
///     .option(OptionSpec::new(["-k", "--keep-n-days DAYS"])?.integer())
///     .accessor(PURGE_ACCESSORS.iter().copied());
///
/// let Launch::Ready(mut instance) = script.start(["-k", "7"], Console::new(std::io::sink())) else {
///     return Err("expected the arguments to parse".into());
/// };
/// assert_eq!(instance.keep_n_days(), Some(7));
/// assert_eq!(instance.path(), None);
/// instance.set_path("/tmp".to_owned());
/// assert_eq!(instance.path().as_deref(), Some("/tmp"));
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! option_accessors {
    (
        $(#[$meta:meta])*
        $vis:vis trait $name:ident ($names:ident) {
            $( $get:ident / $set:ident : $ty:ty ),* $(,)?
        }
    ) => {
        #[doc = concat!("Option names covered by [`", stringify!($name), "`].")]
        $vis const $names: &[&str] = &[$(stringify!($get)),*];

        $(#[$meta])*
        $vis trait $name {
            $(
                #[doc = concat!("Reads the `", stringify!($get), "` option.")]
                fn $get(&self) -> ::core::option::Option<$ty>;

                #[doc = concat!("Writes the `", stringify!($get), "` option.")]
                fn $set(&mut self, value: $ty);
            )*
        }

        impl $name for $crate::Instance<'_> {
            $(
                fn $get(&self) -> ::core::option::Option<$ty> {
                    self.options()
                        .get(stringify!($get))
                        .and_then(<$ty as $crate::OptionType>::from_value)
                }

                fn $set(&mut self, value: $ty) {
                    self.options_mut()
                        .set(stringify!($get), <$ty as $crate::OptionType>::into_value(value));
                }
            )*
        }
    };
}
