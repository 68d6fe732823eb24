//! Macros for declaring phase enums.

/// Declare a fieldless enum and implement [`State`](crate::core::State) for it.
///
/// Variant names double as the phase names. Extra attributes on the enum
/// are kept, so additional derives can be added alongside the generated
/// `Clone, PartialEq, Debug, Serialize, Deserialize`.
///
/// # Example
///
/// ```
/// use keypad::core::State;
/// use keypad::state_enum;
///
/// state_enum! {
///     #[derive(Copy, Eq)]
///     pub enum Door {
///         Open,
///         Closed,
///         Jammed,
///     }
///     error: [Jammed]
/// }
///
/// assert_eq!(Door::Closed.name(), "Closed");
/// assert!(Door::Jammed.is_error());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum Signal {
            Idle,
            Running,
            Done,
            Failed,
        }
        final: [Done, Failed]
        error: [Failed]
    }

    #[test]
    fn generates_state_impl() {
        assert_eq!(Signal::Running.name(), "Running");
        assert!(!Signal::Idle.is_final());
        assert!(Signal::Done.is_final());
        assert!(!Signal::Done.is_error());
        assert!(Signal::Failed.is_error());
    }

    #[test]
    fn accepts_extra_derives() {
        state_enum! {
            #[derive(Copy, Eq, Hash)]
            pub enum Light {
                Red,
                Green,
            }
        }

        let light = Light::Red;
        let copied = light;
        assert_eq!(light, copied);
        assert!(!Light::Green.is_final());
        assert!(!Light::Green.is_error());
    }
}
