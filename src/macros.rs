/// Implements the constructor and the standard traits for a `#[repr(C)]` record
/// of three fields sharing the type parameter.
#[macro_export]
macro_rules! impl_standard_traits {
    ($type_name:ident, $type_param:ident, $first:ident, $second:ident, $third:ident) => {
        impl<$type_param> $type_name<$type_param> {
            #[doc = concat!("Initializes a new [`", stringify!($type_name), "`] instance.")]
            #[inline(always)]
            pub const fn new(
                $first: $type_param,
                $second: $type_param,
                $third: $type_param,
            ) -> Self {
                Self {
                    $first,
                    $second,
                    $third,
                }
            }
        }

        impl<$type_param> Copy for $type_name<$type_param> where $type_param: Copy {}

        impl<$type_param> Clone for $type_name<$type_param>
        where
            $type_param: Clone,
        {
            fn clone(&self) -> Self {
                Self {
                    $first: self.$first.clone(),
                    $second: self.$second.clone(),
                    $third: self.$third.clone(),
                }
            }
        }

        impl<$type_param> Default for $type_name<$type_param>
        where
            $type_param: Default,
        {
            #[inline]
            fn default() -> Self {
                Self::new(Default::default(), Default::default(), Default::default())
            }
        }

        impl<$type_param> PartialEq for $type_name<$type_param>
        where
            $type_param: PartialEq,
        {
            fn eq(&self, other: &Self) -> bool {
                self.$first == other.$first
                    && self.$second == other.$second
                    && self.$third == other.$third
            }
        }

        impl<$type_param> core::fmt::Debug for $type_name<$type_param>
        where
            $type_param: core::fmt::Debug,
        {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_struct(stringify!($type_name))
                    .field(stringify!($first), &self.$first)
                    .field(stringify!($second), &self.$second)
                    .field(stringify!($third), &self.$third)
                    .finish()
            }
        }

        #[cfg(test)]
        paste::paste! {
            #[cfg(test)]
            mod [<tests_gen_ $type_name:lower>] {
                use super::*;

                #[test]
                fn test_field_order() {
                    let value = $type_name::<f32>::new(1.0, 2.0, 3.0);
                    assert_eq!(value.$first, 1.0);
                    assert_eq!(value.$second, 2.0);
                    assert_eq!(value.$third, 3.0);
                }

                #[test]
                fn test_copy_equality() {
                    let value = $type_name::<f64>::new(4.0, 5.0, 6.0);
                    let copy = value;
                    assert_eq!(value, copy);
                    assert_ne!(value, $type_name::default());
                }
            }
        }
    };
}
