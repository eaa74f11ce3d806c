//! Partial-update DTO support.
//!
//! [`partial_dto!`] declares a creation DTO and its update counterpart from a
//! single field list. Every field of the update DTO is the `Option` of the
//! creation field, so the two shapes never drift apart.

/// An update shape whose fields are the optional form of `Full`'s fields.
pub trait Partial {
    type Full;

    /// Overwrite the fields of `full` that are present in `self`.
    fn apply_to(self, full: &mut Self::Full);

    /// `true` when no field is present.
    fn is_empty(&self) -> bool;
}

/// Declare `Create => Update { fields }`.
///
/// Both structs derive `Default`, so field types must too. Field attributes
/// are carried to both structs; the update fields default to
/// `None` and are omitted from serialized output when absent. Callers need
/// `serde` in scope as a dependency.
macro_rules! partial_dto {
    (
        $(#[$cmeta:meta])*
        $vis:vis struct $create:ident => $(#[$umeta:meta])* $update:ident {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$cmeta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        $vis struct $create {
            $( $(#[$fmeta])* $fvis $field: $ty, )*
        }

        $(#[$umeta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        $vis struct $update {
            $(
                $(#[$fmeta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                $fvis $field: Option<$ty>,
            )*
        }

        impl From<$create> for $update {
            #[allow(unused_variables)]
            fn from(full: $create) -> Self {
                Self { $( $field: Some(full.$field), )* }
            }
        }

        impl $crate::dto::Partial for $update {
            type Full = $create;

            #[allow(unused_variables)]
            fn apply_to(self, full: &mut $create) {
                $( if let Some(v) = self.$field { full.$field = v; } )*
            }

            fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )*
            }
        }
    };
}
