/// `i32` enumeration with its symbol table.
macro_rules! vk_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $vk:literal {
            $($konst:ident = $value:expr => $symbol:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name(pub i32);

        impl $name {
            $(pub const $konst: Self = Self($value);)*

            pub const SYMBOLS: pcjson_core::EnumTable = pcjson_core::EnumTable {
                type_name: $vk,
                values: &[$(($value as i64, $symbol),)*],
            };
        }

        impl pcjson_core::JsonValue for $name {
            fn to_json(&self, diag: &mut pcjson_core::Diagnostics) -> serde_json::Value {
                pcjson_core::encode_enum(i64::from(self.0), &Self::SYMBOLS, diag)
            }

            fn from_json(value: &serde_json::Value, diag: &mut pcjson_core::Diagnostics) -> Self {
                let raw = pcjson_core::decode_enum(value, &Self::SYMBOLS, diag);
                match i32::try_from(raw) {
                    Ok(v) => Self(v),
                    Err(_) => {
                        diag.error(format!("{} value {raw} does not fit in 32 bits", $vk));
                        Self::default()
                    }
                }
            }
        }
    };
}

/// Bitmask newtype with its bit and alias symbols. An empty bit list makes an
/// open (reserved) flags type.
macro_rules! vk_flags {
    (
        $(#[$meta:meta])*
        $name:ident($repr:ty), $vk:literal {
            $($konst:ident = $value:expr => $symbol:literal,)*
        }
        $(aliases {
            $($akonst:ident = $avalue:expr => $asymbol:literal,)*
        })?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name(pub $repr);

        impl $name {
            $(pub const $konst: Self = Self($value);)*
            $($(pub const $akonst: Self = Self($avalue);)*)?

            pub const SYMBOLS: pcjson_core::FlagTable = pcjson_core::FlagTable {
                type_name: $vk,
                width: <$repr>::BITS,
                bits: &[$(($value as u64, $symbol),)*],
                aliases: &[$($(($avalue as u64, $asymbol),)*)?],
            };

            pub const fn empty() -> Self {
                Self(0)
            }
        }

        impl std::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl pcjson_core::JsonValue for $name {
            fn to_json(&self, diag: &mut pcjson_core::Diagnostics) -> serde_json::Value {
                pcjson_core::encode_flags(u64::from(self.0), &Self::SYMBOLS, diag)
            }

            fn from_json(value: &serde_json::Value, diag: &mut pcjson_core::Diagnostics) -> Self {
                let bits = pcjson_core::decode_flags(value, &Self::SYMBOLS, diag);
                Self(<$repr>::try_from(bits).unwrap_or_default())
            }
        }
    };
}

/// Plain record whose fields all have a [`JsonValue`](pcjson_core::JsonValue) spelling.
macro_rules! record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($field:ident: $ty:ty => $key:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct $name {
            $(pub $field: $ty,)*
        }

        impl pcjson_core::Fields for $name {
            #[allow(unused_variables)]
            fn encode_fields(
                &self,
                out: &mut serde_json::Map<String, serde_json::Value>,
                diag: &mut pcjson_core::Diagnostics,
            ) {
                $(pcjson_core::write_field(out, $key, &self.$field, diag);)*
            }

            #[allow(unused_variables)]
            fn decode_fields(
                obj: &serde_json::Map<String, serde_json::Value>,
                diag: &mut pcjson_core::Diagnostics,
            ) -> Self {
                Self {
                    $($field: pcjson_core::read_field(obj, $key, diag),)*
                }
            }
        }

        impl pcjson_core::JsonValue for $name {
            fn to_json(&self, diag: &mut pcjson_core::Diagnostics) -> serde_json::Value {
                pcjson_core::encode_object(self, diag)
            }

            fn from_json(value: &serde_json::Value, diag: &mut pcjson_core::Diagnostics) -> Self {
                pcjson_core::decode_object(value, diag)
            }
        }
    };
}

/// Binds a record to its `sType`.
macro_rules! structure {
    ($name:ident, $stype:ident, $vk:literal) => {
        impl pcjson_core::Structure for $name {
            type Tag = $crate::vk::StructureType;
            const TYPE_NAME: &'static str = $vk;
            const TAG: $crate::vk::StructureType = $crate::vk::StructureType::$stype;
        }
    };
}

/// Binds a record to its `sType` and the extensions it accepts.
macro_rules! extensible {
    ($name:ident, $stype:ident, $vk:literal, [$($allowed:ident),* $(,)?]) => {
        structure!($name, $stype, $vk);

        impl pcjson_core::Extensible for $name {
            type Link = $crate::vk::Extension;

            fn allowed() -> &'static [$crate::vk::StructureType] {
                &[$($crate::vk::StructureType::$allowed),*]
            }
        }
    };
}
